//! Word list used for completion suggestions on the letters screen.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Splits a newline-separated body into trimmed, non-empty words.
    pub fn parse(body: &str) -> Self {
        let words = body
            .split('\n')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// First `limit` words starting with `prefix`, ignoring case. An empty
    /// prefix yields nothing.
    pub fn suggestions(&self, prefix: &str, limit: usize) -> Vec<&str> {
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }
        let prefix = prefix.to_lowercase();
        self.words
            .iter()
            .filter(|w| w.to_lowercase().starts_with(&prefix))
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_blank_lines() {
        let list = WordList::parse("casa\n  carro \r\n\n\nbola\n");
        assert_eq!(list.words(), ["casa", "carro", "bola"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_suggestions_match_prefix_case_insensitively() {
        let list = WordList::parse("casa\ncarro\nbola\nCaminho\n");
        assert_eq!(list.suggestions("CA", 10), vec!["casa", "carro", "Caminho"]);
        assert_eq!(list.suggestions("ca", 2), vec!["casa", "carro"]);
        assert!(list.suggestions("x", 3).is_empty());
    }

    #[test]
    fn test_empty_prefix_suggests_nothing() {
        let list = WordList::parse("casa\n");
        assert!(list.suggestions("", 3).is_empty());
        assert!(list.suggestions("c", 0).is_empty());
    }
}
