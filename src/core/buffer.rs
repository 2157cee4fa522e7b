//! # Output Buffer
//!
//! The text the user is composing. Phrases arrive one per line from the
//! menu, single characters arrive from the letter picker, and the editing
//! actions trim from the end.

use crate::core::menu::TextEffect;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends a committed phrase followed by a newline.
    pub fn append_phrase(&mut self, phrase: &str) {
        self.text.push_str(phrase);
        self.text.push('\n');
    }

    /// Appends raw text with no separator.
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub fn apply(&mut self, effect: TextEffect) {
        match effect {
            TextEffect::DeleteLastWord => self.delete_last_word(),
            TextEffect::DeleteLastSentence => self.delete_last_sentence(),
            TextEffect::ClearAll => self.text.clear(),
        }
    }

    /// Drops the last word. Remaining words are rejoined with single spaces,
    /// so line breaks between them collapse. Leading whitespace survives as a
    /// single space, the empty first field of a split on whitespace runs.
    fn delete_last_word(&mut self) {
        let trimmed = self.text.trim_end();
        let leading = trimmed.starts_with(char::is_whitespace);
        let mut words: Vec<&str> = trimmed.split_whitespace().collect();
        words.pop();
        self.text = if words.is_empty() {
            String::new()
        } else {
            let mut joined = if leading { String::from(" ") } else { String::new() };
            joined.push_str(&words.join(" "));
            joined.push(' ');
            joined
        };
    }

    /// Drops the last line.
    fn delete_last_sentence(&mut self) {
        let trimmed = self.text.trim_end();
        if trimmed.is_empty() {
            self.text.clear();
            return;
        }
        let mut lines: Vec<&str> = trimmed.split('\n').collect();
        lines.pop();
        self.text = if lines.is_empty() {
            String::new()
        } else {
            let mut joined = lines.join("\n");
            joined.push('\n');
            joined
        };
    }

    /// The word being typed: everything after the last whitespace.
    pub fn partial_word(&self) -> &str {
        self.text.rsplit(char::is_whitespace).next().unwrap_or("")
    }

    /// Replaces the word being typed with `word` and a trailing space.
    pub fn complete_word(&mut self, word: &str) {
        let keep = self.text.len() - self.partial_word().len();
        self.text.truncate(keep);
        self.text.push_str(word);
        self.text.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(text: &str, effect: TextEffect) -> String {
        let mut buffer = OutputBuffer::with_text(text);
        buffer.apply(effect);
        buffer.text().to_string()
    }

    #[test]
    fn test_append_phrase_adds_newline() {
        let mut buffer = OutputBuffer::with_text("Oi\n");
        buffer.append_phrase("Sim");
        assert_eq!(buffer.text(), "Oi\nSim\n");
    }

    #[test]
    fn test_delete_last_word() {
        assert_eq!(applied("oi tudo bem ", TextEffect::DeleteLastWord), "oi tudo ");
        assert_eq!(applied("oi tudo bem", TextEffect::DeleteLastWord), "oi tudo ");
        assert_eq!(applied("oi", TextEffect::DeleteLastWord), "");
        assert_eq!(applied("   ", TextEffect::DeleteLastWord), "");
        assert_eq!(applied("", TextEffect::DeleteLastWord), "");
    }

    #[test]
    fn test_delete_last_word_keeps_leading_space() {
        assert_eq!(applied(" oi tudo", TextEffect::DeleteLastWord), " oi ");
        assert_eq!(applied("\n\nSim Não", TextEffect::DeleteLastWord), " Sim ");
        // Nothing but the leading field left.
        assert_eq!(applied(" oi", TextEffect::DeleteLastWord), "");
    }

    #[test]
    fn test_delete_last_word_collapses_line_breaks() {
        assert_eq!(applied("Sim\nNão\nTalvez\n", TextEffect::DeleteLastWord), "Sim Não ");
    }

    #[test]
    fn test_delete_last_sentence() {
        assert_eq!(applied("linha1\nlinha2\n", TextEffect::DeleteLastSentence), "linha1\n");
        assert_eq!(applied("linha1\nlinha2", TextEffect::DeleteLastSentence), "linha1\n");
        assert_eq!(applied("linha1\n", TextEffect::DeleteLastSentence), "");
        assert_eq!(applied("\n\n", TextEffect::DeleteLastSentence), "");
        assert_eq!(applied("", TextEffect::DeleteLastSentence), "");
    }

    #[test]
    fn test_clear_all() {
        assert_eq!(applied("qualquer coisa\n", TextEffect::ClearAll), "");
    }

    #[test]
    fn test_partial_word() {
        assert_eq!(OutputBuffer::with_text("").partial_word(), "");
        assert_eq!(OutputBuffer::with_text("CAS").partial_word(), "CAS");
        assert_eq!(OutputBuffer::with_text("Sim\nCAS").partial_word(), "CAS");
        assert_eq!(OutputBuffer::with_text("oi ").partial_word(), "");
    }

    #[test]
    fn test_complete_word_replaces_partial() {
        let mut buffer = OutputBuffer::with_text("Oi\nCAS");
        buffer.complete_word("casa");
        assert_eq!(buffer.text(), "Oi\ncasa ");

        let mut empty = OutputBuffer::new();
        empty.complete_word("bom");
        assert_eq!(empty.text(), "bom ");
    }
}
