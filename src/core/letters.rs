//! # Letter Picker
//!
//! Slider-driven keyboard: a value in 0–100 picks a letter from the active
//! half of the alphabet, and the top of the range is reserved for space.
//! Releasing the slider commits the symbol and snaps the value back to 0.

pub const UPPER_HALF: &str = "ABCDEFGHIJKLM";
pub const LOWER_HALF: &str = "NOPQRSTUVWXYZ";
pub const SPACE_LABEL: &str = "ESPAÇO";

/// Slider values at or above this select space.
pub const SPACE_THRESHOLD: u8 = 97;
pub const MAX_SLIDER: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphabetMode {
    #[default]
    Upper,
    Lower,
}

impl AlphabetMode {
    pub fn alphabet(self) -> &'static str {
        match self {
            AlphabetMode::Upper => UPPER_HALF,
            AlphabetMode::Lower => LOWER_HALF,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AlphabetMode::Upper => AlphabetMode::Lower,
            AlphabetMode::Lower => AlphabetMode::Upper,
        }
    }

    pub fn label(self) -> String {
        let alphabet = self.alphabet();
        let first = alphabet.chars().next().unwrap_or(' ');
        let last = alphabet.chars().last().unwrap_or(' ');
        match self {
            AlphabetMode::Upper => format!("Modo: Superior ({first}-{last})"),
            AlphabetMode::Lower => format!("Modo: Inferior ({first}-{last})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Letter(char),
    Space,
}

impl Symbol {
    pub fn display(self) -> String {
        match self {
            Symbol::Letter(c) => c.to_string(),
            Symbol::Space => SPACE_LABEL.to_string(),
        }
    }

    /// The text committed to the buffer.
    pub fn as_text(self) -> String {
        match self {
            Symbol::Letter(c) => c.to_string(),
            Symbol::Space => " ".to_string(),
        }
    }
}

/// Maps a slider value to a symbol in `mode`'s alphabet.
pub fn symbol_at(value: u8, mode: AlphabetMode) -> Symbol {
    if value >= SPACE_THRESHOLD {
        return Symbol::Space;
    }
    let letters: Vec<char> = mode.alphabet().chars().collect();
    let max_index = letters.len() - 1;
    let span = f64::from(SPACE_THRESHOLD - 1);
    let index = ((f64::from(value) / span) * max_index as f64).round() as usize;
    Symbol::Letter(letters[index.min(max_index)])
}

#[derive(Debug, Clone, Default)]
pub struct LetterPicker {
    mode: AlphabetMode,
    value: u8,
}

impl LetterPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AlphabetMode {
        self.mode
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn set_value(&mut self, value: u8) {
        self.value = value.min(MAX_SLIDER);
    }

    /// Moves the slider by `delta`, clamped to the slider range.
    pub fn nudge(&mut self, delta: i16) {
        let next = (i16::from(self.value) + delta).clamp(0, i16::from(MAX_SLIDER));
        self.value = next as u8;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn current(&self) -> Symbol {
        symbol_at(self.value, self.mode)
    }

    /// Returns the symbol under the slider and resets it to 0.
    pub fn commit(&mut self) -> Symbol {
        let symbol = self.current();
        self.value = 0;
        symbol
    }
}
