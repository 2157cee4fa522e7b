//! Dwellboard library exports for testing

pub mod core;
pub mod tui;
pub mod wordlist;

#[cfg(test)]
pub mod test_support;
