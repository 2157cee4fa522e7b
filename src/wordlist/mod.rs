//! # Word List Fetching
//!
//! One-shot download of the suggestion word list. The core only ever sees
//! the parsed `WordList`; everything network-shaped lives here.

pub mod http;
pub mod source;

pub use http::HttpWordSource;
pub use source::{WordListError, WordSource};
