use std::fmt;

use async_trait::async_trait;

use crate::core::words::WordList;

/// Errors that can occur while fetching a word list.
#[derive(Debug)]
pub enum WordListError {
    /// Transport failure (DNS, refused connection, timeout).
    Network(String),
    /// Server answered with a non-success status.
    Http { status: u16 },
    /// Response body could not be read as text.
    Body(String),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordListError::Network(msg) => write!(f, "network error: {msg}"),
            WordListError::Http { status } => write!(f, "HTTP error! status: {status}"),
            WordListError::Body(msg) => write!(f, "body error: {msg}"),
        }
    }
}

impl std::error::Error for WordListError {}

#[async_trait]
pub trait WordSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    async fn load(&self) -> Result<WordList, WordListError>;
}
