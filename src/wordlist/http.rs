//! Word source backed by a plain-text file served over HTTP, one word per
//! line.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::words::WordList;
use crate::wordlist::{WordListError, WordSource};

pub struct HttpWordSource {
    url: String,
    client: reqwest::Client,
}

impl HttpWordSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl WordSource for HttpWordSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn load(&self) -> Result<WordList, WordListError> {
        info!("Fetching word list from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| WordListError::Network(e.to_string()))?;

        debug!("Word list response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Word list request failed with status {}", status);
            return Err(WordListError::Http { status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| WordListError::Body(e.to_string()))?;

        let words = WordList::parse(&body);
        info!("Parsed {} words ({} bytes)", words.len(), body.len());
        Ok(words)
    }
}
