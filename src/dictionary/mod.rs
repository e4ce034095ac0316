pub mod types;

use std::collections::HashSet;
use std::env;
use std::time::Duration;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Client;
use tracing::{debug, warn};

use types::Entry;

const API_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const BASE_URL_ENV: &str = "WORDCARD_DICTIONARY_URL";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Characters that would change the meaning of a single URL path segment.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("no dictionary entry for '{0}'")]
    NotFound(String),

    #[error("dictionary API error: status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed dictionary response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Source of example sentences for a word.
/// Implemented by `DictionaryClient` for production; stub implementations used in tests.
pub trait ExampleSource {
    async fn examples(&self, word: &str) -> Result<Vec<String>, DictionaryError>;
}

/// HTTP client for the Free Dictionary API (dictionaryapi.dev).
pub struct DictionaryClient {
    http: Client,
    base_url: String,
}

impl DictionaryClient {
    /// Uses the public endpoint unless `WORDCARD_DICTIONARY_URL` is set.
    pub fn from_env(http: Client) -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| API_BASE.to_string());
        Self::with_base_url(http, &base_url)
    }

    pub fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }
}

impl ExampleSource for DictionaryClient {
    async fn examples(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        let url = format!(
            "{}/{}",
            self.base_url,
            utf8_percent_encode(word, SEGMENT_ENCODE_SET)
        );

        let response = self
            .http
            .get(&url)
            .header("User-Agent", crate::USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DictionaryError::NotFound(word.to_string()));
        }
        if !status.is_success() {
            return Err(DictionaryError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let entries: Vec<Entry> = serde_json::from_str(&text)?;
        let examples = extract_examples(&entries);
        debug!(word, count = examples.len(), "dictionary lookup complete");
        Ok(examples)
    }
}

/// Flattens every `definitions[].example` in discovery order, keeping the first of
/// any exact duplicates. Empty strings are ignored.
pub fn extract_examples(entries: &[Entry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut examples = Vec::new();

    let definitions = entries
        .iter()
        .flat_map(|e| e.meanings.iter().flatten())
        .flat_map(|m| m.definitions.iter().flatten());

    for definition in definitions {
        if let Some(example) = &definition.example
            && !example.is_empty()
            && seen.insert(example.as_str())
        {
            examples.push(example.clone());
        }
    }

    examples
}

/// Looks up examples, substituting an empty list for any failure.
pub async fn examples_or_empty(source: &impl ExampleSource, word: &str) -> Vec<String> {
    match source.examples(word).await {
        Ok(examples) => examples,
        Err(e @ DictionaryError::NotFound(_)) => {
            debug!(%e, "no dictionary examples");
            vec![]
        }
        Err(e) => {
            warn!(%e, word, "dictionary lookup failed");
            vec![]
        }
    }
}
