use std::env;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::lang::Lang;

const API_BASE: &str = "https://translate.googleapis.com";
const BASE_URL_ENV: &str = "WORDCARD_TRANSLATE_URL";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("translation API error: status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed translation response: {0}")]
    Malformed(String),

    #[error("invalid translation URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Abstraction over a remote translation backend.
/// Implemented by `GoogleTranslateClient` for production; stub implementations used in tests.
pub trait Translator {
    async fn translate(&self, text: &str, target: &Lang) -> Result<String, TranslateError>;
}

/// Client for the keyless Google Translate `gtx` endpoint.
pub struct GoogleTranslateClient {
    http: Client,
    base_url: String,
}

impl GoogleTranslateClient {
    /// Uses the public endpoint unless `WORDCARD_TRANSLATE_URL` is set.
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

    fn request_url(&self, text: &str, target: &Lang) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &format!("{}/translate_a/single", self.base_url),
            &[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", text),
            ],
        )
    }
}

impl Translator for GoogleTranslateClient {
    async fn translate(&self, text: &str, target: &Lang) -> Result<String, TranslateError> {
        let url = self.request_url(text, target)?;

        let response = self
            .http
            .get(url)
            .header("User-Agent", crate::USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let value: Value =
            serde_json::from_str(&body).map_err(|e| TranslateError::Malformed(e.to_string()))?;
        let translated = parse_translation(&value).ok_or_else(|| {
            let snippet: String = body.chars().take(200).collect();
            TranslateError::Malformed(format!("no translated segments in {snippet}"))
        })?;

        debug!(lang = %target, chars = text.chars().count(), "translation complete");
        Ok(translated)
    }
}

/// The `gtx` response is `[[["translated", "original", ...], ...], ...]`; long inputs
/// are split into several segments that concatenate back into the full translation.
fn parse_translation(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

/// Translates `text`, returning it unchanged when the backend fails.
pub async fn translate_or_original(
    translator: &impl Translator,
    text: &str,
    target: &Lang,
) -> String {
    match translator.translate(text, target).await {
        Ok(translated) => translated,
        Err(e) => {
            warn!(%e, text, "translation failed, keeping original text");
            text.to_string()
        }
    }
}
