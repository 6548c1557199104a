use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::TextTranslator;

/// LibreTranslate client for the /translate API
#[derive(Debug)]
pub struct LibreTranslate {
    /// Full URL of the translate endpoint
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
    /// Optional API key sent with each request
    api_key: Option<String>,
}

/// Translate request body for the LibreTranslate API
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    /// Text to translate
    q: &'a str,
    /// Source language, detected server-side
    source: &'a str,
    /// Target language code
    target: &'a str,
    /// Payload format; always plain text, markup is handled by the caller
    format: &'a str,
    /// API key, if the server requires one
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Translate response from the LibreTranslate API
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    /// Translated text
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Error body the API returns on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

impl LibreTranslate {
    /// Create a new client for the given translate endpoint
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        LibreTranslate {
            endpoint: endpoint.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            max_retries: 3,
            backoff_base_ms: 1000,
            api_key: None,
        }
    }

    /// Set the retry behavior for server and network errors
    pub fn with_retries(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Set the API key sent with each request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        if !key.is_empty() {
            self.api_key = Some(key);
        }
        self
    }

    /// Map a non-success HTTP status to a provider error
    fn classify_status(status: u16, message: String) -> ProviderError {
        match status {
            401 | 403 => ProviderError::InvalidApiKey(message),
            429 => ProviderError::Throttled(message),
            400 if message.to_lowercase().contains("language") => {
                ProviderError::UnsupportedLanguage(message)
            }
            _ => ProviderError::Http { status, message },
        }
    }

    /// Extract the API's error message from a response body, falling back
    /// to the raw body when it is not the expected JSON shape
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => parsed.error,
            Err(_) => body.to_string(),
        }
    }
}

#[async_trait]
impl TextTranslator for LibreTranslate {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, ProviderError> {
        let request = TranslateRequest {
            q: text,
            source: "auto",
            target: target_lang,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            let response_result = self.client.post(&self.endpoint).json(&request).send().await;

            match response_result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response.text().await.map_err(|e| {
                            ProviderError::BadResponse(format!("body unreadable: {}", e))
                        })?;

                        return match serde_json::from_str::<TranslateResponse>(&body) {
                            Ok(parsed) => Ok(parsed.translated_text),
                            Err(e) => Err(ProviderError::BadResponse(format!(
                                "missing translatedText field: {}",
                                e
                            ))),
                        };
                    } else if status.is_server_error() {
                        // Server error - can retry
                        let body = response.text().await.unwrap_or_default();
                        let message = Self::error_message(&body);
                        error!(
                            "Translation API error ({}): {} - attempt {}/{}",
                            status,
                            message,
                            attempt + 1,
                            self.max_retries + 1
                        );
                        last_error = Some(ProviderError::Http {
                            status: status.as_u16(),
                            message,
                        });
                    } else {
                        // Client error - don't retry
                        let body = response.text().await.unwrap_or_default();
                        let message = Self::error_message(&body);
                        error!("Translation API error ({}): {}", status, message);
                        return Err(Self::classify_status(status.as_u16(), message));
                    }
                }
                Err(e) => {
                    // Network error or timeout - can retry
                    error!(
                        "Translation API network error: {} - attempt {}/{}",
                        e,
                        attempt + 1,
                        self.max_retries + 1
                    );
                    last_error = Some(ProviderError::Unreachable(e.to_string()));
                }
            }

            attempt += 1;

            // If we have more retries left, wait with exponential backoff
            if attempt <= self.max_retries {
                let backoff_ms = self.backoff_base_ms * (1u64 << (attempt - 1));
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::Unreachable(format!(
                "no response after {} attempts",
                self.max_retries + 1
            ))
        }))
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        // The languages listing sits next to /translate on every
        // LibreTranslate deployment
        let url = format!("{}/languages", self.endpoint.trim_end_matches("/translate"));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Self::classify_status(
                status.as_u16(),
                Self::error_message(&body),
            ))
        }
    }
}
