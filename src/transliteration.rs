//! Client for the external Latin → Devanagari transliteration service.
//!
//! Contract: `POST {base}/api/transliterate` with `{ "text": ... }`, answered
//! by `{ "transliteration": ... }`. Any other shape, an empty result or a
//! non-2xx status is a failure. Callers recover from failures locally by
//! keeping the Latin text.

use crate::circuit_breaker::{create_transliteration_circuit_breaker, TransliterationBreaker};
use crate::errors::AppError;
use async_trait::async_trait;
use failsafe::futures::CircuitBreaker;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const TRANSLITERATE_PATH: &str = "/api/transliterate";

/// Anything that renders Latin-script text in Devanagari.
#[async_trait]
pub trait Transliterator: Send + Sync {
    async fn transliterate(&self, text: &str) -> Result<String, AppError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransliterationRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransliterationResponse {
    pub transliteration: String,
}

/// HTTP client for the transliteration endpoint, with a circuit breaker and
/// a cache of successful results.
#[derive(Clone)]
pub struct TransliterationClient {
    client: reqwest::Client,
    endpoint: String,
    breaker: TransliterationBreaker,
    cache: Cache<String, String>,
}

impl TransliterationClient {
    /// Creates a new `TransliterationClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the transliteration service.
    /// * `timeout` - Per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create transliteration client: {}", e))
            })?;

        // Place names repeat across certificates; keep results for a day.
        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(86_400))
            .max_capacity(10_000)
            .build();

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), TRANSLITERATE_PATH),
            breaker: create_transliteration_circuit_breaker(),
            cache,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, text: &str) -> Result<String, AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&TransliterationRequest {
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                AppError::TransliterationUnavailable(format!("request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::TransliterationUnavailable(format!(
                "service returned {}: {}",
                status, error_text
            )));
        }

        let body: TransliterationResponse = response.json().await.map_err(|e| {
            AppError::TransliterationUnavailable(format!("unexpected response shape: {}", e))
        })?;

        if body.transliteration.trim().is_empty() {
            return Err(AppError::TransliterationUnavailable(
                "empty transliteration".to_string(),
            ));
        }

        Ok(body.transliteration)
    }
}

#[async_trait]
impl Transliterator for TransliterationClient {
    async fn transliterate(&self, text: &str) -> Result<String, AppError> {
        if let Some(cached) = self.cache.get(text).await {
            tracing::debug!("Transliteration cache HIT for '{}'", text);
            return Ok(cached);
        }

        let result = match self.breaker.call(self.request(text)).await {
            Ok(value) => value,
            Err(failsafe::Error::Inner(e)) => return Err(e),
            Err(failsafe::Error::Rejected) => {
                return Err(AppError::TransliterationUnavailable(
                    "circuit open, skipping call".to_string(),
                ))
            }
        };

        tracing::debug!("Transliterated '{}' -> '{}'", text, result);
        self.cache.insert(text.to_string(), result.clone()).await;
        Ok(result)
    }
}

/// Transliterates `text`, keeping the Latin input when the service fails.
pub async fn transliterate_or_keep(transliterator: &dyn Transliterator, text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    match transliterator.transliterate(text).await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Transliteration failed for '{}': {}", text, e);
            text.to_string()
        }
    }
}
