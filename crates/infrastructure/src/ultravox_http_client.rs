//! HTTP gateway to the Ultravox call transcript API.

use std::time::Duration;

use async_trait::async_trait;
use qorehr_application::CallTranscriptGateway;
use qorehr_core::{AppError, AppResult};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

const USER_AGENT: &str = "QORE AI Integration/1.0";
const RETRY_BACKOFF_MS: u64 = 200;

/// Connection settings for the Ultravox API.
#[derive(Debug, Clone)]
pub struct UltravoxSettings {
    /// Base URL such as `https://api.ultravox.ai`.
    pub base_url: Url,
    /// Value sent in the `X-API-Key` header.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Total attempts for transient failures.
    pub max_attempts: u8,
    /// Logs each upstream call with its status.
    pub log_api_calls: bool,
}

/// Reqwest implementation of the call transcript gateway.
pub struct UltravoxHttpClient {
    http_client: reqwest::Client,
    settings: UltravoxSettings,
    retry_backoff_ms: u64,
}

enum Attempt {
    Done(AppResult<Value>),
    Retry(AppError),
}

impl UltravoxHttpClient {
    /// Builds a client with the configured timeout.
    pub fn new(settings: UltravoxSettings) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|error| {
                AppError::Internal(format!("failed to build ultravox http client: {error}"))
            })?;

        Ok(Self {
            http_client,
            settings: UltravoxSettings {
                max_attempts: settings.max_attempts.max(1),
                ..settings
            },
            retry_backoff_ms: RETRY_BACKOFF_MS,
        })
    }

    fn calls_url(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.settings.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::Internal(format!(
                    "ultravox base url '{}' cannot carry a path",
                    self.settings.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["api", "calls"])
            .extend(segments);
        Ok(url)
    }

    async fn get_with_retry(&self, url: Url, not_found: &str) -> AppResult<Value> {
        let mut attempt = 0_u8;
        let mut last_error = None;

        while attempt < self.settings.max_attempts {
            attempt = attempt.saturating_add(1);
            match self.get_once(&url, not_found).await {
                Attempt::Done(result) => return result,
                Attempt::Retry(error) => {
                    warn!(attempt, url = %url.path(), error = %error, "ultravox request failed");
                    last_error = Some(error);
                }
            }

            if attempt < self.settings.max_attempts {
                let delay = self.retry_backoff_ms.saturating_mul(u64::from(attempt));
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            AppError::Unavailable("UltraVox AI service unavailable".to_owned())
        }))
    }

    async fn get_once(&self, url: &Url, not_found: &str) -> Attempt {
        let response = self
            .http_client
            .get(url.clone())
            .header("X-API-Key", self.settings.api_key.as_str())
            .header("Content-Type", "application/json")
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(error) if error.is_timeout() => {
                return Attempt::Retry(AppError::Unavailable(
                    "request to UltraVox AI timed out".to_owned(),
                ));
            }
            Err(error) => {
                return Attempt::Retry(AppError::Unavailable(format!(
                    "UltraVox AI service unavailable: {error}"
                )));
            }
        };

        let status = response.status();
        if self.settings.log_api_calls {
            info!(url = %url.path(), status = status.as_u16(), "ultravox api call");
        }

        if status.is_success() {
            return Attempt::Done(response.json::<Value>().await.map_err(|error| {
                AppError::Internal(format!("failed to decode ultravox response: {error}"))
            }));
        }

        if status == StatusCode::NOT_FOUND {
            return Attempt::Done(Err(AppError::NotFound(not_found.to_owned())));
        }

        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Attempt::Retry(AppError::Unavailable(format!(
                "UltraVox AI responded with {status}"
            )));
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<response body unavailable>".to_owned());
        Attempt::Done(Err(AppError::Internal(format!(
            "UltraVox AI responded with {status}: {body}"
        ))))
    }
}

#[async_trait]
impl CallTranscriptGateway for UltravoxHttpClient {
    async fn fetch_call_messages(&self, call_id: &str) -> AppResult<Value> {
        let url = self.calls_url(&[call_id, "messages"])?;
        self.get_with_retry(url, "Call not found").await
    }

    async fn fetch_call_message(&self, call_id: &str, message_id: &str) -> AppResult<Value> {
        let url = self.calls_url(&[call_id, "messages", message_id])?;
        self.get_with_retry(url, "Message not found").await
    }
}
