//! Call transcript proxy and conversation analysis.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use qorehr_core::{AppError, AppResult};
use qorehr_domain::{AnalysisType, analyze_call, parse_call_messages};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::call_insight_ports::{CallInsightCache, CallTranscriptGateway};

/// Integration version reported in envelopes and response headers.
pub const INTEGRATION_VERSION: &str = "1.0.0";

const TRANSCRIPT_SOURCE: &str = "UltraVox AI";
const ANALYSIS_SOURCE: &str = "QORE AI";

/// Whether a response was served from cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Served from cache.
    Hit,
    /// Fetched from the provider.
    Miss,
}

impl CacheStatus {
    /// Returns the header value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
        }
    }
}

/// Rendered insight body together with its cache status.
#[derive(Debug, Clone, PartialEq)]
pub struct CallInsight {
    /// JSON body returned to clients.
    pub body: Value,
    /// Cache outcome.
    pub cache: CacheStatus,
}

/// Application service proxying call transcripts and analysing them.
#[derive(Clone)]
pub struct CallInsightService {
    gateway: Arc<dyn CallTranscriptGateway>,
    cache: Option<Arc<dyn CallInsightCache>>,
    cache_ttl_seconds: u64,
}

impl CallInsightService {
    /// Creates a new call insight service without caching.
    #[must_use]
    pub fn new(gateway: Arc<dyn CallTranscriptGateway>) -> Self {
        Self {
            gateway,
            cache: None,
            cache_ttl_seconds: 0,
        }
    }

    /// Adds response caching with the given ttl.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn CallInsightCache>, ttl_seconds: u64) -> Self {
        self.cache = Some(cache);
        self.cache_ttl_seconds = ttl_seconds;
        self
    }

    /// Returns every message of a call.
    pub async fn call_messages(&self, call_id: &str) -> AppResult<CallInsight> {
        let call_id = require_identifier("call_id", call_id)?;
        let key = format!("call_messages_{call_id}");
        if let Some(body) = self.cached(&key).await {
            return Ok(hit(body));
        }

        let data = self.gateway.fetch_call_messages(call_id).await?;
        let body = transcript_envelope(data);
        self.store(&key, &body).await;
        Ok(miss(body))
    }

    /// Returns one message of a call.
    pub async fn call_message(&self, call_id: &str, message_id: &str) -> AppResult<CallInsight> {
        let call_id = require_identifier("call_id", call_id)?;
        let message_id = require_identifier("message_id", message_id)?;
        let key = format!("call_message_{call_id}_{message_id}");
        if let Some(body) = self.cached(&key).await {
            return Ok(hit(body));
        }

        let data = self.gateway.fetch_call_message(call_id, message_id).await?;
        let body = transcript_envelope(data);
        self.store(&key, &body).await;
        Ok(miss(body))
    }

    /// Summarizes a call's conversation, optionally with sentiment and topics.
    pub async fn analyze_call(&self, call_id: &str, analysis_type: &str) -> AppResult<CallInsight> {
        let call_id = require_identifier("call_id", call_id)?;
        let analysis_type = analysis_type.parse::<AnalysisType>()?;
        let key = format!("call_analysis_{call_id}_{}", analysis_type.as_str());
        if let Some(body) = self.cached(&key).await {
            return Ok(hit(body));
        }

        let payload = self.gateway.fetch_call_messages(call_id).await?;
        let messages = parse_call_messages(&payload);
        if messages.is_empty() {
            return Err(AppError::NotFound(
                "No messages found for this call".to_owned(),
            ));
        }

        let analysis = analyze_call(&messages, analysis_type);
        let body = json!({
            "source": ANALYSIS_SOURCE,
            "call_id": call_id,
            "analysis_type": analysis_type.as_str(),
            "analysis": analysis,
            "raw_messages_count": messages.len(),
            "timestamp": now_rfc3339(),
        });
        self.store(&key, &body).await;
        Ok(miss(body))
    }

    async fn cached(&self, key: &str) -> Option<Value> {
        let cache = self.active_cache()?;
        match cache.get_entry(key).await {
            Ok(value) => {
                debug!(cache_key = %key, hit = value.is_some(), "call insight cache lookup");
                value
            }
            Err(error) => {
                warn!(cache_key = %key, error = %error, "call insight cache read failed");
                None
            }
        }
    }

    async fn store(&self, key: &str, body: &Value) {
        let Some(cache) = self.active_cache() else {
            return;
        };

        if let Err(error) = cache.set_entry(key, body, self.cache_ttl_seconds).await {
            warn!(cache_key = %key, error = %error, "call insight cache write failed");
        }
    }

    fn active_cache(&self) -> Option<&Arc<dyn CallInsightCache>> {
        self.cache.as_ref().filter(|_| self.cache_ttl_seconds > 0)
    }
}

fn require_identifier<'a>(field_name: &str, value: &'a str) -> AppResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field_name} is required")));
    }

    Ok(value)
}

fn transcript_envelope(data: Value) -> Value {
    json!({
        "source": TRANSCRIPT_SOURCE,
        "data": data,
        "timestamp": now_rfc3339(),
        "integration_version": INTEGRATION_VERSION,
    })
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn hit(body: Value) -> CallInsight {
    CallInsight {
        body,
        cache: CacheStatus::Hit,
    }
}

fn miss(body: Value) -> CallInsight {
    CallInsight {
        body,
        cache: CacheStatus::Miss,
    }
}

#[cfg(test)]
mod tests;
