//! Ports for the call transcript provider and the response cache in front of it.

use async_trait::async_trait;
use qorehr_core::AppResult;
use serde_json::Value;

/// Upstream conversational AI provider holding call transcripts.
///
/// Implementations map a missing call or message to `NotFound` and an
/// unreachable provider to `Unavailable`.
#[async_trait]
pub trait CallTranscriptGateway: Send + Sync {
    /// Fetches the message list payload of one call.
    async fn fetch_call_messages(&self, call_id: &str) -> AppResult<Value>;

    /// Fetches one message of a call.
    async fn fetch_call_message(&self, call_id: &str, message_id: &str) -> AppResult<Value>;
}

/// Key-value cache for rendered call insight responses.
#[async_trait]
pub trait CallInsightCache: Send + Sync {
    /// Returns the cached value for a key, if present and unexpired.
    async fn get_entry(&self, key: &str) -> AppResult<Option<Value>>;

    /// Stores a value for a key with ttl.
    async fn set_entry(&self, key: &str, value: &Value, ttl_seconds: u64) -> AppResult<()>;
}
