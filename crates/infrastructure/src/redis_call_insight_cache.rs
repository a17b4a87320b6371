//! Redis-backed call insight cache.

use async_trait::async_trait;
use qorehr_application::CallInsightCache;
use qorehr_core::{AppError, AppResult};
use redis::AsyncCommands;
use serde_json::Value;
use tracing::warn;

/// Redis implementation of the call insight cache port.
#[derive(Clone)]
pub struct RedisCallInsightCache {
    client: redis::Client,
    key_prefix: String,
}

impl RedisCallInsightCache {
    /// Creates a cache adapter with a configured Redis client and key prefix.
    #[must_use]
    pub fn new(client: redis::Client, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
        }
    }

    fn key_for(&self, key: &str) -> String {
        format!("{}:{key}", self.key_prefix)
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|error| AppError::Internal(format!("failed to connect to redis: {error}")))
    }
}

#[async_trait]
impl CallInsightCache for RedisCallInsightCache {
    async fn get_entry(&self, key: &str) -> AppResult<Option<Value>> {
        let mut connection = self.connection().await?;
        let encoded: Option<String> = connection.get(self.key_for(key)).await.map_err(|error| {
            AppError::Internal(format!("failed to read call insight cache entry: {error}"))
        })?;

        let Some(encoded) = encoded else {
            return Ok(None);
        };

        match serde_json::from_str(&encoded) {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                warn!(cache_key = %key, error = %error, "discarding unreadable call insight cache entry");
                Ok(None)
            }
        }
    }

    async fn set_entry(&self, key: &str, value: &Value, ttl_seconds: u64) -> AppResult<()> {
        if ttl_seconds == 0 {
            return Ok(());
        }

        let encoded = serde_json::to_string(value).map_err(|error| {
            AppError::Internal(format!("failed to encode call insight cache entry: {error}"))
        })?;
        let mut connection = self.connection().await?;

        connection
            .set_ex(self.key_for(key), encoded, ttl_seconds)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to write call insight cache entry: {error}"))
            })
    }
}
