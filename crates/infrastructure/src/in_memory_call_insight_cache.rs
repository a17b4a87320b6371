use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use qorehr_application::CallInsightCache;
use qorehr_core::AppResult;
use serde_json::Value;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct CachedInsight {
    value: Value,
    expires_at: Instant,
}

/// In-memory TTL cache for call insight responses.
#[derive(Default)]
pub struct InMemoryCallInsightCache {
    entries: RwLock<HashMap<String, CachedInsight>>,
}

impl InMemoryCallInsightCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CallInsightCache for InMemoryCallInsightCache {
    async fn get_entry(&self, key: &str) -> AppResult<Option<Value>> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }

        let mut entries = self.entries.write().await;
        if entries
            .get(key)
            .is_some_and(|entry| entry.expires_at <= Instant::now())
        {
            entries.remove(key);
        }

        Ok(None)
    }

    async fn set_entry(&self, key: &str, value: &Value, ttl_seconds: u64) -> AppResult<()> {
        if ttl_seconds == 0 {
            return Ok(());
        }

        let now = Instant::now();
        let expires_at = now
            .checked_add(Duration::from_secs(ttl_seconds))
            .unwrap_or(now);

        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key.to_owned(),
            CachedInsight {
                value: value.clone(),
                expires_at,
            },
        );

        Ok(())
    }
}
