use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use qorehr_core::{AppError, AppResult};

use crate::call_insight_ports::{CallInsightCache, CallTranscriptGateway};

use super::{CacheStatus, CallInsightService, INTEGRATION_VERSION};

struct FakeGateway {
    payload: Value,
    calls: AtomicUsize,
}

impl FakeGateway {
    fn with_payload(payload: Value) -> Arc<Self> {
        Arc::new(Self {
            payload,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CallTranscriptGateway for FakeGateway {
    async fn fetch_call_messages(&self, call_id: &str) -> AppResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if call_id == "missing" {
            return Err(AppError::NotFound("Call not found".to_owned()));
        }
        Ok(self.payload.clone())
    }

    async fn fetch_call_message(&self, _call_id: &str, message_id: &str) -> AppResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "id": message_id }))
    }
}

#[derive(Default)]
struct FakeCache {
    entries: Mutex<HashMap<String, (Value, u64)>>,
    broken: bool,
}

#[async_trait]
impl CallInsightCache for FakeCache {
    async fn get_entry(&self, key: &str) -> AppResult<Option<Value>> {
        if self.broken {
            return Err(AppError::Internal("cache offline".to_owned()));
        }
        Ok(self
            .entries
            .lock()
            .await
            .get(key)
            .map(|(value, _)| value.clone()))
    }

    async fn set_entry(&self, key: &str, value: &Value, ttl_seconds: u64) -> AppResult<()> {
        if self.broken {
            return Err(AppError::Internal("cache offline".to_owned()));
        }
        self.entries
            .lock()
            .await
            .insert(key.to_owned(), (value.clone(), ttl_seconds));
        Ok(())
    }
}

fn transcript() -> Value {
    json!({
        "results": [
            {
                "role": "MESSAGE_ROLE_AGENT",
                "text": "Hello, thanks for joining. Can you tell me about your experience?",
                "timespan": { "start": "0s", "end": "4s" }
            },
            {
                "role": "MESSAGE_ROLE_USER",
                "text": "Great, I have five years of experience and I love this job.",
                "timespan": { "start": "5.5s", "end": "9s" }
            }
        ]
    })
}

#[tokio::test]
async fn messages_are_wrapped_and_cached() -> AppResult<()> {
    let gateway = FakeGateway::with_payload(transcript());
    let cache = Arc::new(FakeCache::default());
    let service = CallInsightService::new(gateway.clone()).with_cache(cache.clone(), 300);

    let first = service.call_messages("call-1").await?;
    assert_eq!(first.cache, CacheStatus::Miss);
    assert_eq!(first.body["source"], "UltraVox AI");
    assert_eq!(first.body["integration_version"], INTEGRATION_VERSION);
    assert_eq!(first.body["data"], transcript());

    let second = service.call_messages("call-1").await?;
    assert_eq!(second.cache, CacheStatus::Hit);
    assert_eq!(second.body, first.body);
    assert_eq!(gateway.calls(), 1);

    let entries = cache.entries.lock().await;
    assert_eq!(entries.get("call_messages_call-1").map(|(_, ttl)| *ttl), Some(300));
    Ok(())
}

#[tokio::test]
async fn zero_ttl_disables_caching() -> AppResult<()> {
    let gateway = FakeGateway::with_payload(transcript());
    let cache = Arc::new(FakeCache::default());
    let service = CallInsightService::new(gateway.clone()).with_cache(cache.clone(), 0);

    service.call_message("call-1", "m-1").await?;
    let again = service.call_message("call-1", "m-1").await?;

    assert_eq!(again.cache, CacheStatus::Miss);
    assert_eq!(again.body["data"]["id"], "m-1");
    assert_eq!(gateway.calls(), 2);
    assert!(cache.entries.lock().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn cache_failures_fall_back_to_the_provider() -> AppResult<()> {
    let gateway = FakeGateway::with_payload(transcript());
    let cache = Arc::new(FakeCache {
        broken: true,
        ..FakeCache::default()
    });
    let service = CallInsightService::new(gateway.clone()).with_cache(cache, 60);

    let insight = service.call_messages("call-1").await?;

    assert_eq!(insight.cache, CacheStatus::Miss);
    assert_eq!(gateway.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn analysis_includes_requested_sections() -> AppResult<()> {
    let service = CallInsightService::new(FakeGateway::with_payload(transcript()));

    let insight = service.analyze_call("call-1", "sentiment").await?;
    let body = insight.body;

    assert_eq!(body["source"], "QORE AI");
    assert_eq!(body["analysis_type"], "sentiment");
    assert_eq!(body["raw_messages_count"], 2);
    assert_eq!(body["analysis"]["summary"]["totalMessages"], 2);
    assert_eq!(body["analysis"]["summary"]["avgResponseTime"], 1.5);
    assert!(body["analysis"].get("sentiment").is_some());
    assert!(body["analysis"].get("topics").is_none());
    Ok(())
}

#[tokio::test]
async fn analysis_is_cached_per_type() -> AppResult<()> {
    let gateway = FakeGateway::with_payload(transcript());
    let cache = Arc::new(FakeCache::default());
    let service = CallInsightService::new(gateway.clone()).with_cache(cache.clone(), 120);

    service.analyze_call("call-1", "default").await?;
    service.analyze_call("call-1", "topics").await?;
    let cached = service.analyze_call("call-1", "topics").await?;

    assert_eq!(cached.cache, CacheStatus::Hit);
    assert_eq!(gateway.calls(), 2);
    assert!(cache.entries.lock().await.contains_key("call_analysis_call-1_default"));
    Ok(())
}

#[tokio::test]
async fn analysis_rejects_unknown_type_and_empty_transcripts() {
    let service = CallInsightService::new(FakeGateway::with_payload(json!({ "results": [] })));

    assert!(matches!(
        service.analyze_call("call-1", "emotions").await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.analyze_call("call-1", "full").await,
        Err(AppError::NotFound(message)) if message == "No messages found for this call"
    ));
    assert!(matches!(
        service.analyze_call("missing", "full").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.call_messages("  ").await,
        Err(AppError::Validation(_))
    ));
}
