use std::sync::Arc;

use qorehr_application::{CallInsightCache, CallInsightService};
use qorehr_core::{AppError, AppResult};
use qorehr_infrastructure::{
    InMemoryCallInsightCache, RedisCallInsightCache, UltravoxHttpClient, UltravoxSettings,
};
use tracing::info;

use crate::api_config::{ApiConfig, CacheBackend};
use crate::api_services::redis::build_redis_client;

const CALL_INSIGHT_KEY_PREFIX: &str = "qorehr:call_insights";

pub(super) fn build_cache_redis_client(config: &ApiConfig) -> AppResult<Option<redis::Client>> {
    match &config.call_insight_cache.backend {
        CacheBackend::Redis { redis_url } => build_redis_client(redis_url).map(Some),
        CacheBackend::Memory => Ok(None),
    }
}

pub(super) fn build_call_insight_service(
    config: &ApiConfig,
    redis_client: Option<redis::Client>,
) -> AppResult<CallInsightService> {
    let gateway = UltravoxHttpClient::new(UltravoxSettings {
        base_url: config.ultravox.base_url.clone(),
        api_key: config.ultravox.api_key.clone(),
        timeout: config.ultravox.timeout,
        max_attempts: config.ultravox.max_attempts,
        log_api_calls: config.log_api_calls,
    })?;
    let service = CallInsightService::new(Arc::new(gateway));

    if !config.call_insight_cache.enabled {
        return Ok(service);
    }

    let cache: Arc<dyn CallInsightCache> = match &config.call_insight_cache.backend {
        CacheBackend::Memory => Arc::new(InMemoryCallInsightCache::new()),
        CacheBackend::Redis { .. } => {
            let redis_client = redis_client.ok_or_else(|| {
                AppError::Validation(
                    "REDIS_URL is required when QOREAI_CACHE_BACKEND=redis".to_owned(),
                )
            })?;
            Arc::new(RedisCallInsightCache::new(redis_client, CALL_INSIGHT_KEY_PREFIX))
        }
    };
    info!(
        ttl_seconds = config.call_insight_cache.ttl_seconds,
        "call insight caching enabled"
    );

    Ok(service.with_cache(cache, config.call_insight_cache.ttl_seconds))
}
