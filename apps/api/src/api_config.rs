use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use qorehr_core::AppError;
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_ULTRAVOX_API_URL: &str = "https://api.ultravox.ai";

/// Where HR records live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { database_url: String },
    Memory,
}

/// Where call-insight responses are cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheBackend {
    Memory,
    Redis { redis_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UltravoxConfig {
    pub base_url: Url,
    pub api_key: String,
    pub timeout: Duration,
    pub max_attempts: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallInsightCacheConfig {
    pub enabled: bool,
    pub ttl_seconds: u64,
    pub backend: CacheBackend,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub store_backend: StoreBackend,
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub ultravox: UltravoxConfig,
    pub call_insight_cache: CallInsightCacheConfig,
    pub log_api_calls: bool,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");
        Self::from_lookup(migrate_only, |name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(
        migrate_only: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let store_backend = match value("STORE_BACKEND")
            .unwrap_or_else(|| "postgres".to_owned())
            .to_ascii_lowercase()
            .as_str()
        {
            "postgres" => StoreBackend::Postgres {
                database_url: value("DATABASE_URL")
                    .ok_or_else(|| AppError::Validation("DATABASE_URL is required".to_owned()))?,
            },
            "memory" => StoreBackend::Memory,
            other => {
                return Err(AppError::Validation(format!(
                    "STORE_BACKEND must be either 'postgres' or 'memory', got '{other}'"
                )));
            }
        };

        if migrate_only && store_backend == StoreBackend::Memory {
            return Err(AppError::Validation(
                "migrations require STORE_BACKEND=postgres".to_owned(),
            ));
        }

        let api_host = value("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = parse_or("API_PORT", value("API_PORT"), 3001_u16)?;
        let frontend_url =
            value("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());

        let base_url = value("ULTRAVOX_API_URL")
            .unwrap_or_else(|| DEFAULT_ULTRAVOX_API_URL.to_owned());
        let base_url = Url::parse(&base_url)
            .map_err(|error| AppError::Validation(format!("invalid ULTRAVOX_API_URL: {error}")))?;
        let ultravox = UltravoxConfig {
            base_url,
            api_key: value("ULTRAVOX_API_KEY").unwrap_or_default(),
            timeout: Duration::from_millis(parse_or(
                "ULTRAVOX_API_TIMEOUT",
                value("ULTRAVOX_API_TIMEOUT"),
                5000_u64,
            )?),
            max_attempts: parse_or("ULTRAVOX_API_RETRIES", value("ULTRAVOX_API_RETRIES"), 3_u8)?
                .max(1),
        };

        let cache_backend = match value("QOREAI_CACHE_BACKEND")
            .unwrap_or_else(|| "memory".to_owned())
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" => CacheBackend::Memory,
            "redis" => CacheBackend::Redis {
                redis_url: value("REDIS_URL").ok_or_else(|| {
                    AppError::Validation(
                        "REDIS_URL is required when QOREAI_CACHE_BACKEND=redis".to_owned(),
                    )
                })?,
            },
            other => {
                return Err(AppError::Validation(format!(
                    "QOREAI_CACHE_BACKEND must be either 'memory' or 'redis', got '{other}'"
                )));
            }
        };
        let call_insight_cache = CallInsightCacheConfig {
            enabled: flag(value("QOREAI_ENABLE_CACHING")),
            ttl_seconds: parse_or(
                "QOREAI_CACHE_EXPIRATION",
                value("QOREAI_CACHE_EXPIRATION"),
                300_u64,
            )?,
            backend: cache_backend,
        };

        Ok(Self {
            migrate_only,
            store_backend,
            api_host,
            api_port,
            frontend_url,
            ultravox,
            call_insight_cache,
            log_api_calls: flag(value("QOREAI_LOG_API_CALLS")),
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn flag(value: Option<String>) -> bool {
    value.is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|error| AppError::Validation(format!("invalid {name}: {error}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ApiConfig, AppError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ApiConfig::from_lookup(false, |name| values.get(name).cloned())
    }

    #[test]
    fn memory_backend_applies_defaults() -> Result<(), AppError> {
        let config = config_from(&[("STORE_BACKEND", "memory")])?;

        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.api_port, 3001);
        assert_eq!(config.ultravox.base_url.as_str(), "https://api.ultravox.ai/");
        assert_eq!(config.ultravox.timeout, Duration::from_millis(5000));
        assert_eq!(config.ultravox.max_attempts, 3);
        assert!(!config.call_insight_cache.enabled);
        assert_eq!(config.call_insight_cache.ttl_seconds, 300);
        assert_eq!(config.call_insight_cache.backend, CacheBackend::Memory);
        assert!(!config.log_api_calls);
        Ok(())
    }

    #[test]
    fn postgres_backend_requires_database_url() {
        let result = config_from(&[]);

        assert!(matches!(result, Err(AppError::Validation(message)) if message.contains("DATABASE_URL")));
    }

    #[test]
    fn redis_cache_requires_redis_url() {
        let result = config_from(&[
            ("STORE_BACKEND", "memory"),
            ("QOREAI_CACHE_BACKEND", "redis"),
        ]);

        assert!(matches!(result, Err(AppError::Validation(message)) if message.contains("REDIS_URL")));
    }

    #[test]
    fn invalid_upstream_url_is_rejected() {
        let result = config_from(&[
            ("STORE_BACKEND", "memory"),
            ("ULTRAVOX_API_URL", "not a url"),
        ]);

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn caching_flags_and_numbers_are_parsed() -> Result<(), AppError> {
        let config = config_from(&[
            ("STORE_BACKEND", "memory"),
            ("QOREAI_ENABLE_CACHING", "TRUE"),
            ("QOREAI_CACHE_EXPIRATION", "60"),
            ("QOREAI_LOG_API_CALLS", "true"),
            ("ULTRAVOX_API_RETRIES", "0"),
        ])?;

        assert!(config.call_insight_cache.enabled);
        assert_eq!(config.call_insight_cache.ttl_seconds, 60);
        assert!(config.log_api_calls);
        assert_eq!(config.ultravox.max_attempts, 1);
        Ok(())
    }
}
