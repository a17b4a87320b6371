//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod argon2_password_hasher;
mod in_memory_call_insight_cache;
mod in_memory_hr_store;
mod postgres_access_catalog_repository;
mod postgres_employee_repository;
mod postgres_job_posting_repository;
mod postgres_organization_repository;
mod postgres_role_admin_repository;
mod postgres_rows;
mod postgres_screening_repository;
mod redis_call_insight_cache;
mod ultravox_http_client;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use in_memory_call_insight_cache::InMemoryCallInsightCache;
pub use in_memory_hr_store::InMemoryHrStore;
pub use postgres_access_catalog_repository::PostgresAccessCatalogRepository;
pub use postgres_employee_repository::PostgresEmployeeRepository;
pub use postgres_job_posting_repository::PostgresJobPostingRepository;
pub use postgres_organization_repository::PostgresOrganizationRepository;
pub use postgres_role_admin_repository::PostgresRoleAdminRepository;
pub use postgres_screening_repository::PostgresScreeningRepository;
pub use redis_call_insight_cache::RedisCallInsightCache;
pub use ultravox_http_client::{UltravoxHttpClient, UltravoxSettings};
