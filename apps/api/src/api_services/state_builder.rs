use std::sync::Arc;

use qorehr_application::{
    CallInsightService, EmployeeService, JobPostingService, OrganizationService, ProfileService,
    RoleAdminService, ScreeningService,
};
use qorehr_core::AppError;
use qorehr_infrastructure::InMemoryHrStore;
use sqlx::PgPool;
use tracing::info;

use crate::api_config::{ApiConfig, StoreBackend};
use crate::state::AppState;

use super::database::connect_and_migrate;

mod caches;
mod repositories;

pub use repositories::RepositorySet;

pub async fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let (repositories, postgres_pool) = match &config.store_backend {
        StoreBackend::Postgres { database_url } => {
            let pool = connect_and_migrate(database_url).await?;
            (RepositorySet::postgres(&pool), Some(pool))
        }
        StoreBackend::Memory => {
            info!("using the in-memory record store; data is lost on restart");
            (
                RepositorySet::in_memory(Arc::new(InMemoryHrStore::with_default_catalog())),
                None,
            )
        }
    };

    let redis_client = caches::build_cache_redis_client(config)?;
    let call_insight_service = caches::build_call_insight_service(config, redis_client.clone())?;

    Ok(assemble_app_state(
        repositories,
        call_insight_service,
        postgres_pool,
        redis_client,
    ))
}

/// Wires application services over an already-built set of repositories.
pub fn assemble_app_state(
    repositories: RepositorySet,
    call_insight_service: CallInsightService,
    postgres_pool: Option<PgPool>,
    redis_client: Option<redis::Client>,
) -> AppState {
    AppState {
        employee_service: EmployeeService::new(
            repositories.employees.clone(),
            repositories.organization.clone(),
            repositories.password_hasher,
        ),
        organization_service: OrganizationService::new(repositories.organization.clone()),
        role_admin_service: RoleAdminService::new(
            repositories.roles,
            repositories.employees.clone(),
            repositories.organization.clone(),
        ),
        profile_service: ProfileService::new(repositories.access_catalog),
        job_posting_service: JobPostingService::new(
            repositories.job_postings,
            repositories.employees.clone(),
            repositories.organization,
        ),
        screening_service: ScreeningService::new(repositories.screenings, repositories.employees),
        call_insight_service,
        postgres_pool,
        redis_client,
    }
}
