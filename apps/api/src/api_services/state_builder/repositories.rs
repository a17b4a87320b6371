use std::sync::Arc;

use qorehr_application::{
    AccessCatalogRepository, EmployeeRepository, JobPostingRepository, OrganizationRepository,
    PasswordHasher, RoleAdminRepository, ScreeningRepository,
};
use qorehr_infrastructure::{
    Argon2PasswordHasher, InMemoryHrStore, PostgresAccessCatalogRepository,
    PostgresEmployeeRepository, PostgresJobPostingRepository, PostgresOrganizationRepository,
    PostgresRoleAdminRepository, PostgresScreeningRepository,
};
use sqlx::PgPool;

/// Record store adapters backing the application services.
pub struct RepositorySet {
    pub(super) access_catalog: Arc<dyn AccessCatalogRepository>,
    pub(super) employees: Arc<dyn EmployeeRepository>,
    pub(super) organization: Arc<dyn OrganizationRepository>,
    pub(super) roles: Arc<dyn RoleAdminRepository>,
    pub(super) job_postings: Arc<dyn JobPostingRepository>,
    pub(super) screenings: Arc<dyn ScreeningRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
}

impl RepositorySet {
    /// Relational adapters sharing one pool.
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            access_catalog: Arc::new(PostgresAccessCatalogRepository::new(pool.clone())),
            employees: Arc::new(PostgresEmployeeRepository::new(pool.clone())),
            organization: Arc::new(PostgresOrganizationRepository::new(pool.clone())),
            roles: Arc::new(PostgresRoleAdminRepository::new(pool.clone())),
            job_postings: Arc::new(PostgresJobPostingRepository::new(pool.clone())),
            screenings: Arc::new(PostgresScreeningRepository::new(pool.clone())),
            password_hasher: Arc::new(Argon2PasswordHasher::new()),
        }
    }

    /// Every port served by one document-style store.
    pub fn in_memory(store: Arc<InMemoryHrStore>) -> Self {
        Self {
            access_catalog: store.clone(),
            employees: store.clone(),
            organization: store.clone(),
            roles: store.clone(),
            job_postings: store.clone(),
            screenings: store,
            password_hasher: Arc::new(Argon2PasswordHasher::new()),
        }
    }
}
