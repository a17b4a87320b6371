use qorehr_application::{
    CallInsightService, EmployeeService, JobPostingService, OrganizationService, ProfileService,
    RoleAdminService, ScreeningService,
};
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: EmployeeService,
    pub organization_service: OrganizationService,
    pub role_admin_service: RoleAdminService,
    pub profile_service: ProfileService,
    pub job_posting_service: JobPostingService,
    pub screening_service: ScreeningService,
    pub call_insight_service: CallInsightService,
    pub postgres_pool: Option<PgPool>,
    pub redis_client: Option<redis::Client>,
}
