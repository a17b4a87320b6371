//! Application services and ports.

#![forbid(unsafe_code)]

mod access_ports;
mod call_insight_ports;
mod call_insight_service;
mod employee_ports;
mod employee_service;
mod job_posting_service;
mod organization_service;
mod profile_service;
mod recruitment_ports;
mod role_admin_service;
mod screening_service;

#[cfg(test)]
mod test_support;

pub use access_ports::{
    AccessCatalogRepository, AssignmentRef, CatalogSubMenu, EmployeeProfile, MenuView,
    PermissionCategoryGrant, ResolvedAccess, RoleAdminRepository, RoleAssignmentInput, RoleInput,
    RoleView, SubMenuView,
};
pub use call_insight_ports::{CallInsightCache, CallTranscriptGateway};
pub use call_insight_service::{CacheStatus, CallInsight, CallInsightService, INTEGRATION_VERSION};
pub use employee_ports::{
    BranchInput, DepartmentInput, EmployeeFilter, EmployeeRepository, OrganizationRepository,
    PasswordHasher,
};
pub use employee_service::{BranchEmployees, EmployeeChanges, EmployeeService, EmployeesByBranch};
pub use job_posting_service::{JobPostingChanges, JobPostingService};
pub use organization_service::{BranchChanges, DepartmentChanges, OrganizationService};
pub use profile_service::ProfileService;
pub use recruitment_ports::{
    JobPostingFilter, JobPostingRepository, ScreeningFilter, ScreeningInput, ScreeningRepository,
};
pub use role_admin_service::{AssignRoleRequest, RoleAdminService, RoleChanges};
pub use screening_service::{
    ScreeningChanges, ScreeningService, ScreeningWithEmployee, UpsertOutcome,
};
