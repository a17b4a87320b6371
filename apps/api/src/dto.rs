mod access;
mod call_insights;
mod common;
mod employees;
mod organization;
mod recruitment;

pub use access::{
    AssignRoleRequest, EmployeeProfileResponse, PermissionCategoryResponse,
    PermissionEntryResponse, PermissionGrantResponse, RoleAssignmentResponse, RoleDetailResponse,
    RoleRequest, RoleResponse, SaveRolePermissionRequest, SidebarMenuResponse,
    SidebarSubMenuResponse,
};
pub use call_insights::CallAnalysisQuery;
pub use common::{
    HealthDependencyStatus, HealthResponse, ListResponse, PaginatedResponse, PaginationResponse,
};
pub use employees::{
    BranchEmployeesResponse, BranchGroupResponse, BranchSummaryResponse, EmployeeListQuery,
    EmployeeRequest, EmployeeResponse,
};
pub use organization::{
    BranchRequest, BranchResponse, DepartmentRequest, DepartmentResponse, DesignationResponse,
};
pub use recruitment::{
    JobPostingListQuery, JobPostingRequest, JobPostingResponse, ScreeningListQuery,
    ScreeningRequest, ScreeningResponse, ScreeningUpsertResponse, ScreeningWithEmployeeResponse,
};
