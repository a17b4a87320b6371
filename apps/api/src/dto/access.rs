mod conversions;
mod types;

pub use types::{
    AssignRoleRequest, EmployeeProfileResponse, PermissionCategoryResponse,
    PermissionEntryResponse, PermissionGrantResponse, RoleAssignmentResponse, RoleDetailResponse,
    RoleRequest, RoleResponse, SaveRolePermissionRequest, SidebarMenuResponse,
    SidebarSubMenuResponse,
};
