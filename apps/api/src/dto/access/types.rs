use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dto::employees::EmployeeResponse;
use crate::dto::organization::BranchResponse;

/// API representation of a role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub priority: i32,
    pub is_system: bool,
    pub is_active: bool,
}

/// Incoming payload for role create and update.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-request.ts"
)]
pub struct RoleRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
}

/// Incoming payload for granting a role to an employee.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assign-role-request.ts"
)]
pub struct AssignRoleRequest {
    pub role_id: i64,
    #[serde(default, alias = "branch_scope")]
    pub branch_id: Option<i64>,
    #[serde(default)]
    pub is_primary: bool,
}

/// API representation of one employee-to-role link.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-assignment-response.ts"
)]
pub struct RoleAssignmentResponse {
    pub id: i64,
    pub employee_id: i64,
    pub role_id: i64,
    pub branch_id: Option<i64>,
    pub is_primary: bool,
    pub is_active: bool,
    pub assigned_at: String,
}

/// API representation of a permission category.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-category-response.ts"
)]
pub struct PermissionCategoryResponse {
    pub id: i64,
    pub name: String,
    pub short_code: Option<String>,
    pub description: Option<String>,
}

/// API representation of a role's flags for one category.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-entry-response.ts"
)]
pub struct PermissionEntryResponse {
    pub id: i64,
    pub role_id: i64,
    pub permission_category_id: i64,
    pub can_view: bool,
    pub can_add: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub is_active: bool,
}

/// Incoming payload for saving a role's flags for one category.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/save-role-permission-request.ts"
)]
pub struct SaveRolePermissionRequest {
    pub permission_category_id: i64,
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_add: bool,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
}

/// Category attached to a surfaced submenu, with the contributing flags.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-grant-response.ts"
)]
pub struct PermissionGrantResponse {
    pub id: i64,
    pub name: String,
    pub short_code: Option<String>,
    pub description: Option<String>,
    pub can_view: bool,
    pub can_add: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

/// Sidebar submenu visible to the employee.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/sidebar-sub-menu-response.ts"
)]
pub struct SidebarSubMenuResponse {
    pub id: i64,
    pub sub_menu: String,
    pub icon: Option<String>,
    pub url: Option<String>,
    pub lang_key: Option<String>,
    pub display_order: i32,
    pub level: i32,
    pub is_active: bool,
    pub permission_categories: Vec<PermissionGrantResponse>,
}

/// Sidebar menu visible to the employee.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/sidebar-menu-response.ts"
)]
pub struct SidebarMenuResponse {
    pub id: i64,
    pub menu: String,
    pub icon: Option<String>,
    pub url: Option<String>,
    pub lang_key: Option<String>,
    pub display_order: i32,
    pub level: i32,
    pub sub_menus: Vec<SidebarSubMenuResponse>,
}

/// One role held by the employee.
///
/// Superadmins get every active role with `employee_role_id = "superadmin"`.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-detail-response.ts"
)]
pub struct RoleDetailResponse {
    pub employee_role_id: String,
    pub role_id: i64,
    pub branch_id: Option<i64>,
    pub is_primary: bool,
    pub is_active: bool,
    pub assigned_date: String,
    pub role_details: RoleResponse,
    pub branch_details: Option<BranchResponse>,
}

/// Employee profile with resolved roles and sidebar navigation.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/employee-profile-response.ts"
)]
pub struct EmployeeProfileResponse {
    pub employee_details: EmployeeResponse,
    pub branch_details: Option<BranchResponse>,
    pub role_details: Vec<RoleDetailResponse>,
    pub sidebar_menus: Vec<SidebarMenuResponse>,
}
