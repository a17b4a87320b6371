use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use qorehr_application::RoleChanges;
use qorehr_domain::{EmployeeId, RoleAssignmentId, RoleId};

use crate::dto::{
    AssignRoleRequest, PermissionCategoryResponse, PermissionEntryResponse, RoleAssignmentResponse,
    RoleRequest, RoleResponse, SaveRolePermissionRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod assignments;
mod permissions;
mod catalog;

pub use assignments::{assign_role_handler, remove_role_assignment_handler};
pub use catalog::{
    create_role_handler, delete_role_handler, list_roles_handler, update_role_handler,
};
pub use permissions::{
    list_permission_categories_handler, list_role_permissions_handler,
    save_role_permission_handler,
};
