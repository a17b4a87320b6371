//! Ports for the access catalog: roles, grants and sidebar navigation.

mod catalog;
mod role_admin;
mod views;

pub use catalog::{AccessCatalogRepository, CatalogSubMenu};
pub use role_admin::{RoleAdminRepository, RoleAssignmentInput, RoleInput};
pub use views::{
    AssignmentRef, EmployeeProfile, MenuView, PermissionCategoryGrant, ResolvedAccess, RoleView,
    SubMenuView,
};
