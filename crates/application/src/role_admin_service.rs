//! Role, assignment and permission grant administration.

use std::sync::Arc;

use chrono::Utc;
use qorehr_core::{AppError, AppResult, NonEmptyString};
use qorehr_domain::{
    BranchId, CrudFlags, EmployeeId, PermissionCategory, PermissionCategoryId, PermissionEntry,
    Role, RoleAssignment, RoleAssignmentId, RoleId, slugify,
};
use tracing::info;

use crate::access_ports::{RoleAdminRepository, RoleAssignmentInput, RoleInput};
use crate::employee_ports::{EmployeeRepository, OrganizationRepository};

mod assignments;
mod grants;
mod roles;

/// Partial role attributes. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleChanges {
    /// Display name, required on create.
    pub name: Option<String>,
    /// Slug. Derived from the name when absent on create.
    pub slug: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Ranking priority.
    pub priority: Option<i32>,
}

/// Request to grant a role to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignRoleRequest {
    /// Role being granted.
    pub role_id: RoleId,
    /// Optional branch scope.
    pub branch_scope: Option<BranchId>,
    /// Marks the employee's main role.
    pub is_primary: bool,
}

/// Application service for role administration.
#[derive(Clone)]
pub struct RoleAdminService {
    roles: Arc<dyn RoleAdminRepository>,
    employees: Arc<dyn EmployeeRepository>,
    organization: Arc<dyn OrganizationRepository>,
}

impl RoleAdminService {
    /// Creates a new role administration service.
    #[must_use]
    pub fn new(
        roles: Arc<dyn RoleAdminRepository>,
        employees: Arc<dyn EmployeeRepository>,
        organization: Arc<dyn OrganizationRepository>,
    ) -> Self {
        Self {
            roles,
            employees,
            organization,
        }
    }

    async fn require_role(&self, role_id: RoleId) -> AppResult<Role> {
        self.roles
            .find_role(role_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' not found")))
    }
}

#[cfg(test)]
mod tests;
