use std::collections::HashMap;
use std::sync::Arc;

use qorehr_core::{AppError, AppResult};
use qorehr_domain::{
    CrudFlags, Employee, EmployeeId, SidebarMenu, SidebarMenuId, SidebarSubMenu, SidebarSubMenuId,
};
use tracing::debug;

use crate::access_ports::{
    AccessCatalogRepository, AssignmentRef, EmployeeProfile, MenuView, PermissionCategoryGrant,
    ResolvedAccess, RoleView, SubMenuView,
};

mod menu_index;
mod scoped;
mod superadmin;

use menu_index::MenuIndex;

/// Resolves which roles an employee holds and which sidebar entries they may see.
#[derive(Clone)]
pub struct ProfileService {
    repository: Arc<dyn AccessCatalogRepository>,
}

impl ProfileService {
    /// Creates a new profile service.
    #[must_use]
    pub fn new(repository: Arc<dyn AccessCatalogRepository>) -> Self {
        Self { repository }
    }

    /// Resolves roles and visible navigation for one employee.
    pub async fn resolve_profile(&self, employee_id: EmployeeId) -> AppResult<ResolvedAccess> {
        let employee = self.load_principal(employee_id).await?;
        self.resolve_for(&employee).await
    }

    /// Returns the employee record, home branch and resolved access.
    pub async fn employee_profile(&self, employee_id: EmployeeId) -> AppResult<EmployeeProfile> {
        let employee = self.load_principal(employee_id).await?;
        let branch = match employee.details.branch_id {
            Some(branch_id) => self.repository.find_branch(branch_id).await?,
            None => None,
        };
        let access = self.resolve_for(&employee).await?;

        Ok(EmployeeProfile {
            employee,
            branch,
            access,
        })
    }

    async fn load_principal(&self, employee_id: EmployeeId) -> AppResult<Employee> {
        self.repository
            .get_principal(employee_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("employee '{employee_id}' not found")))
    }

    async fn resolve_for(&self, employee: &Employee) -> AppResult<ResolvedAccess> {
        if employee.is_superadmin() {
            self.resolve_superadmin(employee).await
        } else {
            self.resolve_scoped(employee).await
        }
    }
}
