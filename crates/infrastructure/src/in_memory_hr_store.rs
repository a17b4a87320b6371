//! Document-style in-memory store implementing every HR repository port.

use std::collections::{BTreeMap, HashMap};

use qorehr_core::{AppError, AppResult};
use qorehr_domain::{
    Branch, BranchId, Department, DepartmentId, Designation, DesignationId, Employee,
    EmployeeId, InterviewScreening, JobId, JobPosting, PermissionCategory, PermissionCategoryId,
    PermissionEntry, PermissionEntryId, Role, RoleAssignment, RoleAssignmentId, RoleId,
    ScreeningId, SidebarMenu, SidebarMenuId, SidebarSubMenu, SidebarSubMenuId,
};
use tokio::sync::RwLock;

mod access;
mod employees;
mod organization;
mod recruitment;
mod roles;
mod seed;

#[cfg(test)]
mod tests;

/// In-memory store used for local runs and router tests.
#[derive(Debug, Default)]
pub struct InMemoryHrStore {
    state: RwLock<HrState>,
}

#[derive(Debug, Default)]
struct HrState {
    sequences: HashMap<&'static str, i64>,
    employees: BTreeMap<EmployeeId, Employee>,
    password_hashes: HashMap<EmployeeId, String>,
    branches: BTreeMap<BranchId, Branch>,
    departments: BTreeMap<DepartmentId, Department>,
    designations: BTreeMap<DesignationId, Designation>,
    roles: BTreeMap<RoleId, Role>,
    assignments: BTreeMap<RoleAssignmentId, RoleAssignment>,
    categories: BTreeMap<PermissionCategoryId, PermissionCategory>,
    entries: BTreeMap<PermissionEntryId, PermissionEntry>,
    menus: BTreeMap<SidebarMenuId, SidebarMenu>,
    sub_menus: BTreeMap<SidebarSubMenuId, SidebarSubMenu>,
    job_postings: BTreeMap<JobId, JobPosting>,
    screenings: BTreeMap<ScreeningId, InterviewScreening>,
}

impl HrState {
    /// Hands out the next identifier of a table, mirroring a database sequence.
    fn allocate(&mut self, table: &'static str) -> i64 {
        let next = self.sequences.entry(table).or_insert(0);
        *next += 1;
        *next
    }

    /// Keeps a sequence ahead of identifiers inserted explicitly.
    fn observe(&mut self, table: &'static str, id: i64) {
        let current = self.sequences.entry(table).or_insert(0);
        *current = (*current).max(id);
    }
}

impl InMemoryHrStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with the stock roles, permission categories and sidebar menus.
    #[must_use]
    pub fn with_default_catalog() -> Self {
        let mut state = HrState::default();
        state.seed_default_catalog();
        Self {
            state: RwLock::new(state),
        }
    }

    /// Inserts an employee record as-is.
    pub async fn insert_employee(&self, employee: Employee) {
        let mut state = self.state.write().await;
        state.observe("employees", employee.id.value());
        state.employees.insert(employee.id, employee);
    }

    /// Inserts a branch record as-is.
    pub async fn insert_branch(&self, branch: Branch) {
        let mut state = self.state.write().await;
        state.observe("branches", branch.id.value());
        state.branches.insert(branch.id, branch);
    }

    /// Inserts a role record as-is.
    pub async fn insert_role(&self, role: Role) {
        let mut state = self.state.write().await;
        state.observe("roles", role.id.value());
        state.roles.insert(role.id, role);
    }

    /// Inserts a role assignment as-is.
    pub async fn insert_role_assignment(&self, assignment: RoleAssignment) {
        let mut state = self.state.write().await;
        state.observe("role_assignments", assignment.id.value());
        state.assignments.insert(assignment.id, assignment);
    }

    /// Inserts a permission category as-is.
    pub async fn insert_permission_category(&self, category: PermissionCategory) {
        let mut state = self.state.write().await;
        state.observe("permission_categories", category.id.value());
        state.categories.insert(category.id, category);
    }

    /// Inserts a permission entry as-is.
    pub async fn insert_permission_entry(&self, entry: PermissionEntry) {
        let mut state = self.state.write().await;
        state.observe("role_permissions", entry.id.value());
        state.entries.insert(entry.id, entry);
    }

    /// Inserts a sidebar menu as-is.
    pub async fn insert_sidebar_menu(&self, menu: SidebarMenu) {
        let mut state = self.state.write().await;
        state.observe("sidebar_menus", menu.id.value());
        state.menus.insert(menu.id, menu);
    }

    /// Inserts a sidebar submenu as-is.
    pub async fn insert_sidebar_sub_menu(&self, sub_menu: SidebarSubMenu) {
        let mut state = self.state.write().await;
        state.observe("sidebar_sub_menus", sub_menu.id.value());
        state.sub_menus.insert(sub_menu.id, sub_menu);
    }
}

fn not_found(kind: &str, id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("{kind} '{id}' not found"))
}

fn ensure(condition: bool, conflict: impl FnOnce() -> String) -> AppResult<()> {
    if condition {
        Ok(())
    } else {
        Err(AppError::Conflict(conflict()))
    }
}
