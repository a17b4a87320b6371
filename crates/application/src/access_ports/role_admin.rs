use async_trait::async_trait;
use chrono::{DateTime, Utc};
use qorehr_core::AppResult;
use qorehr_domain::{
    BranchId, CrudFlags, EmployeeId, PermissionCategory, PermissionCategoryId, PermissionEntry,
    Role, RoleAssignment, RoleAssignmentId, RoleId,
};

/// Validated role attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleInput {
    /// Display name.
    pub name: String,
    /// Unique slug.
    pub slug: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Ranking priority.
    pub priority: i32,
}

/// Validated role assignment attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignmentInput {
    /// Employee receiving the role.
    pub employee_id: EmployeeId,
    /// Role being granted.
    pub role_id: RoleId,
    /// Optional branch scope.
    pub branch_scope: Option<BranchId>,
    /// Marks the employee's main role.
    pub is_primary: bool,
}

/// Persistence port for role and grant administration.
#[async_trait]
pub trait RoleAdminRepository: Send + Sync {
    /// Lists all roles, highest priority first, then by name.
    async fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Loads one role.
    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>>;

    /// Inserts an active, non-system role. Duplicate slugs are conflicts.
    async fn create_role(&self, input: RoleInput) -> AppResult<Role>;

    /// Replaces the editable attributes of a role.
    async fn update_role(&self, role_id: RoleId, input: RoleInput) -> AppResult<Role>;

    /// Toggles the active flag of a role.
    async fn set_role_active(&self, role_id: RoleId, is_active: bool) -> AppResult<()>;

    /// Lists every permission category by name.
    async fn list_permission_categories(&self) -> AppResult<Vec<PermissionCategory>>;

    /// Loads one permission category.
    async fn find_permission_category(
        &self,
        permission_category_id: PermissionCategoryId,
    ) -> AppResult<Option<PermissionCategory>>;

    /// Lists every permission entry of a role, active or not.
    async fn list_role_permission_entries(&self, role_id: RoleId)
    -> AppResult<Vec<PermissionEntry>>;

    /// Updates the role's entries for a category, inserting one when none exist.
    async fn save_permission_entry(
        &self,
        role_id: RoleId,
        permission_category_id: PermissionCategoryId,
        flags: CrudFlags,
    ) -> AppResult<PermissionEntry>;

    /// Inserts an active role assignment.
    async fn create_role_assignment(&self, input: RoleAssignmentInput)
    -> AppResult<RoleAssignment>;

    /// Loads one role assignment, including soft-deleted ones.
    async fn find_role_assignment(
        &self,
        assignment_id: RoleAssignmentId,
    ) -> AppResult<Option<RoleAssignment>>;

    /// Marks an assignment inactive and deleted.
    async fn soft_delete_role_assignment(
        &self,
        assignment_id: RoleAssignmentId,
        deleted_at: DateTime<Utc>,
    ) -> AppResult<()>;
}
