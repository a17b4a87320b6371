use async_trait::async_trait;
use qorehr_core::AppResult;
use qorehr_domain::{
    Branch, BranchId, Employee, EmployeeId, PermissionCategory, PermissionCategoryId,
    PermissionEntry, Role, RoleAssignment, RoleId, SidebarMenu, SidebarMenuId, SidebarSubMenu,
};

/// Submenu pre-joined with the permission category gating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSubMenu {
    /// Submenu row.
    pub sub_menu: SidebarSubMenu,
    /// Linked category, absent when the link is unset or dangling.
    pub permission_category: Option<PermissionCategory>,
}

/// Read-only access to everything the profile resolver walks.
///
/// Lookups by id return `Ok(None)` for missing rows; callers decide whether
/// absence is an error.
#[async_trait]
pub trait AccessCatalogRepository: Send + Sync {
    /// Loads the employee being resolved.
    async fn get_principal(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>>;

    /// Lists active, non-deleted role assignments of one employee.
    async fn list_active_role_assignments(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Vec<RoleAssignment>>;

    /// Loads one role regardless of its active flag.
    async fn get_role(&self, role_id: RoleId) -> AppResult<Option<Role>>;

    /// Lists every active role in catalog order.
    async fn list_all_active_roles(&self) -> AppResult<Vec<Role>>;

    /// Lists active permission entries held by one role.
    async fn list_active_permission_entries(
        &self,
        role_id: RoleId,
    ) -> AppResult<Vec<PermissionEntry>>;

    /// Loads one permission category.
    async fn get_permission_category(
        &self,
        permission_category_id: PermissionCategoryId,
    ) -> AppResult<Option<PermissionCategory>>;

    /// Lists active, displayable submenus gated by one category.
    async fn list_sidebar_sub_menus_by_permission_category(
        &self,
        permission_category_id: PermissionCategoryId,
    ) -> AppResult<Vec<SidebarSubMenu>>;

    /// Lists every active, displayable submenu with its category in catalog order.
    async fn list_all_active_display_sidebar_sub_menus(&self) -> AppResult<Vec<CatalogSubMenu>>;

    /// Loads one top-level menu regardless of its flags.
    async fn get_sidebar_menu(&self, menu_id: SidebarMenuId) -> AppResult<Option<SidebarMenu>>;

    /// Lists every active, displayable top-level menu in catalog order.
    async fn list_all_active_display_sidebar_menus(&self) -> AppResult<Vec<SidebarMenu>>;

    /// Loads a branch for role scope and profile details.
    async fn find_branch(&self, branch_id: BranchId) -> AppResult<Option<Branch>>;
}
