use chrono::{DateTime, Utc};
use qorehr_domain::{
    Branch, BranchId, CrudFlags, Employee, PermissionCategory, Role, RoleAssignmentId, SidebarMenu,
    SidebarSubMenu,
};

/// Permission category attached to a surfaced submenu with the flags of one grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCategoryGrant {
    /// Granted category.
    pub category: PermissionCategory,
    /// Flags of the contributing permission entry.
    pub flags: CrudFlags,
}

/// Submenu as surfaced to one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubMenuView {
    /// Catalog row.
    pub sub_menu: SidebarSubMenu,
    /// One grant per contributing permission entry, never merged.
    pub permission_categories: Vec<PermissionCategoryGrant>,
}

impl SubMenuView {
    /// Returns whether any contributing grant allows viewing.
    #[must_use]
    pub fn is_viewable(&self) -> bool {
        self.permission_categories
            .iter()
            .any(|grant| grant.flags.can_view)
    }
}

/// Top-level menu with the submenus surfaced under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    /// Catalog row.
    pub menu: SidebarMenu,
    /// Surfaced submenus in display order.
    pub sub_menus: Vec<SubMenuView>,
}

/// Identity of the assignment behind a role view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentRef {
    /// A persisted employee-to-role link.
    Assignment(RoleAssignmentId),
    /// Synthetic entry produced by the superadmin override.
    Superadmin,
}

/// Role held by the employee, with assignment metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleView {
    /// Assignment the role came from.
    pub assignment: AssignmentRef,
    /// Role row.
    pub role: Role,
    /// Branch the assignment is scoped to.
    pub branch_scope: Option<BranchId>,
    /// Scoped branch details when the branch still exists.
    pub branch: Option<Branch>,
    /// Primary role marker.
    pub is_primary: bool,
    /// Assignment active flag.
    pub is_active: bool,
    /// When the role was granted.
    pub assigned_at: DateTime<Utc>,
}

/// Resolver output: roles held and navigation surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedAccess {
    /// One entry per effective assignment whose role exists.
    pub role_details: Vec<RoleView>,
    /// Surfaced menus in display order.
    pub sidebar_menus: Vec<MenuView>,
}

/// Full employee profile payload.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeProfile {
    /// Employee record.
    pub employee: Employee,
    /// Home branch when set and present.
    pub branch: Option<Branch>,
    /// Resolved roles and navigation.
    pub access: ResolvedAccess,
}
