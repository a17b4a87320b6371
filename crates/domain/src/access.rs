//! Roles, permission grants and the sidebar navigation catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    BranchId, EmployeeId, PermissionCategoryId, PermissionEntryId, RoleAssignmentId, RoleId,
    SidebarMenuId, SidebarSubMenuId,
};

/// Named bundle of permission entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Stable identifier.
    pub id: RoleId,
    /// Display name.
    pub name: String,
    /// URL-safe unique name.
    pub slug: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Higher values rank first when roles compete.
    pub priority: i32,
    /// System roles are seeded and cannot be modified.
    pub is_system: bool,
    /// Inactive roles are ignored.
    pub is_active: bool,
}

/// Derives a lowercase dash-separated slug from a display name.
#[must_use]
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for character in value.trim().chars() {
        if character.is_ascii_alphanumeric() {
            slug.push(character.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Link between an employee and a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Stable identifier.
    pub id: RoleAssignmentId,
    /// Employee holding the role.
    pub employee_id: EmployeeId,
    /// Assigned role.
    pub role_id: RoleId,
    /// Optional branch the assignment applies to.
    pub branch_scope: Option<BranchId>,
    /// Marks the employee's main role.
    pub is_primary: bool,
    /// Inactive assignments are ignored.
    pub is_active: bool,
    /// When the role was granted.
    pub assigned_at: DateTime<Utc>,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl RoleAssignment {
    /// Only active, non-deleted assignments grant anything.
    #[must_use]
    pub fn is_effective(&self) -> bool {
        self.is_active && self.deleted_at.is_none()
    }
}

/// Capability grouping that a submenu is gated on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCategory {
    /// Stable identifier.
    pub id: PermissionCategoryId,
    /// Display name.
    pub name: String,
    /// Short code.
    pub short_code: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

/// CRUD capability flags of one permission row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CrudFlags {
    /// Read access. Gates visibility.
    pub can_view: bool,
    /// Create access.
    pub can_add: bool,
    /// Update access.
    pub can_edit: bool,
    /// Delete access.
    pub can_delete: bool,
}

impl CrudFlags {
    /// Every capability granted.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            can_view: true,
            can_add: true,
            can_edit: true,
            can_delete: true,
        }
    }
}

/// Grant of CRUD flags to a role over one permission category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionEntry {
    /// Stable identifier.
    pub id: PermissionEntryId,
    /// Role holding the grant.
    pub role_id: RoleId,
    /// Category the grant applies to.
    pub permission_category_id: PermissionCategoryId,
    /// Granted capabilities.
    pub flags: CrudFlags,
    /// Inactive entries are ignored.
    pub is_active: bool,
}

/// Top-level sidebar node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarMenu {
    /// Stable identifier.
    pub id: SidebarMenuId,
    /// Label.
    pub menu: String,
    /// Icon name.
    pub icon: Option<String>,
    /// Route.
    pub url: Option<String>,
    /// Translation key.
    pub lang_key: Option<String>,
    /// Ascending sort position.
    pub display_order: i32,
    /// Nesting level.
    pub level: i32,
    /// Disabled menus never surface.
    pub is_active: bool,
    /// Hidden menus never surface.
    pub sidebar_display: bool,
}

impl SidebarMenu {
    /// Returns whether the menu may surface at all.
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        self.is_active && self.sidebar_display
    }
}

/// Second-level sidebar node gated by one permission category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSubMenu {
    /// Stable identifier.
    pub id: SidebarSubMenuId,
    /// Parent menu.
    pub sidebar_menu_id: SidebarMenuId,
    /// Category that gates visibility.
    pub permission_category_id: Option<PermissionCategoryId>,
    /// Label.
    pub sub_menu: String,
    /// Icon name.
    pub icon: Option<String>,
    /// Route.
    pub url: Option<String>,
    /// Translation key.
    pub lang_key: Option<String>,
    /// Ascending sort position within the parent.
    pub display_order: i32,
    /// Nesting level.
    pub level: i32,
    /// Disabled submenus never surface.
    pub is_active: bool,
    /// Hidden submenus never surface.
    pub sidebar_display: bool,
}

impl SidebarSubMenu {
    /// Returns whether the submenu may surface at all.
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        self.is_active && self.sidebar_display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  HR Manager / Payroll "), "hr-manager-payroll");
        assert_eq!(slugify("Admin"), "admin");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn deleted_assignment_is_not_effective() {
        let assignment = RoleAssignment {
            id: RoleAssignmentId::new(1),
            employee_id: EmployeeId::new(1),
            role_id: RoleId::new(1),
            branch_scope: None,
            is_primary: true,
            is_active: true,
            assigned_at: Utc::now(),
            deleted_at: Some(Utc::now()),
        };

        assert!(!assignment.is_effective());
        assert!(
            RoleAssignment {
                deleted_at: None,
                ..assignment
            }
            .is_effective()
        );
    }
}
