use qorehr_application::{
    AssignmentRef, EmployeeProfile, MenuView, PermissionCategoryGrant, RoleChanges, RoleView,
    SubMenuView,
};
use qorehr_domain::{
    BranchId, CrudFlags, PermissionCategory, PermissionCategoryId, PermissionEntry, Role,
    RoleAssignment, RoleId,
};

use super::types::{
    AssignRoleRequest, EmployeeProfileResponse, PermissionCategoryResponse,
    PermissionEntryResponse, PermissionGrantResponse, RoleAssignmentResponse, RoleDetailResponse,
    RoleRequest, RoleResponse, SaveRolePermissionRequest, SidebarMenuResponse,
    SidebarSubMenuResponse,
};
use crate::dto::common::format_timestamp;
use crate::dto::employees::EmployeeResponse;
use crate::dto::organization::BranchResponse;

const SUPERADMIN_ASSIGNMENT_ID: &str = "superadmin";

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id.value(),
            name: role.name,
            slug: role.slug,
            description: role.description,
            priority: role.priority,
            is_system: role.is_system,
            is_active: role.is_active,
        }
    }
}

impl From<RoleRequest> for RoleChanges {
    fn from(value: RoleRequest) -> Self {
        Self {
            name: value.name,
            slug: value.slug,
            description: value.description,
            priority: value.priority,
        }
    }
}

impl From<AssignRoleRequest> for qorehr_application::AssignRoleRequest {
    fn from(value: AssignRoleRequest) -> Self {
        Self {
            role_id: RoleId::new(value.role_id),
            branch_scope: value.branch_id.map(BranchId::new),
            is_primary: value.is_primary,
        }
    }
}

impl From<RoleAssignment> for RoleAssignmentResponse {
    fn from(assignment: RoleAssignment) -> Self {
        Self {
            id: assignment.id.value(),
            employee_id: assignment.employee_id.value(),
            role_id: assignment.role_id.value(),
            branch_id: assignment.branch_scope.map(BranchId::value),
            is_primary: assignment.is_primary,
            is_active: assignment.is_active,
            assigned_at: format_timestamp(assignment.assigned_at),
        }
    }
}

impl From<PermissionCategory> for PermissionCategoryResponse {
    fn from(category: PermissionCategory) -> Self {
        Self {
            id: category.id.value(),
            name: category.name,
            short_code: category.short_code,
            description: category.description,
        }
    }
}

impl From<PermissionEntry> for PermissionEntryResponse {
    fn from(entry: PermissionEntry) -> Self {
        Self {
            id: entry.id.value(),
            role_id: entry.role_id.value(),
            permission_category_id: entry.permission_category_id.value(),
            can_view: entry.flags.can_view,
            can_add: entry.flags.can_add,
            can_edit: entry.flags.can_edit,
            can_delete: entry.flags.can_delete,
            is_active: entry.is_active,
        }
    }
}

impl SaveRolePermissionRequest {
    /// Category the flags apply to.
    #[must_use]
    pub fn category_id(&self) -> PermissionCategoryId {
        PermissionCategoryId::new(self.permission_category_id)
    }

    /// Requested CRUD flags.
    #[must_use]
    pub fn flags(&self) -> CrudFlags {
        CrudFlags {
            can_view: self.can_view,
            can_add: self.can_add,
            can_edit: self.can_edit,
            can_delete: self.can_delete,
        }
    }
}

impl From<PermissionCategoryGrant> for PermissionGrantResponse {
    fn from(grant: PermissionCategoryGrant) -> Self {
        Self {
            id: grant.category.id.value(),
            name: grant.category.name,
            short_code: grant.category.short_code,
            description: grant.category.description,
            can_view: grant.flags.can_view,
            can_add: grant.flags.can_add,
            can_edit: grant.flags.can_edit,
            can_delete: grant.flags.can_delete,
        }
    }
}

impl From<SubMenuView> for SidebarSubMenuResponse {
    fn from(view: SubMenuView) -> Self {
        let sub_menu = view.sub_menu;
        Self {
            id: sub_menu.id.value(),
            sub_menu: sub_menu.sub_menu,
            icon: sub_menu.icon,
            url: sub_menu.url,
            lang_key: sub_menu.lang_key,
            display_order: sub_menu.display_order,
            level: sub_menu.level,
            is_active: sub_menu.is_active,
            permission_categories: view
                .permission_categories
                .into_iter()
                .map(PermissionGrantResponse::from)
                .collect(),
        }
    }
}

impl From<MenuView> for SidebarMenuResponse {
    fn from(view: MenuView) -> Self {
        let menu = view.menu;
        Self {
            id: menu.id.value(),
            menu: menu.menu,
            icon: menu.icon,
            url: menu.url,
            lang_key: menu.lang_key,
            display_order: menu.display_order,
            level: menu.level,
            sub_menus: view
                .sub_menus
                .into_iter()
                .map(SidebarSubMenuResponse::from)
                .collect(),
        }
    }
}

impl From<RoleView> for RoleDetailResponse {
    fn from(view: RoleView) -> Self {
        let employee_role_id = match view.assignment {
            AssignmentRef::Assignment(id) => id.to_string(),
            AssignmentRef::Superadmin => SUPERADMIN_ASSIGNMENT_ID.to_owned(),
        };

        Self {
            employee_role_id,
            role_id: view.role.id.value(),
            branch_id: view.branch_scope.map(BranchId::value),
            is_primary: view.is_primary,
            is_active: view.is_active,
            assigned_date: format_timestamp(view.assigned_at),
            role_details: RoleResponse::from(view.role),
            branch_details: view.branch.map(BranchResponse::from),
        }
    }
}

impl From<EmployeeProfile> for EmployeeProfileResponse {
    fn from(profile: EmployeeProfile) -> Self {
        Self {
            employee_details: EmployeeResponse::from(profile.employee),
            branch_details: profile.branch.map(BranchResponse::from),
            role_details: profile
                .access
                .role_details
                .into_iter()
                .map(RoleDetailResponse::from)
                .collect(),
            sidebar_menus: profile
                .access
                .sidebar_menus
                .into_iter()
                .map(SidebarMenuResponse::from)
                .collect(),
        }
    }
}
