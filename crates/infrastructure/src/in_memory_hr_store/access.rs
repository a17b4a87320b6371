use async_trait::async_trait;
use qorehr_application::{AccessCatalogRepository, CatalogSubMenu};

use super::*;

fn by_display_order(left: &SidebarSubMenu, right: &SidebarSubMenu) -> std::cmp::Ordering {
    (left.display_order, left.id).cmp(&(right.display_order, right.id))
}

#[async_trait]
impl AccessCatalogRepository for InMemoryHrStore {
    async fn get_principal(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self.state.read().await.employees.get(&employee_id).cloned())
    }

    async fn list_active_role_assignments(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Vec<RoleAssignment>> {
        let state = self.state.read().await;
        let mut assignments: Vec<RoleAssignment> = state
            .assignments
            .values()
            .filter(|assignment| assignment.employee_id == employee_id)
            .filter(|assignment| assignment.is_effective())
            .cloned()
            .collect();

        assignments.sort_by(|left, right| {
            right
                .is_primary
                .cmp(&left.is_primary)
                .then(left.assigned_at.cmp(&right.assigned_at))
                .then(left.id.cmp(&right.id))
        });
        Ok(assignments)
    }

    async fn get_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        Ok(self.state.read().await.roles.get(&role_id).cloned())
    }

    async fn list_all_active_roles(&self) -> AppResult<Vec<Role>> {
        let state = self.state.read().await;
        let mut roles: Vec<Role> = state
            .roles
            .values()
            .filter(|role| role.is_active)
            .cloned()
            .collect();

        roles.sort_by(|left, right| {
            right
                .priority
                .cmp(&left.priority)
                .then(left.id.cmp(&right.id))
        });
        Ok(roles)
    }

    async fn list_active_permission_entries(
        &self,
        role_id: RoleId,
    ) -> AppResult<Vec<PermissionEntry>> {
        let state = self.state.read().await;
        Ok(state
            .entries
            .values()
            .filter(|entry| entry.role_id == role_id && entry.is_active)
            .cloned()
            .collect())
    }

    async fn get_permission_category(
        &self,
        permission_category_id: PermissionCategoryId,
    ) -> AppResult<Option<PermissionCategory>> {
        Ok(self
            .state
            .read()
            .await
            .categories
            .get(&permission_category_id)
            .cloned())
    }

    async fn list_sidebar_sub_menus_by_permission_category(
        &self,
        permission_category_id: PermissionCategoryId,
    ) -> AppResult<Vec<SidebarSubMenu>> {
        let state = self.state.read().await;
        let mut sub_menus: Vec<SidebarSubMenu> = state
            .sub_menus
            .values()
            .filter(|sub_menu| sub_menu.permission_category_id == Some(permission_category_id))
            .filter(|sub_menu| sub_menu.is_displayable())
            .cloned()
            .collect();

        sub_menus.sort_by(by_display_order);
        Ok(sub_menus)
    }

    async fn list_all_active_display_sidebar_sub_menus(&self) -> AppResult<Vec<CatalogSubMenu>> {
        let state = self.state.read().await;
        let mut sub_menus: Vec<SidebarSubMenu> = state
            .sub_menus
            .values()
            .filter(|sub_menu| sub_menu.is_displayable())
            .cloned()
            .collect();
        sub_menus.sort_by(by_display_order);

        Ok(sub_menus
            .into_iter()
            .map(|sub_menu| CatalogSubMenu {
                permission_category: sub_menu
                    .permission_category_id
                    .and_then(|category_id| state.categories.get(&category_id).cloned()),
                sub_menu,
            })
            .collect())
    }

    async fn get_sidebar_menu(&self, menu_id: SidebarMenuId) -> AppResult<Option<SidebarMenu>> {
        Ok(self.state.read().await.menus.get(&menu_id).cloned())
    }

    async fn list_all_active_display_sidebar_menus(&self) -> AppResult<Vec<SidebarMenu>> {
        let state = self.state.read().await;
        let mut menus: Vec<SidebarMenu> = state
            .menus
            .values()
            .filter(|menu| menu.is_displayable())
            .cloned()
            .collect();

        menus.sort_by_key(|menu| (menu.display_order, menu.id));
        Ok(menus)
    }

    async fn find_branch(&self, branch_id: BranchId) -> AppResult<Option<Branch>> {
        Ok(self.state.read().await.branches.get(&branch_id).cloned())
    }
}
