use super::*;

impl ProfileService {
    /// Walks assignment, role, entry, category, submenu and menu for a regular employee.
    pub(super) async fn resolve_scoped(&self, employee: &Employee) -> AppResult<ResolvedAccess> {
        let assignments = self
            .repository
            .list_active_role_assignments(employee.id)
            .await?;

        let mut role_details = Vec::with_capacity(assignments.len());
        let mut index = MenuIndex::default();

        for assignment in assignments.into_iter().filter(|value| value.is_effective()) {
            let Some(role) = self.repository.get_role(assignment.role_id).await? else {
                debug!(
                    employee_id = %employee.id,
                    role_id = %assignment.role_id,
                    "skipping assignment with missing role"
                );
                continue;
            };

            let branch = match assignment.branch_scope {
                Some(branch_id) => self.repository.find_branch(branch_id).await?,
                None => None,
            };

            let entries = self
                .repository
                .list_active_permission_entries(role.id)
                .await?;

            role_details.push(RoleView {
                assignment: AssignmentRef::Assignment(assignment.id),
                role,
                branch_scope: assignment.branch_scope,
                branch,
                is_primary: assignment.is_primary,
                is_active: assignment.is_active,
                assigned_at: assignment.assigned_at,
            });

            for entry in entries
                .into_iter()
                .filter(|entry| entry.is_active && entry.flags.can_view)
            {
                let Some(category) = self
                    .repository
                    .get_permission_category(entry.permission_category_id)
                    .await?
                else {
                    debug!(
                        permission_category_id = %entry.permission_category_id,
                        "skipping entry with missing permission category"
                    );
                    continue;
                };

                let sub_menus = self
                    .repository
                    .list_sidebar_sub_menus_by_permission_category(category.id)
                    .await?;

                for sub_menu in sub_menus.iter().filter(|value| value.is_displayable()) {
                    let parent = self
                        .repository
                        .get_sidebar_menu(sub_menu.sidebar_menu_id)
                        .await?;
                    let Some(menu) = parent.filter(SidebarMenu::is_displayable) else {
                        debug!(
                            sidebar_sub_menu_id = %sub_menu.id,
                            sidebar_menu_id = %sub_menu.sidebar_menu_id,
                            "skipping submenu without a displayable parent menu"
                        );
                        continue;
                    };

                    index.merge(
                        &menu,
                        sub_menu,
                        PermissionCategoryGrant {
                            category: category.clone(),
                            flags: entry.flags,
                        },
                    );
                }
            }
        }

        Ok(ResolvedAccess {
            role_details,
            sidebar_menus: index.into_menus(),
        })
    }
}
