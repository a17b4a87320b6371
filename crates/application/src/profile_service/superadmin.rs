use super::*;

impl ProfileService {
    /// Grants every displayable menu with full CRUD and lists every active role.
    pub(super) async fn resolve_superadmin(&self, employee: &Employee) -> AppResult<ResolvedAccess> {
        let role_details = self
            .repository
            .list_all_active_roles()
            .await?
            .into_iter()
            .map(|role| RoleView {
                assignment: AssignmentRef::Superadmin,
                role,
                branch_scope: None,
                branch: None,
                is_primary: true,
                is_active: true,
                assigned_at: employee.created_at,
            })
            .collect();

        let menus: Vec<SidebarMenu> = self
            .repository
            .list_all_active_display_sidebar_menus()
            .await?
            .into_iter()
            .filter(SidebarMenu::is_displayable)
            .collect();

        let mut index = MenuIndex::default();
        for menu in &menus {
            index.register_menu(menu);
        }
        let menus_by_id: HashMap<SidebarMenuId, &SidebarMenu> =
            menus.iter().map(|menu| (menu.id, menu)).collect();

        let catalog = self
            .repository
            .list_all_active_display_sidebar_sub_menus()
            .await?;
        for catalog_entry in catalog {
            let Some(category) = catalog_entry.permission_category else {
                continue;
            };
            if !catalog_entry.sub_menu.is_displayable() {
                continue;
            }
            let Some(menu) = menus_by_id.get(&catalog_entry.sub_menu.sidebar_menu_id) else {
                continue;
            };

            index.merge(
                menu,
                &catalog_entry.sub_menu,
                PermissionCategoryGrant {
                    category,
                    flags: CrudFlags::all(),
                },
            );
        }

        Ok(ResolvedAccess {
            role_details,
            sidebar_menus: index.into_menus(),
        })
    }
}
