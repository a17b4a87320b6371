use super::*;

/// Per-call accumulator keyed by menu and submenu identifiers.
///
/// Menus and submenus keep the order in which they were first merged, so the
/// final stable sort breaks `display_order` ties by encounter order.
#[derive(Default)]
pub(super) struct MenuIndex {
    menus: Vec<MenuView>,
    menu_positions: HashMap<SidebarMenuId, usize>,
    sub_menu_positions: HashMap<(SidebarMenuId, SidebarSubMenuId), usize>,
}

impl MenuIndex {
    /// Registers a menu without submenus, keeping its first position.
    pub(super) fn register_menu(&mut self, menu: &SidebarMenu) -> usize {
        if let Some(position) = self.menu_positions.get(&menu.id) {
            return *position;
        }

        let position = self.menus.len();
        self.menus.push(MenuView {
            menu: menu.clone(),
            sub_menus: Vec::new(),
        });
        self.menu_positions.insert(menu.id, position);
        position
    }

    /// Appends one grant under `(menu, sub_menu)`, creating either level on first sight.
    pub(super) fn merge(
        &mut self,
        menu: &SidebarMenu,
        sub_menu: &SidebarSubMenu,
        grant: PermissionCategoryGrant,
    ) {
        let menu_position = self.register_menu(menu);
        let menu_view = &mut self.menus[menu_position];

        let sub_menu_position = *self
            .sub_menu_positions
            .entry((menu.id, sub_menu.id))
            .or_insert_with(|| {
                menu_view.sub_menus.push(SubMenuView {
                    sub_menu: sub_menu.clone(),
                    permission_categories: Vec::new(),
                });
                menu_view.sub_menus.len() - 1
            });

        menu_view.sub_menus[sub_menu_position]
            .permission_categories
            .push(grant);
    }

    /// Drops unviewable submenus and empty menus, then orders both levels.
    pub(super) fn into_menus(self) -> Vec<MenuView> {
        let mut menus: Vec<MenuView> = self
            .menus
            .into_iter()
            .filter_map(|mut menu_view| {
                menu_view.sub_menus.retain(SubMenuView::is_viewable);
                if menu_view.sub_menus.is_empty() {
                    return None;
                }

                menu_view
                    .sub_menus
                    .sort_by_key(|sub_menu_view| sub_menu_view.sub_menu.display_order);
                Some(menu_view)
            })
            .collect();

        menus.sort_by_key(|menu_view| menu_view.menu.display_order);
        menus
    }
}
