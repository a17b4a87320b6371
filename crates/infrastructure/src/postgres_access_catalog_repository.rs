//! PostgreSQL-backed access catalog used by the sidebar resolver.

use async_trait::async_trait;
use sqlx::PgPool;

use qorehr_application::{AccessCatalogRepository, CatalogSubMenu};
use qorehr_core::{AppError, AppResult};
use qorehr_domain::{
    Branch, BranchId, Employee, EmployeeId, PermissionCategory, PermissionCategoryId,
    PermissionEntry, Role, RoleAssignment, RoleId, SidebarMenu, SidebarMenuId, SidebarSubMenu,
};

use crate::postgres_rows::{
    BranchRow, EMPLOYEE_COLUMNS, EmployeeRow, PermissionCategoryRow, PermissionEntryRow,
    RoleAssignmentRow, RoleRow, SidebarMenuRow, SidebarSubMenuRow,
};

const SUB_MENU_COLUMNS: &str = "id, sidebar_menu_id, permission_category_id, sub_menu, icon, url, \
    lang_key, display_order, level, is_active, sidebar_display";
const MENU_COLUMNS: &str =
    "id, menu, icon, url, lang_key, display_order, level, is_active, sidebar_display";

/// PostgreSQL implementation of the access catalog port.
#[derive(Clone)]
pub struct PostgresAccessCatalogRepository {
    pool: PgPool,
}

impl PostgresAccessCatalogRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessCatalogRepository for PostgresAccessCatalogRepository {
    async fn get_principal(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1"
        ))
        .bind(employee_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load principal: {error}")))?;

        row.map(Employee::try_from).transpose()
    }

    async fn list_active_role_assignments(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Vec<RoleAssignment>> {
        let rows = sqlx::query_as::<_, RoleAssignmentRow>(
            r#"
            SELECT id, employee_id, role_id, branch_scope, is_primary, is_active,
                   assigned_at, deleted_at
            FROM role_assignments
            WHERE employee_id = $1 AND is_active AND deleted_at IS NULL
            ORDER BY is_primary DESC, assigned_at, id
            "#,
        )
        .bind(employee_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list role assignments: {error}"))
        })?;

        Ok(rows.into_iter().map(RoleAssignment::from).collect())
    }

    async fn get_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, slug, description, priority, is_system, is_active
            FROM roles
            WHERE id = $1
            "#,
        )
        .bind(role_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load role: {error}")))?;

        Ok(row.map(Role::from))
    }

    async fn list_all_active_roles(&self) -> AppResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, slug, description, priority, is_system, is_active
            FROM roles
            WHERE is_active
            ORDER BY priority DESC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list active roles: {error}")))?;

        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn list_active_permission_entries(
        &self,
        role_id: RoleId,
    ) -> AppResult<Vec<PermissionEntry>> {
        let rows = sqlx::query_as::<_, PermissionEntryRow>(
            r#"
            SELECT id, role_id, permission_category_id, can_view, can_add, can_edit,
                   can_delete, is_active
            FROM role_permissions
            WHERE role_id = $1 AND is_active
            ORDER BY id
            "#,
        )
        .bind(role_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list permission entries: {error}"))
        })?;

        Ok(rows.into_iter().map(PermissionEntry::from).collect())
    }

    async fn get_permission_category(
        &self,
        permission_category_id: PermissionCategoryId,
    ) -> AppResult<Option<PermissionCategory>> {
        let row = sqlx::query_as::<_, PermissionCategoryRow>(
            "SELECT id, name, short_code, description FROM permission_categories WHERE id = $1",
        )
        .bind(permission_category_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to load permission category: {error}"))
        })?;

        Ok(row.map(PermissionCategory::from))
    }

    async fn list_sidebar_sub_menus_by_permission_category(
        &self,
        permission_category_id: PermissionCategoryId,
    ) -> AppResult<Vec<SidebarSubMenu>> {
        let rows = sqlx::query_as::<_, SidebarSubMenuRow>(&format!(
            "SELECT {SUB_MENU_COLUMNS} FROM sidebar_sub_menus \
             WHERE permission_category_id = $1 AND is_active AND sidebar_display \
             ORDER BY display_order, id"
        ))
        .bind(permission_category_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list sidebar submenus: {error}")))?;

        Ok(rows.into_iter().map(SidebarSubMenu::from).collect())
    }

    async fn list_all_active_display_sidebar_sub_menus(&self) -> AppResult<Vec<CatalogSubMenu>> {
        let rows = sqlx::query_as::<_, SidebarSubMenuRow>(&format!(
            "SELECT {SUB_MENU_COLUMNS} FROM sidebar_sub_menus \
             WHERE is_active AND sidebar_display ORDER BY display_order, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list sidebar submenus: {error}")))?;

        let categories = sqlx::query_as::<_, PermissionCategoryRow>(
            "SELECT id, name, short_code, description FROM permission_categories",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list permission categories: {error}"))
        })?
        .into_iter()
        .map(PermissionCategory::from)
        .collect::<Vec<_>>();

        Ok(rows
            .into_iter()
            .map(SidebarSubMenu::from)
            .map(|sub_menu| {
                let permission_category = sub_menu.permission_category_id.and_then(|category_id| {
                    categories
                        .iter()
                        .find(|category| category.id == category_id)
                        .cloned()
                });
                CatalogSubMenu {
                    sub_menu,
                    permission_category,
                }
            })
            .collect())
    }

    async fn get_sidebar_menu(&self, menu_id: SidebarMenuId) -> AppResult<Option<SidebarMenu>> {
        let row = sqlx::query_as::<_, SidebarMenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM sidebar_menus WHERE id = $1"
        ))
        .bind(menu_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load sidebar menu: {error}")))?;

        Ok(row.map(SidebarMenu::from))
    }

    async fn list_all_active_display_sidebar_menus(&self) -> AppResult<Vec<SidebarMenu>> {
        let rows = sqlx::query_as::<_, SidebarMenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM sidebar_menus \
             WHERE is_active AND sidebar_display ORDER BY display_order, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list sidebar menus: {error}")))?;

        Ok(rows.into_iter().map(SidebarMenu::from).collect())
    }

    async fn find_branch(&self, branch_id: BranchId) -> AppResult<Option<Branch>> {
        let row = sqlx::query_as::<_, BranchRow>(
            r#"
            SELECT id, name, code, address, city, state, country, phone, email, is_active
            FROM branches
            WHERE id = $1
            "#,
        )
        .bind(branch_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load branch: {error}")))?;

        Ok(row.map(Branch::from))
    }
}
