//! PostgreSQL-backed role, grant and assignment administration.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use qorehr_application::{RoleAdminRepository, RoleAssignmentInput, RoleInput};
use qorehr_core::{AppError, AppResult};
use qorehr_domain::{
    CrudFlags, PermissionCategory, PermissionCategoryId, PermissionEntry, Role, RoleAssignment,
    RoleAssignmentId, RoleId,
};

use crate::postgres_rows::{
    PermissionCategoryRow, PermissionEntryRow, RoleAssignmentRow, RoleRow, write_error,
};

const ROLE_COLUMNS: &str = "id, name, slug, description, priority, is_system, is_active";
const ENTRY_COLUMNS: &str =
    "id, role_id, permission_category_id, can_view, can_add, can_edit, can_delete, is_active";
const ASSIGNMENT_COLUMNS: &str =
    "id, employee_id, role_id, branch_scope, is_primary, is_active, assigned_at, deleted_at";

/// PostgreSQL implementation of the role administration port.
#[derive(Clone)]
pub struct PostgresRoleAdminRepository {
    pool: PgPool,
}

impl PostgresRoleAdminRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleAdminRepository for PostgresRoleAdminRepository {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>(&format!(
            "SELECT {ROLE_COLUMNS} FROM roles ORDER BY priority DESC, name, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list roles: {error}")))?;

        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        let row = sqlx::query_as::<_, RoleRow>(&format!(
            "SELECT {ROLE_COLUMNS} FROM roles WHERE id = $1"
        ))
        .bind(role_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find role: {error}")))?;

        Ok(row.map(Role::from))
    }

    async fn create_role(&self, input: RoleInput) -> AppResult<Role> {
        let row = sqlx::query_as::<_, RoleRow>(&format!(
            r#"
            INSERT INTO roles (name, slug, description, priority)
            VALUES ($1, $2, $3, $4)
            RETURNING {ROLE_COLUMNS}
            "#
        ))
        .bind(input.name.as_str())
        .bind(input.slug.as_str())
        .bind(input.description.as_deref())
        .bind(input.priority)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            write_error(
                error,
                || format!("role slug '{}' already exists", input.slug),
                "create role",
            )
        })?;

        Ok(Role::from(row))
    }

    async fn update_role(&self, role_id: RoleId, input: RoleInput) -> AppResult<Role> {
        let row = sqlx::query_as::<_, RoleRow>(&format!(
            r#"
            UPDATE roles
            SET name = $2, slug = $3, description = $4, priority = $5, updated_at = now()
            WHERE id = $1
            RETURNING {ROLE_COLUMNS}
            "#
        ))
        .bind(role_id.value())
        .bind(input.name.as_str())
        .bind(input.slug.as_str())
        .bind(input.description.as_deref())
        .bind(input.priority)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            write_error(
                error,
                || format!("role slug '{}' already exists", input.slug),
                "update role",
            )
        })?
        .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' not found")))?;

        Ok(Role::from(row))
    }

    async fn set_role_active(&self, role_id: RoleId, is_active: bool) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE roles SET is_active = $2, updated_at = now() WHERE id = $1")
                .bind(role_id.value())
                .bind(is_active)
                .execute(&self.pool)
                .await
                .map_err(|error| {
                    AppError::Internal(format!("failed to update role status: {error}"))
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("role '{role_id}' not found")));
        }

        Ok(())
    }

    async fn list_permission_categories(&self) -> AppResult<Vec<PermissionCategory>> {
        let rows = sqlx::query_as::<_, PermissionCategoryRow>(
            "SELECT id, name, short_code, description FROM permission_categories ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list permission categories: {error}"))
        })?;

        Ok(rows.into_iter().map(PermissionCategory::from).collect())
    }

    async fn find_permission_category(
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
            AppError::Internal(format!("failed to find permission category: {error}"))
        })?;

        Ok(row.map(PermissionCategory::from))
    }

    async fn list_role_permission_entries(
        &self,
        role_id: RoleId,
    ) -> AppResult<Vec<PermissionEntry>> {
        let rows = sqlx::query_as::<_, PermissionEntryRow>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM role_permissions WHERE role_id = $1 \
             ORDER BY permission_category_id, id"
        ))
        .bind(role_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list role permissions: {error}"))
        })?;

        Ok(rows.into_iter().map(PermissionEntry::from).collect())
    }

    async fn save_permission_entry(
        &self,
        role_id: RoleId,
        permission_category_id: PermissionCategoryId,
        flags: CrudFlags,
    ) -> AppResult<PermissionEntry> {
        let mut transaction = self.pool.begin().await.map_err(|error| {
            AppError::Internal(format!("failed to start permission transaction: {error}"))
        })?;

        let updated = sqlx::query_as::<_, PermissionEntryRow>(&format!(
            r#"
            UPDATE role_permissions
            SET can_view = $3, can_add = $4, can_edit = $5, can_delete = $6, is_active = TRUE
            WHERE role_id = $1 AND permission_category_id = $2
            RETURNING {ENTRY_COLUMNS}
            "#
        ))
        .bind(role_id.value())
        .bind(permission_category_id.value())
        .bind(flags.can_view)
        .bind(flags.can_add)
        .bind(flags.can_edit)
        .bind(flags.can_delete)
        .fetch_all(&mut *transaction)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to update role permission: {error}"))
        })?;

        let row = match updated.into_iter().next() {
            Some(row) => row,
            None => sqlx::query_as::<_, PermissionEntryRow>(&format!(
                r#"
                INSERT INTO role_permissions (
                    role_id, permission_category_id, can_view, can_add, can_edit, can_delete
                )
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING {ENTRY_COLUMNS}
                "#
            ))
            .bind(role_id.value())
            .bind(permission_category_id.value())
            .bind(flags.can_view)
            .bind(flags.can_add)
            .bind(flags.can_edit)
            .bind(flags.can_delete)
            .fetch_one(&mut *transaction)
            .await
            .map_err(|error| write_error(error, String::new, "insert role permission"))?,
        };

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!("failed to commit permission transaction: {error}"))
        })?;

        Ok(PermissionEntry::from(row))
    }

    async fn create_role_assignment(
        &self,
        input: RoleAssignmentInput,
    ) -> AppResult<RoleAssignment> {
        let row = sqlx::query_as::<_, RoleAssignmentRow>(&format!(
            r#"
            INSERT INTO role_assignments (employee_id, role_id, branch_scope, is_primary)
            VALUES ($1, $2, $3, $4)
            RETURNING {ASSIGNMENT_COLUMNS}
            "#
        ))
        .bind(input.employee_id.value())
        .bind(input.role_id.value())
        .bind(input.branch_scope.map(|id| id.value()))
        .bind(input.is_primary)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| write_error(error, String::new, "create role assignment"))?;

        Ok(RoleAssignment::from(row))
    }

    async fn find_role_assignment(
        &self,
        assignment_id: RoleAssignmentId,
    ) -> AppResult<Option<RoleAssignment>> {
        let row = sqlx::query_as::<_, RoleAssignmentRow>(&format!(
            "SELECT {ASSIGNMENT_COLUMNS} FROM role_assignments WHERE id = $1"
        ))
        .bind(assignment_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to find role assignment: {error}"))
        })?;

        Ok(row.map(RoleAssignment::from))
    }

    async fn soft_delete_role_assignment(
        &self,
        assignment_id: RoleAssignmentId,
        deleted_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE role_assignments
            SET is_active = FALSE, deleted_at = $2
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(assignment_id.value())
        .bind(deleted_at)
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to remove role assignment: {error}"))
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "role assignment '{assignment_id}' not found"
            )));
        }

        Ok(())
    }
}
