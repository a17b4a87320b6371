//! PostgreSQL-backed branches, departments and designations.

use async_trait::async_trait;
use sqlx::PgPool;

use qorehr_application::{BranchInput, DepartmentInput, OrganizationRepository};
use qorehr_core::{AppError, AppResult};
use qorehr_domain::{Branch, BranchId, Department, DepartmentId, Designation, DesignationId};

use crate::postgres_rows::{BranchRow, DepartmentRow, DesignationRow, write_error};

const BRANCH_COLUMNS: &str = "id, name, code, address, city, state, country, phone, email, is_active";

/// PostgreSQL implementation of the organization repository port.
#[derive(Clone)]
pub struct PostgresOrganizationRepository {
    pool: PgPool,
}

impl PostgresOrganizationRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganizationRepository for PostgresOrganizationRepository {
    async fn list_branches(&self) -> AppResult<Vec<Branch>> {
        let rows = sqlx::query_as::<_, BranchRow>(&format!(
            "SELECT {BRANCH_COLUMNS} FROM branches ORDER BY name, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list branches: {error}")))?;

        Ok(rows.into_iter().map(Branch::from).collect())
    }

    async fn find_branch(&self, branch_id: BranchId) -> AppResult<Option<Branch>> {
        let row = sqlx::query_as::<_, BranchRow>(&format!(
            "SELECT {BRANCH_COLUMNS} FROM branches WHERE id = $1"
        ))
        .bind(branch_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find branch: {error}")))?;

        Ok(row.map(Branch::from))
    }

    async fn create_branch(&self, input: BranchInput) -> AppResult<Branch> {
        let row = sqlx::query_as::<_, BranchRow>(&format!(
            r#"
            INSERT INTO branches (name, code, address, city, state, country, phone, email, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {BRANCH_COLUMNS}
            "#
        ))
        .bind(input.name.as_str())
        .bind(input.code.as_deref())
        .bind(input.address.as_deref())
        .bind(input.city.as_deref())
        .bind(input.state.as_deref())
        .bind(input.country.as_deref())
        .bind(input.phone.as_deref())
        .bind(input.email.as_deref())
        .bind(input.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            write_error(
                error,
                || format!("branch code '{}' already exists", input.code.as_deref().unwrap_or_default()),
                "create branch",
            )
        })?;

        Ok(Branch::from(row))
    }

    async fn update_branch(&self, branch_id: BranchId, input: BranchInput) -> AppResult<Branch> {
        let row = sqlx::query_as::<_, BranchRow>(&format!(
            r#"
            UPDATE branches
            SET name = $2, code = $3, address = $4, city = $5, state = $6, country = $7,
                phone = $8, email = $9, is_active = $10, updated_at = now()
            WHERE id = $1
            RETURNING {BRANCH_COLUMNS}
            "#
        ))
        .bind(branch_id.value())
        .bind(input.name.as_str())
        .bind(input.code.as_deref())
        .bind(input.address.as_deref())
        .bind(input.city.as_deref())
        .bind(input.state.as_deref())
        .bind(input.country.as_deref())
        .bind(input.phone.as_deref())
        .bind(input.email.as_deref())
        .bind(input.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            write_error(
                error,
                || format!("branch code '{}' already exists", input.code.as_deref().unwrap_or_default()),
                "update branch",
            )
        })?
        .ok_or_else(|| AppError::NotFound(format!("branch '{branch_id}' not found")))?;

        Ok(Branch::from(row))
    }

    async fn delete_branch(&self, branch_id: BranchId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM branches WHERE id = $1")
            .bind(branch_id.value())
            .execute(&self.pool)
            .await
            .map_err(|error| write_error(error, String::new, "delete branch"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("branch '{branch_id}' not found")));
        }

        Ok(())
    }

    async fn list_departments(&self) -> AppResult<Vec<Department>> {
        let rows = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, name, short_code, description, is_active FROM departments ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list departments: {error}")))?;

        Ok(rows.into_iter().map(Department::from).collect())
    }

    async fn find_department(&self, department_id: DepartmentId) -> AppResult<Option<Department>> {
        let row = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, name, short_code, description, is_active FROM departments WHERE id = $1",
        )
        .bind(department_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find department: {error}")))?;

        Ok(row.map(Department::from))
    }

    async fn create_department(&self, input: DepartmentInput) -> AppResult<Department> {
        let row = sqlx::query_as::<_, DepartmentRow>(
            r#"
            INSERT INTO departments (name, short_code, description, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, short_code, description, is_active
            "#,
        )
        .bind(input.name.as_str())
        .bind(input.short_code.as_deref())
        .bind(input.description.as_deref())
        .bind(input.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            write_error(
                error,
                || format!("department '{}' already exists", input.name),
                "create department",
            )
        })?;

        Ok(Department::from(row))
    }

    async fn update_department(
        &self,
        department_id: DepartmentId,
        input: DepartmentInput,
    ) -> AppResult<Department> {
        let row = sqlx::query_as::<_, DepartmentRow>(
            r#"
            UPDATE departments
            SET name = $2, short_code = $3, description = $4, is_active = $5, updated_at = now()
            WHERE id = $1
            RETURNING id, name, short_code, description, is_active
            "#,
        )
        .bind(department_id.value())
        .bind(input.name.as_str())
        .bind(input.short_code.as_deref())
        .bind(input.description.as_deref())
        .bind(input.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            write_error(
                error,
                || format!("department '{}' already exists", input.name),
                "update department",
            )
        })?
        .ok_or_else(|| AppError::NotFound(format!("department '{department_id}' not found")))?;

        Ok(Department::from(row))
    }

    async fn delete_department(&self, department_id: DepartmentId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(department_id.value())
            .execute(&self.pool)
            .await
            .map_err(|error| write_error(error, String::new, "delete department"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "department '{department_id}' not found"
            )));
        }

        Ok(())
    }

    async fn list_designations(&self) -> AppResult<Vec<Designation>> {
        let rows = sqlx::query_as::<_, DesignationRow>(
            "SELECT id, name, short_code, description FROM designations ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list designations: {error}")))?;

        Ok(rows.into_iter().map(Designation::from).collect())
    }

    async fn find_designation(
        &self,
        designation_id: DesignationId,
    ) -> AppResult<Option<Designation>> {
        let row = sqlx::query_as::<_, DesignationRow>(
            "SELECT id, name, short_code, description FROM designations WHERE id = $1",
        )
        .bind(designation_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find designation: {error}")))?;

        Ok(row.map(Designation::from))
    }
}
