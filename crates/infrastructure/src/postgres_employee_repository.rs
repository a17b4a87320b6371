//! PostgreSQL-backed employee directory.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};

use qorehr_application::{EmployeeFilter, EmployeeRepository};
use qorehr_core::{AppError, AppResult, Page, PageRequest};
use qorehr_domain::{EmailAddress, Employee, EmployeeDetails, EmployeeId};

use crate::postgres_rows::{
    EMPLOYEE_COLUMNS, EmployeeRow, employees_from_rows, page_bounds, page_total, write_error,
};

/// PostgreSQL implementation of the employee repository port.
#[derive(Clone)]
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

mod lookup;
mod write;


#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn list_employees(
        &self,
        filter: &EmployeeFilter,
        page: PageRequest,
    ) -> AppResult<Page<Employee>> {
        self.list_employees_impl(filter, page).await
    }

    async fn find_employee(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        self.find_employee_impl(employee_id).await
    }

    async fn find_employee_by_code(&self, employee_code: &str) -> AppResult<Option<Employee>> {
        self.find_employee_by_code_impl(employee_code).await
    }

    async fn find_employee_by_email(&self, email: &EmailAddress) -> AppResult<Option<Employee>> {
        self.find_employee_by_email_impl(email).await
    }

    async fn create_employee(
        &self,
        details: EmployeeDetails,
        password_hash: String,
    ) -> AppResult<Employee> {
        self.create_employee_impl(details, password_hash).await
    }

    async fn update_employee(
        &self,
        employee_id: EmployeeId,
        details: EmployeeDetails,
        password_hash: Option<String>,
    ) -> AppResult<Employee> {
        self.update_employee_impl(employee_id, details, password_hash)
            .await
    }

    async fn deactivate_employee(
        &self,
        employee_id: EmployeeId,
        date_of_leaving: NaiveDate,
    ) -> AppResult<()> {
        self.deactivate_employee_impl(employee_id, date_of_leaving)
            .await
    }

    async fn count_direct_reports(&self, manager_id: EmployeeId) -> AppResult<u64> {
        self.count_direct_reports_impl(manager_id).await
    }
}
