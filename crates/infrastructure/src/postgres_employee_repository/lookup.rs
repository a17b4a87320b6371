use super::*;

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &EmployeeFilter) {
    builder.push(" WHERE TRUE");

    if let Some(is_active) = filter.is_active {
        builder.push(" AND is_active = ").push_bind(is_active);
    }
    if let Some(branch_id) = filter.branch_id {
        builder.push(" AND branch_id = ").push_bind(branch_id.value());
    } else if filter.without_branch {
        builder.push(" AND branch_id IS NULL");
    }
    if let Some(department_id) = filter.department_id {
        builder
            .push(" AND department_id = ")
            .push_bind(department_id.value());
    }
    if let Some(designation_id) = filter.designation_id {
        builder
            .push(" AND designation_id = ")
            .push_bind(designation_id.value());
    }
    if let Some(status) = &filter.employment_status {
        builder
            .push(" AND employment_status = ")
            .push_bind(status.clone());
    }
    if let Some(term) = filter.search.as_deref().map(str::trim)
        && !term.is_empty()
    {
        let pattern = format!("%{term}%");
        builder
            .push(" AND (first_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR COALESCE(last_name, '') ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR employee_code ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR COALESCE(email, '') ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

impl PostgresEmployeeRepository {
    pub(super) async fn list_employees_impl(
        &self,
        filter: &EmployeeFilter,
        page: PageRequest,
    ) -> AppResult<Page<Employee>> {
        let (limit, offset) = page_bounds(page)?;

        let mut count_query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM employees");
        push_filter(&mut count_query, filter);
        let total = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to count employees: {error}")))?;

        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees"
        ));
        push_filter(&mut query, filter);
        query
            .push(" ORDER BY first_name, last_name NULLS FIRST, id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = query
            .build_query_as::<EmployeeRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to list employees: {error}")))?;

        Ok(Page::new(employees_from_rows(rows)?, page_total(total), page))
    }

    pub(super) async fn find_employee_impl(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1"
        ))
        .bind(employee_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find employee: {error}")))?;

        row.map(Employee::try_from).transpose()
    }

    pub(super) async fn find_employee_by_code_impl(
        &self,
        employee_code: &str,
    ) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employee_code = $1 LIMIT 1"
        ))
        .bind(employee_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to find employee by code: {error}"))
        })?;

        row.map(Employee::try_from).transpose()
    }

    pub(super) async fn find_employee_by_email_impl(
        &self,
        email: &EmailAddress,
    ) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE LOWER(email) = LOWER($1) LIMIT 1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to find employee by email: {error}"))
        })?;

        row.map(Employee::try_from).transpose()
    }

    pub(super) async fn count_direct_reports_impl(&self, manager_id: EmployeeId) -> AppResult<u64> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM employees WHERE reporting_to = $1 AND is_active",
        )
        .bind(manager_id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to count direct reports: {error}")))?;

        Ok(page_total(total))
    }
}
