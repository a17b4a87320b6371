use super::*;

fn duplicate_identity(details: &EmployeeDetails) -> String {
    format!(
        "employee code '{}' or email is already in use",
        details.employee_code
    )
}

impl PostgresEmployeeRepository {
    pub(super) async fn create_employee_impl(
        &self,
        details: EmployeeDetails,
        password_hash: String,
    ) -> AppResult<Employee> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            r#"
            INSERT INTO employees (
                employee_code, first_name, last_name, email, password_hash, phone, gender,
                date_of_birth, branch_id, department_id, designation_id, position,
                qualification, work_experience, hire_date, employment_status, contract_type,
                work_shift, reporting_to, emergency_contact, marital_status, local_address,
                permanent_address, basic_salary, notes, is_superadmin
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                $18, $19, $20, $21, $22, $23, $24, $25, $26
            )
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        ))
        .bind(details.employee_code.as_str())
        .bind(details.first_name.as_str())
        .bind(details.last_name.as_deref())
        .bind(details.email.as_ref().map(EmailAddress::as_str))
        .bind(password_hash)
        .bind(details.phone.as_deref())
        .bind(details.gender.as_deref())
        .bind(details.date_of_birth)
        .bind(details.branch_id.map(|id| id.value()))
        .bind(details.department_id.map(|id| id.value()))
        .bind(details.designation_id.map(|id| id.value()))
        .bind(details.position.as_deref())
        .bind(details.qualification.as_deref())
        .bind(details.work_experience.as_deref())
        .bind(details.hire_date)
        .bind(details.employment_status.as_deref())
        .bind(details.contract_type.as_deref())
        .bind(details.work_shift.as_deref())
        .bind(details.reporting_to.map(|id| id.value()))
        .bind(details.emergency_contact.as_deref())
        .bind(details.marital_status.as_deref())
        .bind(details.local_address.as_deref())
        .bind(details.permanent_address.as_deref())
        .bind(details.basic_salary)
        .bind(details.notes.as_deref())
        .bind(details.is_superadmin)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| write_error(error, || duplicate_identity(&details), "create employee"))?;

        Employee::try_from(row)
    }

    pub(super) async fn update_employee_impl(
        &self,
        employee_id: EmployeeId,
        details: EmployeeDetails,
        password_hash: Option<String>,
    ) -> AppResult<Employee> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            r#"
            UPDATE employees
            SET employee_code = $2, first_name = $3, last_name = $4, email = $5,
                password_hash = COALESCE($6, password_hash), phone = $7, gender = $8,
                date_of_birth = $9, branch_id = $10, department_id = $11,
                designation_id = $12, position = $13, qualification = $14,
                work_experience = $15, hire_date = $16, employment_status = $17,
                contract_type = $18, work_shift = $19, reporting_to = $20,
                emergency_contact = $21, marital_status = $22, local_address = $23,
                permanent_address = $24, basic_salary = $25, notes = $26,
                is_superadmin = $27, updated_at = now()
            WHERE id = $1
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        ))
        .bind(employee_id.value())
        .bind(details.employee_code.as_str())
        .bind(details.first_name.as_str())
        .bind(details.last_name.as_deref())
        .bind(details.email.as_ref().map(EmailAddress::as_str))
        .bind(password_hash)
        .bind(details.phone.as_deref())
        .bind(details.gender.as_deref())
        .bind(details.date_of_birth)
        .bind(details.branch_id.map(|id| id.value()))
        .bind(details.department_id.map(|id| id.value()))
        .bind(details.designation_id.map(|id| id.value()))
        .bind(details.position.as_deref())
        .bind(details.qualification.as_deref())
        .bind(details.work_experience.as_deref())
        .bind(details.hire_date)
        .bind(details.employment_status.as_deref())
        .bind(details.contract_type.as_deref())
        .bind(details.work_shift.as_deref())
        .bind(details.reporting_to.map(|id| id.value()))
        .bind(details.emergency_contact.as_deref())
        .bind(details.marital_status.as_deref())
        .bind(details.local_address.as_deref())
        .bind(details.permanent_address.as_deref())
        .bind(details.basic_salary)
        .bind(details.notes.as_deref())
        .bind(details.is_superadmin)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| write_error(error, || duplicate_identity(&details), "update employee"))?
        .ok_or_else(|| AppError::NotFound(format!("employee '{employee_id}' not found")))?;

        Employee::try_from(row)
    }

    pub(super) async fn deactivate_employee_impl(
        &self,
        employee_id: EmployeeId,
        date_of_leaving: NaiveDate,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET is_active = FALSE, date_of_leaving = $2, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(employee_id.value())
        .bind(date_of_leaving)
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to deactivate employee: {error}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "employee '{employee_id}' not found"
            )));
        }

        Ok(())
    }
}
