use super::*;

impl EmployeeService {
    /// Creates an active employee. Code, first name and password are required.
    pub async fn create_employee(&self, changes: EmployeeChanges) -> AppResult<Employee> {
        let password = validation::required_password(changes.password.as_deref())?.to_owned();
        let details = validation::apply_changes(EmployeeDetails::default(), changes)?;
        validation::require_identity(&details)?;
        self.ensure_references(&details, None).await?;
        self.ensure_unique(&details, None).await?;

        let password_hash = self.password_hasher.hash_password(&password)?;
        let employee = self.employees.create_employee(details, password_hash).await?;
        info!(employee_id = %employee.id, "employee created");
        Ok(employee)
    }

    /// Applies a partial update to an employee.
    pub async fn update_employee(
        &self,
        employee_id: EmployeeId,
        changes: EmployeeChanges,
    ) -> AppResult<Employee> {
        let current = self.require_employee(employee_id).await?;
        let password_hash = match changes.password.as_deref() {
            Some(password) => Some(
                self.password_hasher
                    .hash_password(validation::required_password(Some(password))?)?,
            ),
            None => None,
        };

        let details = validation::apply_changes(current.details, changes)?;
        validation::require_identity(&details)?;
        self.ensure_references(&details, Some(employee_id)).await?;
        self.ensure_unique(&details, Some(employee_id)).await?;

        let employee = self
            .employees
            .update_employee(employee_id, details, password_hash)
            .await?;
        info!(employee_id = %employee.id, "employee updated");
        Ok(employee)
    }

    /// Deactivates an employee who has no active direct reports, leaving as of today.
    pub async fn deactivate_employee(&self, employee_id: EmployeeId) -> AppResult<()> {
        self.require_employee(employee_id).await?;

        let direct_reports = self.employees.count_direct_reports(employee_id).await?;
        if direct_reports > 0 {
            return Err(AppError::Conflict(format!(
                "employee '{employee_id}' still has {direct_reports} direct report(s); reassign them first"
            )));
        }

        self.employees
            .deactivate_employee(employee_id, Utc::now().date_naive())
            .await?;
        info!(employee_id = %employee_id, "employee deactivated");
        Ok(())
    }

    async fn ensure_references(
        &self,
        details: &EmployeeDetails,
        employee_id: Option<EmployeeId>,
    ) -> AppResult<()> {
        if let Some(branch_id) = details.branch_id
            && self.organization.find_branch(branch_id).await?.is_none()
        {
            return Err(AppError::Validation(format!(
                "branch '{branch_id}' does not exist"
            )));
        }

        if let Some(department_id) = details.department_id
            && self
                .organization
                .find_department(department_id)
                .await?
                .is_none()
        {
            return Err(AppError::Validation(format!(
                "department '{department_id}' does not exist"
            )));
        }

        if let Some(designation_id) = details.designation_id
            && self
                .organization
                .find_designation(designation_id)
                .await?
                .is_none()
        {
            return Err(AppError::Validation(format!(
                "designation '{designation_id}' does not exist"
            )));
        }

        if let Some(manager_id) = details.reporting_to {
            if Some(manager_id) == employee_id {
                return Err(AppError::Validation(
                    "an employee cannot report to themselves".to_owned(),
                ));
            }
            if self.employees.find_employee(manager_id).await?.is_none() {
                return Err(AppError::Validation(format!(
                    "reporting manager '{manager_id}' does not exist"
                )));
            }
        }

        Ok(())
    }

    async fn ensure_unique(
        &self,
        details: &EmployeeDetails,
        employee_id: Option<EmployeeId>,
    ) -> AppResult<()> {
        let is_other = |existing: &Employee| Some(existing.id) != employee_id;

        if let Some(existing) = self
            .employees
            .find_employee_by_code(&details.employee_code)
            .await?
            && is_other(&existing)
        {
            return Err(AppError::Conflict(format!(
                "employee code '{}' is already in use",
                details.employee_code
            )));
        }

        if let Some(email) = details.email.as_ref()
            && let Some(existing) = self.employees.find_employee_by_email(email).await?
            && is_other(&existing)
        {
            return Err(AppError::Conflict(format!(
                "email '{}' is already in use",
                email.as_str()
            )));
        }

        Ok(())
    }
}
