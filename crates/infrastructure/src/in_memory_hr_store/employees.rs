use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use qorehr_application::{EmployeeFilter, EmployeeRepository};
use qorehr_core::{Page, PageRequest};
use qorehr_domain::{EmailAddress, EmployeeDetails};

use super::*;

impl HrState {
    fn ensure_unique_identity(
        &self,
        details: &EmployeeDetails,
        except: Option<EmployeeId>,
    ) -> AppResult<()> {
        let clash = self.employees.values().any(|employee| {
            Some(employee.id) != except
                && (employee.details.employee_code == details.employee_code
                    || (details.email.is_some() && employee.details.email == details.email))
        });

        ensure(!clash, || {
            format!(
                "employee code '{}' or email is already in use",
                details.employee_code
            )
        })
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryHrStore {
    async fn list_employees(
        &self,
        filter: &EmployeeFilter,
        page: PageRequest,
    ) -> AppResult<Page<Employee>> {
        let state = self.state.read().await;
        let mut matching: Vec<Employee> = state
            .employees
            .values()
            .filter(|employee| filter.matches(employee))
            .cloned()
            .collect();

        matching.sort_by(|left, right| {
            (&left.details.first_name, &left.details.last_name, left.id).cmp(&(
                &right.details.first_name,
                &right.details.last_name,
                right.id,
            ))
        });

        let total = matching.len() as u64;
        Ok(Page::new(page.slice(&matching), total, page))
    }

    async fn find_employee(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self.state.read().await.employees.get(&employee_id).cloned())
    }

    async fn find_employee_by_code(&self, employee_code: &str) -> AppResult<Option<Employee>> {
        let state = self.state.read().await;
        Ok(state
            .employees
            .values()
            .find(|employee| employee.details.employee_code == employee_code)
            .cloned())
    }

    async fn find_employee_by_email(&self, email: &EmailAddress) -> AppResult<Option<Employee>> {
        let state = self.state.read().await;
        Ok(state
            .employees
            .values()
            .find(|employee| employee.details.email.as_ref() == Some(email))
            .cloned())
    }

    async fn create_employee(
        &self,
        details: EmployeeDetails,
        password_hash: String,
    ) -> AppResult<Employee> {
        let mut state = self.state.write().await;
        state.ensure_unique_identity(&details, None)?;

        let id = EmployeeId::new(state.allocate("employees"));
        let now = Utc::now();
        let employee = Employee {
            id,
            details,
            is_active: true,
            date_of_leaving: None,
            created_at: now,
            updated_at: now,
        };

        state.password_hashes.insert(id, password_hash);
        state.employees.insert(id, employee.clone());
        Ok(employee)
    }

    async fn update_employee(
        &self,
        employee_id: EmployeeId,
        details: EmployeeDetails,
        password_hash: Option<String>,
    ) -> AppResult<Employee> {
        let mut state = self.state.write().await;
        state.ensure_unique_identity(&details, Some(employee_id))?;

        let employee = state
            .employees
            .get_mut(&employee_id)
            .ok_or_else(|| not_found("employee", employee_id))?;
        employee.details = details;
        employee.updated_at = Utc::now();
        let updated = employee.clone();

        if let Some(password_hash) = password_hash {
            state.password_hashes.insert(employee_id, password_hash);
        }

        Ok(updated)
    }

    async fn deactivate_employee(
        &self,
        employee_id: EmployeeId,
        date_of_leaving: NaiveDate,
    ) -> AppResult<()> {
        let mut state = self.state.write().await;
        let employee = state
            .employees
            .get_mut(&employee_id)
            .ok_or_else(|| not_found("employee", employee_id))?;

        employee.is_active = false;
        employee.date_of_leaving = Some(date_of_leaving);
        employee.updated_at = Utc::now();
        Ok(())
    }

    async fn count_direct_reports(&self, manager_id: EmployeeId) -> AppResult<u64> {
        let state = self.state.read().await;
        Ok(state
            .employees
            .values()
            .filter(|employee| employee.is_active)
            .filter(|employee| employee.details.reporting_to == Some(manager_id))
            .count() as u64)
    }
}
