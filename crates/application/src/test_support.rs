//! In-memory fakes shared by service tests.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;

use qorehr_core::{AppError, AppResult, Page, PageRequest};
use qorehr_domain::{
    Branch, BranchId, Department, DepartmentId, Designation, DesignationId, EmailAddress,
    Employee, EmployeeDetails, EmployeeId,
};

use crate::employee_ports::{
    BranchInput, DepartmentInput, EmployeeFilter, EmployeeRepository, OrganizationRepository,
    PasswordHasher,
};

#[derive(Default)]
pub(crate) struct FakeEmployees {
    pub(crate) employees: Mutex<Vec<Employee>>,
    pub(crate) hashes: Mutex<Vec<(EmployeeId, String)>>,
}

#[async_trait]
impl EmployeeRepository for FakeEmployees {
    async fn list_employees(
        &self,
        filter: &EmployeeFilter,
        page: PageRequest,
    ) -> AppResult<Page<Employee>> {
        let mut matching: Vec<Employee> = self
            .employees
            .lock()
            .await
            .iter()
            .filter(|employee| filter.matches(employee))
            .cloned()
            .collect();
        matching.sort_by(|left, right| left.details.first_name.cmp(&right.details.first_name));
        let total = matching.len() as u64;
        Ok(Page::new(page.slice(&matching), total, page))
    }

    async fn find_employee(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self
            .employees
            .lock()
            .await
            .iter()
            .find(|employee| employee.id == employee_id)
            .cloned())
    }

    async fn find_employee_by_code(&self, employee_code: &str) -> AppResult<Option<Employee>> {
        Ok(self
            .employees
            .lock()
            .await
            .iter()
            .find(|employee| employee.details.employee_code == employee_code)
            .cloned())
    }

    async fn find_employee_by_email(&self, email: &EmailAddress) -> AppResult<Option<Employee>> {
        Ok(self
            .employees
            .lock()
            .await
            .iter()
            .find(|employee| employee.details.email.as_ref() == Some(email))
            .cloned())
    }

    async fn create_employee(
        &self,
        details: EmployeeDetails,
        password_hash: String,
    ) -> AppResult<Employee> {
        let mut employees = self.employees.lock().await;
        let employee = stored(employees.len() as i64 + 1, details);
        employees.push(employee.clone());
        self.hashes.lock().await.push((employee.id, password_hash));
        Ok(employee)
    }

    async fn update_employee(
        &self,
        employee_id: EmployeeId,
        details: EmployeeDetails,
        password_hash: Option<String>,
    ) -> AppResult<Employee> {
        let mut employees = self.employees.lock().await;
        let employee = employees
            .iter_mut()
            .find(|employee| employee.id == employee_id)
            .ok_or_else(|| AppError::NotFound("missing".to_owned()))?;
        employee.details = details;
        if let Some(password_hash) = password_hash {
            self.hashes.lock().await.push((employee_id, password_hash));
        }
        Ok(employee.clone())
    }

    async fn deactivate_employee(
        &self,
        employee_id: EmployeeId,
        date_of_leaving: NaiveDate,
    ) -> AppResult<()> {
        let mut employees = self.employees.lock().await;
        if let Some(employee) = employees
            .iter_mut()
            .find(|employee| employee.id == employee_id)
        {
            employee.is_active = false;
            employee.date_of_leaving = Some(date_of_leaving);
        }
        Ok(())
    }

    async fn count_direct_reports(&self, manager_id: EmployeeId) -> AppResult<u64> {
        Ok(self
            .employees
            .lock()
            .await
            .iter()
            .filter(|employee| employee.is_active && employee.details.reporting_to == Some(manager_id))
            .count() as u64)
    }
}

#[derive(Default)]
pub(crate) struct FakeOrganization {
    pub(crate) branches: Mutex<Vec<Branch>>,
    pub(crate) departments: Mutex<Vec<Department>>,
}

pub(crate) fn to_branch(id: BranchId, input: BranchInput) -> Branch {
    Branch {
        id,
        name: input.name,
        code: input.code,
        address: input.address,
        city: input.city,
        state: input.state,
        country: input.country,
        phone: input.phone,
        email: input.email,
        is_active: input.is_active,
    }
}

#[async_trait]
impl OrganizationRepository for FakeOrganization {
    async fn list_branches(&self) -> AppResult<Vec<Branch>> {
        Ok(self.branches.lock().await.clone())
    }

    async fn find_branch(&self, branch_id: BranchId) -> AppResult<Option<Branch>> {
        Ok(self
            .branches
            .lock()
            .await
            .iter()
            .find(|branch| branch.id == branch_id)
            .cloned())
    }

    async fn create_branch(&self, input: BranchInput) -> AppResult<Branch> {
        let mut branches = self.branches.lock().await;
        if input.code.is_some() && branches.iter().any(|branch| branch.code == input.code) {
            return Err(AppError::Conflict("branch code already exists".to_owned()));
        }
        let branch = to_branch(BranchId::new(branches.len() as i64 + 1), input);
        branches.push(branch.clone());
        Ok(branch)
    }

    async fn update_branch(&self, branch_id: BranchId, input: BranchInput) -> AppResult<Branch> {
        let mut branches = self.branches.lock().await;
        let slot = branches
            .iter_mut()
            .find(|branch| branch.id == branch_id)
            .ok_or_else(|| AppError::NotFound("branch".to_owned()))?;
        *slot = to_branch(branch_id, input);
        Ok(slot.clone())
    }

    async fn delete_branch(&self, branch_id: BranchId) -> AppResult<()> {
        self.branches
            .lock()
            .await
            .retain(|branch| branch.id != branch_id);
        Ok(())
    }

    async fn list_departments(&self) -> AppResult<Vec<Department>> {
        Ok(self.departments.lock().await.clone())
    }

    async fn find_department(&self, department_id: DepartmentId) -> AppResult<Option<Department>> {
        Ok(self
            .departments
            .lock()
            .await
            .iter()
            .find(|department| department.id == department_id)
            .cloned())
    }

    async fn create_department(&self, input: DepartmentInput) -> AppResult<Department> {
        let mut departments = self.departments.lock().await;
        let department = Department {
            id: DepartmentId::new(departments.len() as i64 + 1),
            name: input.name,
            short_code: input.short_code,
            description: input.description,
            is_active: input.is_active,
        };
        departments.push(department.clone());
        Ok(department)
    }

    async fn update_department(
        &self,
        department_id: DepartmentId,
        input: DepartmentInput,
    ) -> AppResult<Department> {
        let mut departments = self.departments.lock().await;
        let slot = departments
            .iter_mut()
            .find(|department| department.id == department_id)
            .ok_or_else(|| AppError::NotFound("department".to_owned()))?;
        slot.name = input.name;
        slot.short_code = input.short_code;
        slot.description = input.description;
        slot.is_active = input.is_active;
        Ok(slot.clone())
    }

    async fn delete_department(&self, department_id: DepartmentId) -> AppResult<()> {
        self.departments
            .lock()
            .await
            .retain(|department| department.id != department_id);
        Ok(())
    }

    async fn list_designations(&self) -> AppResult<Vec<Designation>> {
        Ok(Vec::new())
    }

    async fn find_designation(
        &self,
        _designation_id: DesignationId,
    ) -> AppResult<Option<Designation>> {
        Ok(None)
    }
}

pub(crate) struct PrefixHasher;

impl PasswordHasher for PrefixHasher {
    fn hash_password(&self, password: &str) -> AppResult<String> {
        Ok(format!("hashed:{password}"))
    }
}

pub(crate) fn stored(id: i64, details: EmployeeDetails) -> Employee {
    let now = Utc::now();
    Employee {
        id: EmployeeId::new(id),
        details,
        is_active: true,
        date_of_leaving: None,
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn employee_details(code: &str, first_name: &str) -> EmployeeDetails {
    EmployeeDetails {
        employee_code: code.to_owned(),
        first_name: first_name.to_owned(),
        ..EmployeeDetails::default()
    }
}

pub(crate) fn branch(id: i64, name: &str) -> Branch {
    to_branch(
        BranchId::new(id),
        BranchInput {
            name: name.to_owned(),
            code: None,
            address: None,
            city: None,
            state: None,
            country: None,
            phone: None,
            email: None,
            is_active: true,
        },
    )
}
