//! Employee directory and lifecycle.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use qorehr_core::{AppError, AppResult, Page, PageRequest};
use qorehr_domain::{
    Branch, BranchId, DepartmentId, DesignationId, EmailAddress, Employee, EmployeeDetails,
    EmployeeId,
};
use tracing::info;

use crate::employee_ports::{
    EmployeeFilter, EmployeeRepository, OrganizationRepository, PasswordHasher,
};

mod directory;
mod lifecycle;
mod validation;

/// Partial employee attributes. `None` leaves the current value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeChanges {
    /// Human-facing employee code.
    pub employee_code: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Work email. An empty string clears it.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Gender.
    pub gender: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Home branch.
    pub branch_id: Option<BranchId>,
    /// Department.
    pub department_id: Option<DepartmentId>,
    /// Designation.
    pub designation_id: Option<DesignationId>,
    /// Position title.
    pub position: Option<String>,
    /// Qualification.
    pub qualification: Option<String>,
    /// Work experience.
    pub work_experience: Option<String>,
    /// Hire date.
    pub hire_date: Option<NaiveDate>,
    /// Employment status.
    pub employment_status: Option<String>,
    /// Contract type.
    pub contract_type: Option<String>,
    /// Work shift.
    pub work_shift: Option<String>,
    /// Manager.
    pub reporting_to: Option<EmployeeId>,
    /// Emergency contact.
    pub emergency_contact: Option<String>,
    /// Marital status.
    pub marital_status: Option<String>,
    /// Local address.
    pub local_address: Option<String>,
    /// Permanent address.
    pub permanent_address: Option<String>,
    /// Monthly base salary.
    pub basic_salary: Option<f64>,
    /// HR notes.
    pub notes: Option<String>,
    /// Superadmin flag.
    pub is_superadmin: Option<bool>,
    /// Plaintext password. Required on create.
    pub password: Option<String>,
}

/// Employees grouped under one branch, or under no branch at all.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchEmployees {
    /// Branch, `None` for employees without a home branch.
    pub branch: Option<Branch>,
    /// The requested page of this group's employees.
    pub employees: Page<Employee>,
}

/// Branch-grouped listing.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeesByBranch {
    /// Non-empty groups, branches by name first, unassigned last.
    pub groups: Vec<BranchEmployees>,
    /// Sum of matching employees across groups.
    pub total: u64,
}

/// Application service for employee records.
#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
    organization: Arc<dyn OrganizationRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl EmployeeService {
    /// Creates a new employee service.
    #[must_use]
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        organization: Arc<dyn OrganizationRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            employees,
            organization,
            password_hasher,
        }
    }

    async fn require_employee(&self, employee_id: EmployeeId) -> AppResult<Employee> {
        self.employees
            .find_employee(employee_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("employee '{employee_id}' not found")))
    }
}
