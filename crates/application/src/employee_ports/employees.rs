use async_trait::async_trait;
use chrono::NaiveDate;
use qorehr_core::{AppResult, Page, PageRequest};
use qorehr_domain::{
    BranchId, DepartmentId, DesignationId, EmailAddress, Employee, EmployeeDetails, EmployeeId,
};

/// Optional filters for employee listings. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Active flag.
    pub is_active: Option<bool>,
    /// Home branch.
    pub branch_id: Option<BranchId>,
    /// Only employees without a home branch. Ignored when `branch_id` is set.
    pub without_branch: bool,
    /// Department membership.
    pub department_id: Option<DepartmentId>,
    /// Designation.
    pub designation_id: Option<DesignationId>,
    /// Exact employment status label.
    pub employment_status: Option<String>,
    /// Case-insensitive match over names, employee code and email.
    pub search: Option<String>,
}

impl EmployeeFilter {
    /// Returns a copy restricted to one branch, or to employees without one.
    #[must_use]
    pub fn for_branch(&self, branch_id: Option<BranchId>) -> Self {
        Self {
            branch_id,
            without_branch: branch_id.is_none(),
            ..self.clone()
        }
    }

    /// Evaluates the filter against one employee.
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        let details = &employee.details;
        let branch_matches = match (self.branch_id, self.without_branch) {
            (Some(branch_id), _) => details.branch_id == Some(branch_id),
            (None, true) => details.branch_id.is_none(),
            (None, false) => true,
        };

        branch_matches
            && self
                .is_active
                .is_none_or(|is_active| employee.is_active == is_active)
            && self
                .department_id
                .is_none_or(|department_id| details.department_id == Some(department_id))
            && self
                .designation_id
                .is_none_or(|designation_id| details.designation_id == Some(designation_id))
            && self.employment_status.as_deref().is_none_or(|status| {
                details.employment_status.as_deref() == Some(status)
            })
            && self
                .search
                .as_deref()
                .is_none_or(|term| employee.matches_search(term))
    }
}

/// Hashing port for employee passwords.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password.
    fn hash_password(&self, password: &str) -> AppResult<String>;
}

/// Persistence port for employee records.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Lists matching employees ordered by first name, then last name.
    async fn list_employees(
        &self,
        filter: &EmployeeFilter,
        page: PageRequest,
    ) -> AppResult<Page<Employee>>;

    /// Loads one employee.
    async fn find_employee(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>>;

    /// Loads an employee by human-facing code.
    async fn find_employee_by_code(&self, employee_code: &str) -> AppResult<Option<Employee>>;

    /// Loads an employee by email.
    async fn find_employee_by_email(&self, email: &EmailAddress) -> AppResult<Option<Employee>>;

    /// Inserts an active employee with a hashed password.
    async fn create_employee(
        &self,
        details: EmployeeDetails,
        password_hash: String,
    ) -> AppResult<Employee>;

    /// Replaces editable attributes, and the password hash when provided.
    async fn update_employee(
        &self,
        employee_id: EmployeeId,
        details: EmployeeDetails,
        password_hash: Option<String>,
    ) -> AppResult<Employee>;

    /// Marks an employee inactive as of the given leaving date.
    async fn deactivate_employee(
        &self,
        employee_id: EmployeeId,
        date_of_leaving: NaiveDate,
    ) -> AppResult<()>;

    /// Counts active employees reporting to the given manager.
    async fn count_direct_reports(&self, manager_id: EmployeeId) -> AppResult<u64>;
}
