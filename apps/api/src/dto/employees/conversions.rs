use qorehr_application::{BranchEmployees, EmployeeChanges, EmployeeFilter};
use qorehr_core::{AppError, PageRequest};
use qorehr_domain::{BranchId, DepartmentId, DesignationId, Employee, EmployeeId};

use super::types::{
    BranchEmployeesResponse, BranchGroupResponse, BranchSummaryResponse, EmployeeListQuery,
    EmployeeRequest, EmployeeResponse,
};
use crate::dto::common::{PaginationResponse, format_date, format_timestamp, parse_date};
use crate::dto::organization::BranchResponse;

const UNASSIGNED_BRANCH_NAME: &str = "No Branch Assigned";

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        let full_name = employee.full_name();
        let details = employee.details;
        Self {
            id: employee.id.value(),
            employee_code: details.employee_code,
            first_name: details.first_name,
            last_name: details.last_name,
            full_name,
            email: details.email.map(|email| email.as_str().to_owned()),
            phone: details.phone,
            gender: details.gender,
            date_of_birth: details.date_of_birth.map(format_date),
            branch_id: details.branch_id.map(BranchId::value),
            department_id: details.department_id.map(DepartmentId::value),
            designation_id: details.designation_id.map(DesignationId::value),
            position: details.position,
            qualification: details.qualification,
            work_experience: details.work_experience,
            hire_date: details.hire_date.map(format_date),
            employment_status: details.employment_status,
            contract_type: details.contract_type,
            work_shift: details.work_shift,
            reporting_to: details.reporting_to.map(EmployeeId::value),
            emergency_contact: details.emergency_contact,
            marital_status: details.marital_status,
            local_address: details.local_address,
            permanent_address: details.permanent_address,
            basic_salary: details.basic_salary,
            notes: details.notes,
            is_superadmin: details.is_superadmin,
            is_active: employee.is_active,
            date_of_leaving: employee.date_of_leaving.map(format_date),
            created_at: format_timestamp(employee.created_at),
            updated_at: format_timestamp(employee.updated_at),
        }
    }
}

impl TryFrom<EmployeeRequest> for EmployeeChanges {
    type Error = AppError;

    fn try_from(value: EmployeeRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            employee_code: value.employee_code,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            gender: value.gender,
            date_of_birth: parse_date("date_of_birth", value.date_of_birth)?,
            branch_id: value.branch_id.map(BranchId::new),
            department_id: value.department_id.map(DepartmentId::new),
            designation_id: value.designation_id.map(DesignationId::new),
            position: value.position,
            qualification: value.qualification,
            work_experience: value.work_experience,
            hire_date: parse_date("hire_date", value.hire_date)?,
            employment_status: value.employment_status,
            contract_type: value.contract_type,
            work_shift: value.work_shift,
            reporting_to: value.reporting_to.map(EmployeeId::new),
            emergency_contact: value.emergency_contact,
            marital_status: value.marital_status,
            local_address: value.local_address,
            permanent_address: value.permanent_address,
            basic_salary: value.basic_salary,
            notes: value.notes,
            is_superadmin: value.is_superadmin,
            password: value.password,
        })
    }
}

impl EmployeeListQuery {
    /// Requested page, with defaults applied.
    #[must_use]
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }

    /// Record filter described by the query string.
    #[must_use]
    pub fn filter(&self) -> EmployeeFilter {
        EmployeeFilter {
            is_active: self.is_active,
            branch_id: self.branch_id.map(BranchId::new),
            without_branch: false,
            department_id: self.department_id.map(DepartmentId::new),
            designation_id: self.designation_id.map(DesignationId::new),
            employment_status: self.employment_status.clone(),
            search: self.search.clone(),
        }
    }
}

impl From<BranchEmployees> for BranchGroupResponse {
    fn from(group: BranchEmployees) -> Self {
        let branch = match group.branch {
            Some(branch) => BranchSummaryResponse {
                id: Some(branch.id.value()),
                name: branch.name,
                code: branch.code.unwrap_or_default(),
                location: branch.city.unwrap_or_default(),
            },
            None => BranchSummaryResponse {
                id: None,
                name: UNASSIGNED_BRANCH_NAME.to_owned(),
                code: "N/A".to_owned(),
                location: String::new(),
            },
        };

        Self {
            branch,
            employee_count: group.employees.total,
            employees: group
                .employees
                .items
                .into_iter()
                .map(EmployeeResponse::from)
                .collect(),
        }
    }
}

impl BranchEmployeesResponse {
    /// Builds the response for a branch that is known to exist.
    pub fn from_group(group: BranchEmployees) -> Result<Self, AppError> {
        let branch = group.branch.ok_or_else(|| {
            AppError::Internal("branch employee listing lost its branch".to_owned())
        })?;
        let pagination = PaginationResponse::from(&group.employees);

        Ok(Self {
            branch: BranchResponse::from(branch),
            data: group
                .employees
                .items
                .into_iter()
                .map(EmployeeResponse::from)
                .collect(),
            pagination,
        })
    }
}
