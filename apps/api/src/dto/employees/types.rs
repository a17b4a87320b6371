use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dto::common::PaginationResponse;
use crate::dto::organization::BranchResponse;

/// API representation of an employee. The password hash is never exposed.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/employee-response.ts"
)]
pub struct EmployeeResponse {
    pub id: i64,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub branch_id: Option<i64>,
    pub department_id: Option<i64>,
    pub designation_id: Option<i64>,
    pub position: Option<String>,
    pub qualification: Option<String>,
    pub work_experience: Option<String>,
    pub hire_date: Option<String>,
    pub employment_status: Option<String>,
    pub contract_type: Option<String>,
    pub work_shift: Option<String>,
    pub reporting_to: Option<i64>,
    pub emergency_contact: Option<String>,
    pub marital_status: Option<String>,
    pub local_address: Option<String>,
    pub permanent_address: Option<String>,
    pub basic_salary: Option<f64>,
    pub notes: Option<String>,
    pub is_superadmin: bool,
    pub is_active: bool,
    pub date_of_leaving: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Incoming payload for employee create and update.
///
/// Updates only touch the fields that are present. Dates use `YYYY-MM-DD`.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/employee-request.ts"
)]
pub struct EmployeeRequest {
    #[serde(alias = "employee_id")]
    pub employee_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub branch_id: Option<i64>,
    pub department_id: Option<i64>,
    pub designation_id: Option<i64>,
    pub position: Option<String>,
    pub qualification: Option<String>,
    pub work_experience: Option<String>,
    pub hire_date: Option<String>,
    pub employment_status: Option<String>,
    pub contract_type: Option<String>,
    pub work_shift: Option<String>,
    pub reporting_to: Option<i64>,
    pub emergency_contact: Option<String>,
    pub marital_status: Option<String>,
    pub local_address: Option<String>,
    pub permanent_address: Option<String>,
    pub basic_salary: Option<f64>,
    pub notes: Option<String>,
    pub is_superadmin: Option<bool>,
}

/// Query string accepted by employee list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub is_active: Option<bool>,
    pub branch_id: Option<i64>,
    pub department_id: Option<i64>,
    pub designation_id: Option<i64>,
    pub employment_status: Option<String>,
    pub search: Option<String>,
}

/// Short branch header used when grouping employees.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/branch-summary-response.ts"
)]
pub struct BranchSummaryResponse {
    pub id: Option<i64>,
    pub name: String,
    pub code: String,
    pub location: String,
}

/// Employees of one branch, paged within the group.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/branch-group-response.ts"
)]
pub struct BranchGroupResponse {
    pub branch: BranchSummaryResponse,
    pub employees: Vec<EmployeeResponse>,
    pub employee_count: u64,
}

/// Employees of one requested branch.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/branch-employees-response.ts"
)]
pub struct BranchEmployeesResponse {
    pub branch: BranchResponse,
    pub data: Vec<EmployeeResponse>,
    pub pagination: PaginationResponse,
}
