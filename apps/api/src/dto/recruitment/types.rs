use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dto::employees::EmployeeResponse;

/// API representation of a job posting.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/job-posting-response.ts"
)]
pub struct JobPostingResponse {
    pub job_id: i64,
    pub job_title: String,
    pub job_description: String,
    pub department_id: i64,
    pub status: String,
    pub priority: String,
    pub assigned_to_employee_id: Option<i64>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub employment_type: String,
    pub application_deadline: Option<String>,
    pub is_remote: bool,
    pub client_budget_hourly: Option<f64>,
    pub internal_budget_hourly: Option<f64>,
    pub candidate_split_percentage: Option<i32>,
    pub company_split_percentage: Option<i32>,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub benefits: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Incoming payload for job posting create and update.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/job-posting-request.ts"
)]
pub struct JobPostingRequest {
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub department_id: Option<i64>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to_employee_id: Option<i64>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub employment_type: Option<String>,
    pub application_deadline: Option<String>,
    pub is_remote: Option<bool>,
    pub client_budget_hourly: Option<f64>,
    pub internal_budget_hourly: Option<f64>,
    pub candidate_split_percentage: Option<i32>,
    pub company_split_percentage: Option<i32>,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub benefits: Option<String>,
}

/// Query string accepted by the job posting list.
#[derive(Debug, Default, Deserialize)]
pub struct JobPostingListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<String>,
    pub department_id: Option<i64>,
    pub priority: Option<String>,
    pub assigned_to_employee_id: Option<i64>,
    pub is_remote: Option<bool>,
    pub employment_type: Option<String>,
    pub search: Option<String>,
}

/// API representation of an interview screening.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/screening-response.ts"
)]
pub struct ScreeningResponse {
    pub id: i64,
    pub call_id: Option<String>,
    pub user_id: Option<String>,
    pub join_url: Option<String>,
    pub job_id: Option<i64>,
    pub status: String,
    pub created: String,
    pub updated: String,
}

/// Incoming payload for screening create-or-update and update.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/screening-request.ts"
)]
pub struct ScreeningRequest {
    #[serde(alias = "callid")]
    pub call_id: Option<String>,
    #[serde(alias = "userid")]
    pub user_id: Option<String>,
    #[serde(alias = "joinurl")]
    pub join_url: Option<String>,
    pub job_id: Option<i64>,
    pub status: Option<String>,
}

/// Result of a screening create-or-update call.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/screening-upsert-response.ts"
)]
pub struct ScreeningUpsertResponse {
    pub outcome: &'static str,
    pub data: ScreeningResponse,
}

/// Screening together with the employee its user reference points at.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/screening-with-employee-response.ts"
)]
pub struct ScreeningWithEmployeeResponse {
    #[serde(flatten)]
    pub screening: ScreeningResponse,
    pub employee: Option<EmployeeResponse>,
}

/// Query string accepted by the screening list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ScreeningListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(alias = "callid")]
    pub call_id: Option<String>,
    #[serde(alias = "userid")]
    pub user_id: Option<String>,
    pub job_id: Option<i64>,
    pub status: Option<String>,
    pub search: Option<String>,
}
