use qorehr_application::{
    JobPostingChanges, JobPostingFilter, ScreeningChanges, ScreeningFilter, ScreeningWithEmployee,
    UpsertOutcome,
};
use qorehr_core::{AppError, AppResult, PageRequest};
use qorehr_domain::{DepartmentId, EmployeeId, InterviewScreening, JobId, JobPosting, ScreeningStatus};

use super::types::{
    JobPostingListQuery, JobPostingRequest, JobPostingResponse, ScreeningListQuery,
    ScreeningRequest, ScreeningResponse, ScreeningUpsertResponse, ScreeningWithEmployeeResponse,
};
use crate::dto::common::{format_date, format_timestamp, parse_date};
use crate::dto::employees::EmployeeResponse;

impl From<JobPosting> for JobPostingResponse {
    fn from(posting: JobPosting) -> Self {
        let details = posting.details;
        Self {
            job_id: posting.job_id.value(),
            job_title: details.job_title,
            job_description: details.job_description,
            department_id: details.department_id.value(),
            status: details.status,
            priority: details.priority,
            assigned_to_employee_id: details.assigned_to_employee_id.map(EmployeeId::value),
            min_salary: details.min_salary,
            max_salary: details.max_salary,
            employment_type: details.employment_type,
            application_deadline: details.application_deadline.map(format_date),
            is_remote: details.is_remote,
            client_budget_hourly: details.client_budget_hourly,
            internal_budget_hourly: details.internal_budget_hourly,
            candidate_split_percentage: details.candidate_split_percentage,
            company_split_percentage: details.company_split_percentage,
            requirements: details.requirements,
            responsibilities: details.responsibilities,
            benefits: details.benefits,
            created_at: format_timestamp(posting.created_at),
            updated_at: format_timestamp(posting.updated_at),
        }
    }
}

impl TryFrom<JobPostingRequest> for JobPostingChanges {
    type Error = AppError;

    fn try_from(value: JobPostingRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            job_title: value.job_title,
            job_description: value.job_description,
            department_id: value.department_id.map(DepartmentId::new),
            status: value.status,
            priority: value.priority,
            assigned_to_employee_id: value.assigned_to_employee_id.map(EmployeeId::new),
            min_salary: value.min_salary,
            max_salary: value.max_salary,
            employment_type: value.employment_type,
            application_deadline: parse_date("application_deadline", value.application_deadline)?,
            is_remote: value.is_remote,
            client_budget_hourly: value.client_budget_hourly,
            internal_budget_hourly: value.internal_budget_hourly,
            candidate_split_percentage: value.candidate_split_percentage,
            company_split_percentage: value.company_split_percentage,
            requirements: value.requirements,
            responsibilities: value.responsibilities,
            benefits: value.benefits,
        })
    }
}

impl JobPostingListQuery {
    /// Requested page, with defaults applied.
    #[must_use]
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }

    /// Record filter described by the query string.
    #[must_use]
    pub fn filter(&self) -> JobPostingFilter {
        JobPostingFilter {
            status: self.status.clone(),
            department_id: self.department_id.map(DepartmentId::new),
            priority: self.priority.clone(),
            assigned_to_employee_id: self.assigned_to_employee_id.map(EmployeeId::new),
            is_remote: self.is_remote,
            employment_type: self.employment_type.clone(),
            search: self.search.clone(),
        }
    }
}

impl From<InterviewScreening> for ScreeningResponse {
    fn from(screening: InterviewScreening) -> Self {
        Self {
            id: screening.id.value(),
            call_id: screening.call_id,
            user_id: screening.user_id,
            join_url: screening.join_url,
            job_id: screening.job_id.map(JobId::value),
            status: screening.status.as_str().to_owned(),
            created: format_timestamp(screening.created_at),
            updated: format_timestamp(screening.updated_at),
        }
    }
}

impl From<ScreeningRequest> for ScreeningChanges {
    fn from(value: ScreeningRequest) -> Self {
        Self {
            call_id: value.call_id,
            user_id: value.user_id,
            join_url: value.join_url,
            job_id: value.job_id.map(JobId::new),
            status: value.status,
        }
    }
}

impl ScreeningUpsertResponse {
    /// Builds the response for an upsert result.
    #[must_use]
    pub fn new(screening: InterviewScreening, outcome: UpsertOutcome) -> Self {
        let outcome = match outcome {
            UpsertOutcome::Created => "created",
            UpsertOutcome::Updated => "updated",
        };

        Self {
            outcome,
            data: ScreeningResponse::from(screening),
        }
    }
}

impl From<ScreeningWithEmployee> for ScreeningWithEmployeeResponse {
    fn from(value: ScreeningWithEmployee) -> Self {
        Self {
            screening: ScreeningResponse::from(value.screening),
            employee: value.employee.map(EmployeeResponse::from),
        }
    }
}

impl ScreeningListQuery {
    /// Requested page, with defaults applied.
    #[must_use]
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }

    /// Record filter described by the query string. Unknown statuses are rejected.
    pub fn filter(&self) -> AppResult<ScreeningFilter> {
        let status = self
            .status
            .as_deref()
            .map(str::trim)
            .filter(|status| !status.is_empty())
            .map(str::parse::<ScreeningStatus>)
            .transpose()?;

        Ok(ScreeningFilter {
            call_id: self.call_id.clone(),
            user_id: self.user_id.clone(),
            job_id: self.job_id.map(JobId::new),
            status,
            search: self.search.clone(),
        })
    }
}
