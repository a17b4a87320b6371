//! Job postings and AI interview screening records.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use qorehr_core::AppError;
use serde::{Deserialize, Serialize};

use crate::{DepartmentId, EmployeeId, JobId, ScreeningId};

/// Status assigned to new job postings.
pub const DEFAULT_JOB_STATUS: &str = "Draft";

/// Priority assigned to new job postings.
pub const DEFAULT_JOB_PRIORITY: &str = "Medium";

/// Editable job posting attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPostingDetails {
    /// Position title.
    pub job_title: String,
    /// Position description.
    pub job_description: String,
    /// Owning department.
    pub department_id: DepartmentId,
    /// Workflow label such as `Draft`, `Published` or `Filled`.
    pub status: String,
    /// Hiring priority label.
    pub priority: String,
    /// Recruiter responsible for the posting.
    pub assigned_to_employee_id: Option<EmployeeId>,
    /// Lower bound of the salary range.
    pub min_salary: Option<f64>,
    /// Upper bound of the salary range.
    pub max_salary: Option<f64>,
    /// Employment type such as `Full-time` or `Contract`.
    pub employment_type: String,
    /// Last day applications are accepted.
    pub application_deadline: Option<NaiveDate>,
    /// Remote-friendly position.
    pub is_remote: bool,
    /// Hourly rate billed to the client.
    pub client_budget_hourly: Option<f64>,
    /// Hourly internal cost budget.
    pub internal_budget_hourly: Option<f64>,
    /// Share of margin paid to the candidate.
    pub candidate_split_percentage: Option<i32>,
    /// Share of margin kept by the company.
    pub company_split_percentage: Option<i32>,
    /// Candidate requirements.
    pub requirements: Option<String>,
    /// Role responsibilities.
    pub responsibilities: Option<String>,
    /// Offered benefits.
    pub benefits: Option<String>,
}

/// Persisted job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Stable identifier.
    pub job_id: JobId,
    /// Editable attributes.
    pub details: JobPostingDetails,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl JobPosting {
    /// Case-insensitive match over title and description.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.details.job_title.to_lowercase().contains(term.as_str())
            || self
                .details
                .job_description
                .to_lowercase()
                .contains(term.as_str())
    }
}

/// Lifecycle of an interview screening call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningStatus {
    /// Scheduled, not started.
    #[default]
    Pending,
    /// Call in progress.
    InProgress,
    /// Call finished.
    Completed,
    /// Call cancelled.
    Cancelled,
    /// Candidate did not join.
    NoShow,
}

impl ScreeningStatus {
    /// Returns the storage string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
        }
    }

    /// Returns every status in lifecycle order.
    #[must_use]
    pub fn all() -> [Self; 5] {
        [
            Self::Pending,
            Self::InProgress,
            Self::Completed,
            Self::Cancelled,
            Self::NoShow,
        ]
    }
}

impl FromStr for ScreeningStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| {
                let allowed = Self::all().map(|status| status.as_str()).join(", ");
                AppError::Validation(format!(
                    "invalid status '{value}'. Must be one of: {allowed}"
                ))
            })
    }
}

/// Interview screening call tracked against a candidate and a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewScreening {
    /// Stable identifier.
    pub id: ScreeningId,
    /// Upstream call identifier.
    pub call_id: Option<String>,
    /// Candidate or employee reference; numeric values point at an employee.
    pub user_id: Option<String>,
    /// Link used to join the call.
    pub join_url: Option<String>,
    /// Job the screening belongs to.
    pub job_id: Option<JobId>,
    /// Lifecycle status.
    pub status: ScreeningStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl InterviewScreening {
    /// Resolves `user_id` to an employee identifier when it is numeric.
    #[must_use]
    pub fn employee_id(&self) -> Option<EmployeeId> {
        self.user_id
            .as_deref()
            .and_then(|value| value.parse::<EmployeeId>().ok())
    }

    /// Case-insensitive match over call id, user id and join url.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        [&self.call_id, &self.user_id, &self.join_url]
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(term.as_str()))
    }
}
