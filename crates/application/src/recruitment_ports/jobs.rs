use async_trait::async_trait;
use qorehr_core::{AppResult, Page, PageRequest};
use qorehr_domain::{DepartmentId, EmployeeId, JobId, JobPosting, JobPostingDetails};

/// Optional filters for job posting listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPostingFilter {
    /// Exact status label.
    pub status: Option<String>,
    /// Owning department.
    pub department_id: Option<DepartmentId>,
    /// Exact priority label.
    pub priority: Option<String>,
    /// Responsible recruiter.
    pub assigned_to_employee_id: Option<EmployeeId>,
    /// Remote flag.
    pub is_remote: Option<bool>,
    /// Exact employment type.
    pub employment_type: Option<String>,
    /// Case-insensitive match over title and description.
    pub search: Option<String>,
}

impl JobPostingFilter {
    /// Evaluates the filter against one posting.
    #[must_use]
    pub fn matches(&self, posting: &JobPosting) -> bool {
        let details = &posting.details;
        self.status
            .as_deref()
            .is_none_or(|status| details.status == status)
            && self
                .department_id
                .is_none_or(|department_id| details.department_id == department_id)
            && self
                .priority
                .as_deref()
                .is_none_or(|priority| details.priority == priority)
            && self.assigned_to_employee_id.is_none_or(|employee_id| {
                details.assigned_to_employee_id == Some(employee_id)
            })
            && self
                .is_remote
                .is_none_or(|is_remote| details.is_remote == is_remote)
            && self
                .employment_type
                .as_deref()
                .is_none_or(|employment_type| details.employment_type == employment_type)
            && self
                .search
                .as_deref()
                .is_none_or(|term| posting.matches_search(term))
    }
}

/// Persistence port for job postings.
#[async_trait]
pub trait JobPostingRepository: Send + Sync {
    /// Lists matching postings, newest first.
    async fn list_job_postings(
        &self,
        filter: &JobPostingFilter,
        page: PageRequest,
    ) -> AppResult<Page<JobPosting>>;

    /// Loads one posting.
    async fn find_job_posting(&self, job_id: JobId) -> AppResult<Option<JobPosting>>;

    /// Inserts a posting with the next job id.
    async fn create_job_posting(&self, details: JobPostingDetails) -> AppResult<JobPosting>;

    /// Replaces a posting's attributes.
    async fn update_job_posting(
        &self,
        job_id: JobId,
        details: JobPostingDetails,
    ) -> AppResult<JobPosting>;

    /// Removes a posting permanently.
    async fn delete_job_posting(&self, job_id: JobId) -> AppResult<()>;
}
