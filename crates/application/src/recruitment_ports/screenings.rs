use async_trait::async_trait;
use qorehr_core::{AppResult, Page, PageRequest};
use qorehr_domain::{InterviewScreening, JobId, ScreeningId, ScreeningStatus};

/// Optional filters for screening listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreeningFilter {
    /// Exact upstream call id.
    pub call_id: Option<String>,
    /// Exact user reference.
    pub user_id: Option<String>,
    /// Job the screening belongs to.
    pub job_id: Option<JobId>,
    /// Lifecycle status.
    pub status: Option<ScreeningStatus>,
    /// Case-insensitive match over call id, user id and join url.
    pub search: Option<String>,
}

impl ScreeningFilter {
    /// Evaluates the filter against one screening.
    #[must_use]
    pub fn matches(&self, screening: &InterviewScreening) -> bool {
        self.call_id
            .as_deref()
            .is_none_or(|call_id| screening.call_id.as_deref() == Some(call_id))
            && self
                .user_id
                .as_deref()
                .is_none_or(|user_id| screening.user_id.as_deref() == Some(user_id))
            && self
                .job_id
                .is_none_or(|job_id| screening.job_id == Some(job_id))
            && self.status.is_none_or(|status| screening.status == status)
            && self
                .search
                .as_deref()
                .is_none_or(|term| screening.matches_search(term))
    }
}

/// Stored screening attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreeningInput {
    /// Upstream call id.
    pub call_id: Option<String>,
    /// User reference.
    pub user_id: Option<String>,
    /// Join link.
    pub join_url: Option<String>,
    /// Job reference.
    pub job_id: Option<JobId>,
    /// Lifecycle status.
    pub status: ScreeningStatus,
}

/// Persistence port for interview screenings.
#[async_trait]
pub trait ScreeningRepository: Send + Sync {
    /// Pages matching screenings, newest first.
    async fn list_screenings(
        &self,
        filter: &ScreeningFilter,
        page: PageRequest,
    ) -> AppResult<Page<InterviewScreening>>;

    /// Lists every matching screening, newest first.
    async fn find_screenings(&self, filter: &ScreeningFilter)
    -> AppResult<Vec<InterviewScreening>>;

    /// Loads one screening.
    async fn find_screening(&self, screening_id: ScreeningId)
    -> AppResult<Option<InterviewScreening>>;

    /// Loads the screening for a user and job pair.
    async fn find_screening_for_user_job(
        &self,
        user_id: &str,
        job_id: JobId,
    ) -> AppResult<Option<InterviewScreening>>;

    /// Loads the earliest screening for a user, whatever its job.
    async fn find_screening_for_user(&self, user_id: &str)
    -> AppResult<Option<InterviewScreening>>;

    /// Inserts a screening.
    async fn create_screening(&self, input: ScreeningInput) -> AppResult<InterviewScreening>;

    /// Replaces a screening's attributes.
    async fn update_screening(
        &self,
        screening_id: ScreeningId,
        input: ScreeningInput,
    ) -> AppResult<InterviewScreening>;

    /// Removes a screening permanently.
    async fn delete_screening(&self, screening_id: ScreeningId) -> AppResult<()>;
}
