use async_trait::async_trait;
use chrono::Utc;
use qorehr_application::{
    JobPostingFilter, JobPostingRepository, ScreeningFilter, ScreeningInput, ScreeningRepository,
};
use qorehr_core::{Page, PageRequest};
use qorehr_domain::JobPostingDetails;

use super::*;

fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (chrono::DateTime<Utc>, i64)) {
    items.sort_by(|left, right| key(right).cmp(&key(left)));
}

#[async_trait]
impl JobPostingRepository for InMemoryHrStore {
    async fn list_job_postings(
        &self,
        filter: &JobPostingFilter,
        page: PageRequest,
    ) -> AppResult<Page<JobPosting>> {
        let state = self.state.read().await;
        let mut matching: Vec<JobPosting> = state
            .job_postings
            .values()
            .filter(|posting| filter.matches(posting))
            .cloned()
            .collect();
        newest_first(&mut matching, |posting| {
            (posting.created_at, posting.job_id.value())
        });

        let total = matching.len() as u64;
        Ok(Page::new(page.slice(&matching), total, page))
    }

    async fn find_job_posting(&self, job_id: JobId) -> AppResult<Option<JobPosting>> {
        Ok(self.state.read().await.job_postings.get(&job_id).cloned())
    }

    async fn create_job_posting(&self, details: JobPostingDetails) -> AppResult<JobPosting> {
        let mut state = self.state.write().await;
        let job_id = JobId::new(state.allocate("job_postings"));
        let now = Utc::now();
        let posting = JobPosting {
            job_id,
            details,
            created_at: now,
            updated_at: now,
        };
        state.job_postings.insert(job_id, posting.clone());
        Ok(posting)
    }

    async fn update_job_posting(
        &self,
        job_id: JobId,
        details: JobPostingDetails,
    ) -> AppResult<JobPosting> {
        let mut state = self.state.write().await;
        let posting = state
            .job_postings
            .get_mut(&job_id)
            .ok_or_else(|| not_found("job posting", job_id))?;
        posting.details = details;
        posting.updated_at = Utc::now();
        Ok(posting.clone())
    }

    async fn delete_job_posting(&self, job_id: JobId) -> AppResult<()> {
        self.state
            .write()
            .await
            .job_postings
            .remove(&job_id)
            .map(|_| ())
            .ok_or_else(|| not_found("job posting", job_id))
    }
}

impl HrState {
    fn matching_screenings(&self, filter: &ScreeningFilter) -> Vec<InterviewScreening> {
        let mut matching: Vec<InterviewScreening> = self
            .screenings
            .values()
            .filter(|screening| filter.matches(screening))
            .cloned()
            .collect();
        newest_first(&mut matching, |screening| {
            (screening.created_at, screening.id.value())
        });
        matching
    }
}

#[async_trait]
impl ScreeningRepository for InMemoryHrStore {
    async fn list_screenings(
        &self,
        filter: &ScreeningFilter,
        page: PageRequest,
    ) -> AppResult<Page<InterviewScreening>> {
        let matching = self.state.read().await.matching_screenings(filter);
        let total = matching.len() as u64;
        Ok(Page::new(page.slice(&matching), total, page))
    }

    async fn find_screenings(
        &self,
        filter: &ScreeningFilter,
    ) -> AppResult<Vec<InterviewScreening>> {
        Ok(self.state.read().await.matching_screenings(filter))
    }

    async fn find_screening(
        &self,
        screening_id: ScreeningId,
    ) -> AppResult<Option<InterviewScreening>> {
        Ok(self.state.read().await.screenings.get(&screening_id).cloned())
    }

    async fn find_screening_for_user_job(
        &self,
        user_id: &str,
        job_id: JobId,
    ) -> AppResult<Option<InterviewScreening>> {
        let state = self.state.read().await;
        Ok(state
            .screenings
            .values()
            .find(|screening| {
                screening.user_id.as_deref() == Some(user_id) && screening.job_id == Some(job_id)
            })
            .cloned())
    }

    async fn find_screening_for_user(
        &self,
        user_id: &str,
    ) -> AppResult<Option<InterviewScreening>> {
        let state = self.state.read().await;
        Ok(state
            .screenings
            .values()
            .find(|screening| screening.user_id.as_deref() == Some(user_id))
            .cloned())
    }

    async fn create_screening(&self, input: ScreeningInput) -> AppResult<InterviewScreening> {
        let mut state = self.state.write().await;
        let id = ScreeningId::new(state.allocate("interview_screenings"));
        let now = Utc::now();
        let screening = InterviewScreening {
            id,
            call_id: input.call_id,
            user_id: input.user_id,
            join_url: input.join_url,
            job_id: input.job_id,
            status: input.status,
            created_at: now,
            updated_at: now,
        };
        state.screenings.insert(id, screening.clone());
        Ok(screening)
    }

    async fn update_screening(
        &self,
        screening_id: ScreeningId,
        input: ScreeningInput,
    ) -> AppResult<InterviewScreening> {
        let mut state = self.state.write().await;
        let screening = state
            .screenings
            .get_mut(&screening_id)
            .ok_or_else(|| not_found("screening", screening_id))?;

        screening.call_id = input.call_id;
        screening.user_id = input.user_id;
        screening.join_url = input.join_url;
        screening.job_id = input.job_id;
        screening.status = input.status;
        screening.updated_at = Utc::now();
        Ok(screening.clone())
    }

    async fn delete_screening(&self, screening_id: ScreeningId) -> AppResult<()> {
        self.state
            .write()
            .await
            .screenings
            .remove(&screening_id)
            .map(|_| ())
            .ok_or_else(|| not_found("screening", screening_id))
    }
}
