use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Mutex;

use qorehr_core::{AppError, AppResult, Page, PageRequest};
use qorehr_domain::{InterviewScreening, JobId, ScreeningId, ScreeningStatus};

use crate::recruitment_ports::{ScreeningFilter, ScreeningInput, ScreeningRepository};
use crate::test_support::{FakeEmployees, employee_details, stored};

use super::{ScreeningChanges, ScreeningService, UpsertOutcome};

#[derive(Default)]
struct FakeScreenings {
    screenings: Mutex<Vec<InterviewScreening>>,
}

impl FakeScreenings {
    async fn newest_first(&self, filter: &ScreeningFilter) -> Vec<InterviewScreening> {
        let mut matching: Vec<InterviewScreening> = self
            .screenings
            .lock()
            .await
            .iter()
            .filter(|screening| filter.matches(screening))
            .cloned()
            .collect();
        matching.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        matching
    }
}

#[async_trait]
impl ScreeningRepository for FakeScreenings {
    async fn list_screenings(
        &self,
        filter: &ScreeningFilter,
        page: PageRequest,
    ) -> AppResult<Page<InterviewScreening>> {
        let matching = self.newest_first(filter).await;
        let total = matching.len() as u64;
        Ok(Page::new(page.slice(&matching), total, page))
    }

    async fn find_screenings(
        &self,
        filter: &ScreeningFilter,
    ) -> AppResult<Vec<InterviewScreening>> {
        Ok(self.newest_first(filter).await)
    }

    async fn find_screening(
        &self,
        screening_id: ScreeningId,
    ) -> AppResult<Option<InterviewScreening>> {
        Ok(self
            .screenings
            .lock()
            .await
            .iter()
            .find(|screening| screening.id == screening_id)
            .cloned())
    }

    async fn find_screening_for_user_job(
        &self,
        user_id: &str,
        job_id: JobId,
    ) -> AppResult<Option<InterviewScreening>> {
        Ok(self
            .screenings
            .lock()
            .await
            .iter()
            .find(|screening| {
                screening.user_id.as_deref() == Some(user_id) && screening.job_id == Some(job_id)
            })
            .cloned())
    }

    async fn find_screening_for_user(
        &self,
        user_id: &str,
    ) -> AppResult<Option<InterviewScreening>> {
        Ok(self
            .screenings
            .lock()
            .await
            .iter()
            .find(|screening| screening.user_id.as_deref() == Some(user_id))
            .cloned())
    }

    async fn create_screening(&self, input: ScreeningInput) -> AppResult<InterviewScreening> {
        let mut screenings = self.screenings.lock().await;
        let created_at = Utc::now() + Duration::seconds(screenings.len() as i64);
        let screening = InterviewScreening {
            id: ScreeningId::new(screenings.len() as i64 + 1),
            call_id: input.call_id,
            user_id: input.user_id,
            join_url: input.join_url,
            job_id: input.job_id,
            status: input.status,
            created_at,
            updated_at: created_at,
        };
        screenings.push(screening.clone());
        Ok(screening)
    }

    async fn update_screening(
        &self,
        screening_id: ScreeningId,
        input: ScreeningInput,
    ) -> AppResult<InterviewScreening> {
        let mut screenings = self.screenings.lock().await;
        let screening = screenings
            .iter_mut()
            .find(|screening| screening.id == screening_id)
            .ok_or_else(|| AppError::NotFound("screening".to_owned()))?;
        screening.call_id = input.call_id;
        screening.user_id = input.user_id;
        screening.join_url = input.join_url;
        screening.job_id = input.job_id;
        screening.status = input.status;
        Ok(screening.clone())
    }

    async fn delete_screening(&self, screening_id: ScreeningId) -> AppResult<()> {
        self.screenings
            .lock()
            .await
            .retain(|screening| screening.id != screening_id);
        Ok(())
    }
}

async fn service() -> ScreeningService {
    let employees = Arc::new(FakeEmployees::default());
    employees
        .employees
        .lock()
        .await
        .push(stored(12, employee_details("EMP-12", "Ada")));
    ScreeningService::new(Arc::new(FakeScreenings::default()), employees)
}

fn call(call_id: &str, user_id: &str, job_id: i64) -> ScreeningChanges {
    ScreeningChanges {
        call_id: Some(call_id.to_owned()),
        user_id: Some(user_id.to_owned()),
        job_id: Some(JobId::new(job_id)),
        ..ScreeningChanges::default()
    }
}

#[tokio::test]
async fn create_requires_a_reference() {
    let service = service().await;

    let result = service
        .create_or_update_screening(ScreeningChanges {
            call_id: Some("  ".to_owned()),
            job_id: Some(JobId::new(1)),
            ..ScreeningChanges::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn create_rejects_unknown_status() {
    let service = service().await;

    let result = service
        .create_or_update_screening(ScreeningChanges {
            status: Some("done".to_owned()),
            ..call("call-1", "12", 1)
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(message)) if message.contains("pending, in_progress")));
}

#[tokio::test]
async fn same_user_and_job_updates_in_place() -> AppResult<()> {
    let service = service().await;

    let (created, outcome) = service
        .create_or_update_screening(call("call-1", "12", 1))
        .await?;
    assert_eq!(outcome, UpsertOutcome::Created);
    assert_eq!(created.status, ScreeningStatus::Pending);

    let (updated, outcome) = service
        .create_or_update_screening(ScreeningChanges {
            status: Some("completed".to_owned()),
            ..call("call-2", "12", 1)
        })
        .await?;
    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.call_id.as_deref(), Some("call-2"));
    assert_eq!(updated.status, ScreeningStatus::Completed);

    let (_, outcome) = service
        .create_or_update_screening(call("call-3", "12", 2))
        .await?;
    assert_eq!(outcome, UpsertOutcome::Created);
    Ok(())
}

#[tokio::test]
async fn user_without_job_updates_existing_screening() -> AppResult<()> {
    let service = service().await;

    let (created, outcome) = service
        .create_or_update_screening(ScreeningChanges {
            call_id: Some("call-a".to_owned()),
            user_id: Some("12".to_owned()),
            ..ScreeningChanges::default()
        })
        .await?;
    assert_eq!(outcome, UpsertOutcome::Created);

    let (updated, outcome) = service
        .create_or_update_screening(ScreeningChanges {
            call_id: Some("call-b".to_owned()),
            user_id: Some("12".to_owned()),
            ..ScreeningChanges::default()
        })
        .await?;
    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.call_id.as_deref(), Some("call-b"));
    assert_eq!(updated.job_id, None);

    let (updated, outcome) = service
        .create_or_update_screening(ScreeningChanges {
            user_id: Some("12".to_owned()),
            job_id: Some(JobId::new(7)),
            ..ScreeningChanges::default()
        })
        .await?;
    assert_eq!(outcome, UpsertOutcome::Created);
    assert_ne!(updated.id, created.id);

    let (other, outcome) = service
        .create_or_update_screening(ScreeningChanges {
            user_id: Some("31".to_owned()),
            ..ScreeningChanges::default()
        })
        .await?;
    assert_eq!(outcome, UpsertOutcome::Created);
    assert_eq!(other.job_id, None);
    Ok(())
}

#[tokio::test]
async fn lookups_filter_and_validate_status() -> AppResult<()> {
    let service = service().await;
    service
        .create_or_update_screening(call("call-1", "12", 1))
        .await?;
    service
        .create_or_update_screening(ScreeningChanges {
            status: Some("in_progress".to_owned()),
            ..call("call-2", "candidate-7", 1)
        })
        .await?;

    let by_job = service.screenings_by_job(JobId::new(1)).await?;
    assert_eq!(by_job.len(), 2);
    assert_eq!(by_job[0].call_id.as_deref(), Some("call-2"));

    assert_eq!(service.screenings_by_call("call-1").await?.len(), 1);
    assert_eq!(service.screenings_by_user("candidate-7").await?.len(), 1);
    assert_eq!(service.screenings_by_status("in_progress").await?.len(), 1);
    assert!(matches!(
        service.screenings_by_status("archived").await,
        Err(AppError::Validation(_))
    ));
    Ok(())
}

#[tokio::test]
async fn employee_enrichment_resolves_numeric_user_ids() -> AppResult<()> {
    let service = service().await;
    let (known, _) = service
        .create_or_update_screening(call("call-1", "12", 1))
        .await?;
    let (unknown, _) = service
        .create_or_update_screening(call("call-2", "candidate-7", 1))
        .await?;

    let enriched = service.screening_with_employee(known.id).await?;
    assert_eq!(
        enriched
            .employee
            .as_ref()
            .map(|employee| employee.details.first_name.as_str()),
        Some("Ada")
    );
    assert!(service.screening_with_employee(unknown.id).await?.employee.is_none());

    let page = service
        .list_screenings_with_employee(&ScreeningFilter::default(), PageRequest::new(Some(1), Some(1)))
        .await?;
    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.pages(), 2);
    Ok(())
}

#[tokio::test]
async fn update_and_delete_missing_screening() -> AppResult<()> {
    let service = service().await;
    let (screening, _) = service
        .create_or_update_screening(call("call-1", "12", 1))
        .await?;

    let updated = service
        .update_screening(
            screening.id,
            ScreeningChanges {
                join_url: Some("https://meet.example.com/abc".to_owned()),
                ..ScreeningChanges::default()
            },
        )
        .await?;
    assert_eq!(updated.call_id.as_deref(), Some("call-1"));
    assert!(updated.join_url.is_some());

    service.delete_screening(screening.id).await?;
    assert!(matches!(
        service.delete_screening(screening.id).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}
