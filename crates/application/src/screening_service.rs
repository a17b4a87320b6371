//! Interview screening records and their employee enrichment.

use std::sync::Arc;

use qorehr_core::{AppError, AppResult, Page, PageRequest};
use qorehr_domain::{Employee, InterviewScreening, JobId, ScreeningId, ScreeningStatus};
use tracing::info;

use crate::employee_ports::EmployeeRepository;
use crate::recruitment_ports::{ScreeningFilter, ScreeningInput, ScreeningRepository};

mod lookups;

/// Partial screening attributes. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreeningChanges {
    /// Upstream call id.
    pub call_id: Option<String>,
    /// User reference.
    pub user_id: Option<String>,
    /// Join link.
    pub join_url: Option<String>,
    /// Job reference.
    pub job_id: Option<JobId>,
    /// Raw status value, validated against [`ScreeningStatus`].
    pub status: Option<String>,
}

/// Whether a create-or-update call inserted or modified a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new record was inserted.
    Created,
    /// An existing user and job pair was updated in place.
    Updated,
}

/// Screening with the employee its user reference resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningWithEmployee {
    /// The screening record.
    pub screening: InterviewScreening,
    /// Employee matching a numeric `user_id`, when one exists.
    pub employee: Option<Employee>,
}

/// Application service for interview screenings.
#[derive(Clone)]
pub struct ScreeningService {
    screenings: Arc<dyn ScreeningRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl ScreeningService {
    /// Creates a new screening service.
    #[must_use]
    pub fn new(
        screenings: Arc<dyn ScreeningRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            screenings,
            employees,
        }
    }

    /// Pages screenings, newest first.
    pub async fn list_screenings(
        &self,
        filter: &ScreeningFilter,
        page: PageRequest,
    ) -> AppResult<Page<InterviewScreening>> {
        self.screenings.list_screenings(filter, page).await
    }

    /// Loads one screening.
    pub async fn get_screening(&self, screening_id: ScreeningId) -> AppResult<InterviewScreening> {
        self.screenings
            .find_screening(screening_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("screening '{screening_id}' not found")))
    }

    /// Inserts a screening, or updates the one already tracking the same user and job.
    /// Without a job, the user's existing screening is updated instead.
    pub async fn create_or_update_screening(
        &self,
        changes: ScreeningChanges,
    ) -> AppResult<(InterviewScreening, UpsertOutcome)> {
        let changes = normalize(changes);
        if changes.call_id.is_none() && changes.user_id.is_none() && changes.join_url.is_none() {
            return Err(AppError::Validation(
                "at least one of call_id, user_id or join_url is required".to_owned(),
            ));
        }
        let status = parse_status(changes.status.as_deref())?;

        let existing = match (changes.user_id.as_deref(), changes.job_id) {
            (Some(user_id), Some(job_id)) => {
                self.screenings
                    .find_screening_for_user_job(user_id, job_id)
                    .await?
            }
            (Some(user_id), None) => self.screenings.find_screening_for_user(user_id).await?,
            (None, _) => None,
        };

        if let Some(existing) = existing {
            let input = merge(&existing, changes, status);
            let screening = self.screenings.update_screening(existing.id, input).await?;
            info!(screening_id = %screening.id, "screening updated");
            return Ok((screening, UpsertOutcome::Updated));
        }

        let screening = self
            .screenings
            .create_screening(ScreeningInput {
                call_id: changes.call_id,
                user_id: changes.user_id,
                join_url: changes.join_url,
                job_id: changes.job_id,
                status: status.unwrap_or_default(),
            })
            .await?;
        info!(screening_id = %screening.id, "screening created");
        Ok((screening, UpsertOutcome::Created))
    }

    /// Applies a partial update to a screening.
    pub async fn update_screening(
        &self,
        screening_id: ScreeningId,
        changes: ScreeningChanges,
    ) -> AppResult<InterviewScreening> {
        let changes = normalize(changes);
        let status = parse_status(changes.status.as_deref())?;
        let existing = self.get_screening(screening_id).await?;
        let input = merge(&existing, changes, status);
        self.screenings.update_screening(screening_id, input).await
    }

    /// Deletes a screening.
    pub async fn delete_screening(&self, screening_id: ScreeningId) -> AppResult<()> {
        self.get_screening(screening_id).await?;
        self.screenings.delete_screening(screening_id).await?;
        info!(screening_id = %screening_id, "screening deleted");
        Ok(())
    }
}

fn parse_status(status: Option<&str>) -> AppResult<Option<ScreeningStatus>> {
    status.map(str::parse).transpose()
}

/// Treats blank strings as absent.
fn normalize(changes: ScreeningChanges) -> ScreeningChanges {
    let present = |value: Option<String>| {
        value
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
    };

    ScreeningChanges {
        call_id: present(changes.call_id),
        user_id: present(changes.user_id),
        join_url: present(changes.join_url),
        job_id: changes.job_id,
        status: present(changes.status),
    }
}

fn merge(
    existing: &InterviewScreening,
    changes: ScreeningChanges,
    status: Option<ScreeningStatus>,
) -> ScreeningInput {
    ScreeningInput {
        call_id: changes.call_id.or_else(|| existing.call_id.clone()),
        user_id: changes.user_id.or_else(|| existing.user_id.clone()),
        join_url: changes.join_url.or_else(|| existing.join_url.clone()),
        job_id: changes.job_id.or(existing.job_id),
        status: status.unwrap_or(existing.status),
    }
}

#[cfg(test)]
mod tests;
