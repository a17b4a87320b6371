//! Job posting administration.

use std::sync::Arc;

use chrono::NaiveDate;
use qorehr_core::{AppError, AppResult, NonEmptyString, Page, PageRequest};
use qorehr_domain::{
    DEFAULT_JOB_PRIORITY, DEFAULT_JOB_STATUS, DepartmentId, EmployeeId, JobId, JobPosting,
    JobPostingDetails,
};
use tracing::info;

use crate::employee_ports::{EmployeeRepository, OrganizationRepository};
use crate::recruitment_ports::{JobPostingFilter, JobPostingRepository};

/// Partial job posting attributes. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPostingChanges {
    /// Position title, required on create.
    pub job_title: Option<String>,
    /// Position description, required on create.
    pub job_description: Option<String>,
    /// Owning department, required on create.
    pub department_id: Option<DepartmentId>,
    /// Status label, `Draft` on create.
    pub status: Option<String>,
    /// Priority label, `Medium` on create.
    pub priority: Option<String>,
    /// Responsible recruiter.
    pub assigned_to_employee_id: Option<EmployeeId>,
    /// Lower salary bound.
    pub min_salary: Option<f64>,
    /// Upper salary bound.
    pub max_salary: Option<f64>,
    /// Employment type, required on create.
    pub employment_type: Option<String>,
    /// Application deadline.
    pub application_deadline: Option<NaiveDate>,
    /// Remote flag, `false` on create.
    pub is_remote: Option<bool>,
    /// Client hourly budget.
    pub client_budget_hourly: Option<f64>,
    /// Internal hourly budget.
    pub internal_budget_hourly: Option<f64>,
    /// Candidate share in percent.
    pub candidate_split_percentage: Option<i32>,
    /// Company share in percent.
    pub company_split_percentage: Option<i32>,
    /// Requirements.
    pub requirements: Option<String>,
    /// Responsibilities.
    pub responsibilities: Option<String>,
    /// Benefits.
    pub benefits: Option<String>,
}

/// Application service for job postings.
#[derive(Clone)]
pub struct JobPostingService {
    postings: Arc<dyn JobPostingRepository>,
    employees: Arc<dyn EmployeeRepository>,
    organization: Arc<dyn OrganizationRepository>,
}

impl JobPostingService {
    /// Creates a new job posting service.
    #[must_use]
    pub fn new(
        postings: Arc<dyn JobPostingRepository>,
        employees: Arc<dyn EmployeeRepository>,
        organization: Arc<dyn OrganizationRepository>,
    ) -> Self {
        Self {
            postings,
            employees,
            organization,
        }
    }

    /// Lists postings, newest first.
    pub async fn list_job_postings(
        &self,
        filter: &JobPostingFilter,
        page: PageRequest,
    ) -> AppResult<Page<JobPosting>> {
        self.postings.list_job_postings(filter, page).await
    }

    /// Loads one posting.
    pub async fn get_job_posting(&self, job_id: JobId) -> AppResult<JobPosting> {
        self.postings
            .find_job_posting(job_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("job '{job_id}' not found")))
    }

    /// Creates a posting.
    pub async fn create_job_posting(&self, changes: JobPostingChanges) -> AppResult<JobPosting> {
        let (Some(job_title), Some(job_description), Some(department_id), Some(employment_type)) = (
            changes.job_title.clone(),
            changes.job_description.clone(),
            changes.department_id,
            changes.employment_type.clone(),
        ) else {
            return Err(AppError::Validation(
                "job_title, job_description, department_id and employment_type are required"
                    .to_owned(),
            ));
        };

        let base = JobPostingDetails {
            job_title,
            job_description,
            department_id,
            status: DEFAULT_JOB_STATUS.to_owned(),
            priority: DEFAULT_JOB_PRIORITY.to_owned(),
            assigned_to_employee_id: None,
            min_salary: None,
            max_salary: None,
            employment_type,
            application_deadline: None,
            is_remote: false,
            client_budget_hourly: None,
            internal_budget_hourly: None,
            candidate_split_percentage: None,
            company_split_percentage: None,
            requirements: None,
            responsibilities: None,
            benefits: None,
        };
        let details = apply_changes(base, changes)?;
        self.ensure_references(&details).await?;

        let posting = self.postings.create_job_posting(details).await?;
        info!(job_id = %posting.job_id, "job posting created");
        Ok(posting)
    }

    /// Applies a partial update to a posting.
    pub async fn update_job_posting(
        &self,
        job_id: JobId,
        changes: JobPostingChanges,
    ) -> AppResult<JobPosting> {
        let current = self.get_job_posting(job_id).await?;
        let details = apply_changes(current.details, changes)?;
        self.ensure_references(&details).await?;
        self.postings.update_job_posting(job_id, details).await
    }

    /// Deletes a posting permanently.
    pub async fn delete_job_posting(&self, job_id: JobId) -> AppResult<()> {
        self.get_job_posting(job_id).await?;
        self.postings.delete_job_posting(job_id).await?;
        info!(job_id = %job_id, "job posting deleted");
        Ok(())
    }

    async fn ensure_references(&self, details: &JobPostingDetails) -> AppResult<()> {
        if self
            .organization
            .find_department(details.department_id)
            .await?
            .is_none()
        {
            return Err(AppError::Validation(format!(
                "department '{}' does not exist",
                details.department_id
            )));
        }

        if let Some(employee_id) = details.assigned_to_employee_id
            && self.employees.find_employee(employee_id).await?.is_none()
        {
            return Err(AppError::Validation(format!(
                "assigned employee '{employee_id}' does not exist"
            )));
        }

        Ok(())
    }
}

fn apply_changes(
    mut details: JobPostingDetails,
    changes: JobPostingChanges,
) -> AppResult<JobPostingDetails> {
    if let Some(job_title) = changes.job_title {
        details.job_title = NonEmptyString::for_field("job_title", job_title)?.into();
    }
    if let Some(job_description) = changes.job_description {
        details.job_description =
            NonEmptyString::for_field("job_description", job_description)?.into();
    }
    if let Some(employment_type) = changes.employment_type {
        details.employment_type =
            NonEmptyString::for_field("employment_type", employment_type)?.into();
    }
    if let Some(status) = changes.status {
        details.status = NonEmptyString::for_field("status", status)?.into();
    }
    if let Some(priority) = changes.priority {
        details.priority = NonEmptyString::for_field("priority", priority)?.into();
    }
    if let Some(department_id) = changes.department_id {
        details.department_id = department_id;
    }
    if let Some(is_remote) = changes.is_remote {
        details.is_remote = is_remote;
    }

    details.assigned_to_employee_id = changes
        .assigned_to_employee_id
        .or(details.assigned_to_employee_id);
    details.min_salary = changes.min_salary.or(details.min_salary);
    details.max_salary = changes.max_salary.or(details.max_salary);
    details.application_deadline = changes
        .application_deadline
        .or(details.application_deadline);
    details.client_budget_hourly = changes
        .client_budget_hourly
        .or(details.client_budget_hourly);
    details.internal_budget_hourly = changes
        .internal_budget_hourly
        .or(details.internal_budget_hourly);
    details.candidate_split_percentage = changes
        .candidate_split_percentage
        .or(details.candidate_split_percentage);
    details.company_split_percentage = changes
        .company_split_percentage
        .or(details.company_split_percentage);
    details.requirements = changes.requirements.or(details.requirements);
    details.responsibilities = changes.responsibilities.or(details.responsibilities);
    details.benefits = changes.benefits.or(details.benefits);

    validate_amounts(&details)?;
    Ok(details)
}

fn validate_amounts(details: &JobPostingDetails) -> AppResult<()> {
    if let (Some(min_salary), Some(max_salary)) = (details.min_salary, details.max_salary)
        && min_salary > max_salary
    {
        return Err(AppError::Validation(
            "min_salary must not exceed max_salary".to_owned(),
        ));
    }

    for (field, value) in [
        ("candidate_split_percentage", details.candidate_split_percentage),
        ("company_split_percentage", details.company_split_percentage),
    ] {
        if let Some(value) = value
            && !(0..=100).contains(&value)
        {
            return Err(AppError::Validation(format!(
                "{field} must be between 0 and 100"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
