use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Mutex;

use qorehr_core::{AppError, AppResult, Page, PageRequest};
use qorehr_domain::{DepartmentId, EmployeeId, JobId, JobPosting, JobPostingDetails};

use crate::employee_ports::{DepartmentInput, OrganizationRepository};
use crate::recruitment_ports::{JobPostingFilter, JobPostingRepository};
use crate::test_support::{FakeEmployees, FakeOrganization, employee_details, stored};

use super::{JobPostingChanges, JobPostingService};

#[derive(Default)]
struct FakeJobPostings {
    postings: Mutex<Vec<JobPosting>>,
}

#[async_trait]
impl JobPostingRepository for FakeJobPostings {
    async fn list_job_postings(
        &self,
        filter: &JobPostingFilter,
        page: PageRequest,
    ) -> AppResult<Page<JobPosting>> {
        let mut matching: Vec<JobPosting> = self
            .postings
            .lock()
            .await
            .iter()
            .filter(|posting| filter.matches(posting))
            .cloned()
            .collect();
        matching.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        let total = matching.len() as u64;
        Ok(Page::new(page.slice(&matching), total, page))
    }

    async fn find_job_posting(&self, job_id: JobId) -> AppResult<Option<JobPosting>> {
        Ok(self
            .postings
            .lock()
            .await
            .iter()
            .find(|posting| posting.job_id == job_id)
            .cloned())
    }

    async fn create_job_posting(&self, details: JobPostingDetails) -> AppResult<JobPosting> {
        let mut postings = self.postings.lock().await;
        let offset = Duration::seconds(postings.len() as i64);
        let posting = JobPosting {
            job_id: JobId::new(postings.len() as i64 + 1),
            details,
            created_at: Utc::now() + offset,
            updated_at: Utc::now() + offset,
        };
        postings.push(posting.clone());
        Ok(posting)
    }

    async fn update_job_posting(
        &self,
        job_id: JobId,
        details: JobPostingDetails,
    ) -> AppResult<JobPosting> {
        let mut postings = self.postings.lock().await;
        let posting = postings
            .iter_mut()
            .find(|posting| posting.job_id == job_id)
            .ok_or_else(|| AppError::NotFound("job".to_owned()))?;
        posting.details = details;
        Ok(posting.clone())
    }

    async fn delete_job_posting(&self, job_id: JobId) -> AppResult<()> {
        self.postings
            .lock()
            .await
            .retain(|posting| posting.job_id != job_id);
        Ok(())
    }
}

async fn service() -> AppResult<JobPostingService> {
    let employees = Arc::new(FakeEmployees::default());
    employees
        .employees
        .lock()
        .await
        .push(stored(1, employee_details("EMP-1", "Ada")));
    let organization = FakeOrganization::default();
    organization
        .create_department(DepartmentInput {
            name: "Engineering".to_owned(),
            short_code: None,
            description: None,
            is_active: true,
        })
        .await?;

    Ok(JobPostingService::new(
        Arc::new(FakeJobPostings::default()),
        employees,
        Arc::new(organization),
    ))
}

fn opening(title: &str) -> JobPostingChanges {
    JobPostingChanges {
        job_title: Some(title.to_owned()),
        job_description: Some("Build payroll integrations".to_owned()),
        department_id: Some(DepartmentId::new(1)),
        employment_type: Some("Full-time".to_owned()),
        ..JobPostingChanges::default()
    }
}

#[tokio::test]
async fn create_applies_defaults() -> AppResult<()> {
    let service = service().await?;

    let posting = service.create_job_posting(opening("Rust Engineer")).await?;

    assert_eq!(posting.details.status, "Draft");
    assert_eq!(posting.details.priority, "Medium");
    assert!(!posting.details.is_remote);
    Ok(())
}

#[tokio::test]
async fn create_requires_core_fields() -> AppResult<()> {
    let service = service().await?;

    let result = service
        .create_job_posting(JobPostingChanges {
            employment_type: None,
            ..opening("Rust Engineer")
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn references_must_exist() -> AppResult<()> {
    let service = service().await?;

    let department = service
        .create_job_posting(JobPostingChanges {
            department_id: Some(DepartmentId::new(5)),
            ..opening("Rust Engineer")
        })
        .await;
    assert!(matches!(department, Err(AppError::Validation(message)) if message.contains("department")));

    let recruiter = service
        .create_job_posting(JobPostingChanges {
            assigned_to_employee_id: Some(EmployeeId::new(77)),
            ..opening("Rust Engineer")
        })
        .await;
    assert!(matches!(recruiter, Err(AppError::Validation(message)) if message.contains("assigned employee")));
    Ok(())
}

#[tokio::test]
async fn rejects_inverted_salary_range() -> AppResult<()> {
    let service = service().await?;

    let result = service
        .create_job_posting(JobPostingChanges {
            min_salary: Some(9000.0),
            max_salary: Some(4000.0),
            ..opening("Rust Engineer")
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn list_filters_and_orders_newest_first() -> AppResult<()> {
    let service = service().await?;
    service.create_job_posting(opening("Rust Engineer")).await?;
    service
        .create_job_posting(JobPostingChanges {
            is_remote: Some(true),
            ..opening("Remote Data Engineer")
        })
        .await?;
    service.create_job_posting(opening("Recruiter")).await?;

    let engineers = service
        .list_job_postings(
            &JobPostingFilter {
                search: Some("engineer".to_owned()),
                ..JobPostingFilter::default()
            },
            PageRequest::default(),
        )
        .await?;
    let titles: Vec<&str> = engineers
        .items
        .iter()
        .map(|posting| posting.details.job_title.as_str())
        .collect();
    assert_eq!(titles, vec!["Remote Data Engineer", "Rust Engineer"]);

    let remote = service
        .list_job_postings(
            &JobPostingFilter {
                is_remote: Some(true),
                ..JobPostingFilter::default()
            },
            PageRequest::default(),
        )
        .await?;
    assert_eq!(remote.total, 1);
    Ok(())
}

#[tokio::test]
async fn update_and_delete() -> AppResult<()> {
    let service = service().await?;
    let posting = service.create_job_posting(opening("Rust Engineer")).await?;

    let published = service
        .update_job_posting(
            posting.job_id,
            JobPostingChanges {
                status: Some("Published".to_owned()),
                ..JobPostingChanges::default()
            },
        )
        .await?;
    assert_eq!(published.details.status, "Published");
    assert_eq!(published.details.job_title, "Rust Engineer");

    service.delete_job_posting(posting.job_id).await?;
    assert!(matches!(
        service.get_job_posting(posting.job_id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_job_posting(posting.job_id).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}
