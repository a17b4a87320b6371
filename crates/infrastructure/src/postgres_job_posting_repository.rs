//! PostgreSQL-backed job postings.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use qorehr_application::{JobPostingFilter, JobPostingRepository};
use qorehr_core::{AppError, AppResult, Page, PageRequest};
use qorehr_domain::{JobId, JobPosting, JobPostingDetails};

use crate::postgres_rows::{
    JOB_POSTING_COLUMNS, JobPostingRow, page_bounds, page_total, write_error,
};

/// PostgreSQL implementation of the job posting repository port.
#[derive(Clone)]
pub struct PostgresJobPostingRepository {
    pool: PgPool,
}

impl PostgresJobPostingRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &JobPostingFilter) {
    builder.push(" WHERE TRUE");

    if let Some(status) = &filter.status {
        builder.push(" AND status = ").push_bind(status.clone());
    }
    if let Some(department_id) = filter.department_id {
        builder
            .push(" AND department_id = ")
            .push_bind(department_id.value());
    }
    if let Some(priority) = &filter.priority {
        builder.push(" AND priority = ").push_bind(priority.clone());
    }
    if let Some(employee_id) = filter.assigned_to_employee_id {
        builder
            .push(" AND assigned_to_employee_id = ")
            .push_bind(employee_id.value());
    }
    if let Some(is_remote) = filter.is_remote {
        builder.push(" AND is_remote = ").push_bind(is_remote);
    }
    if let Some(employment_type) = &filter.employment_type {
        builder
            .push(" AND employment_type = ")
            .push_bind(employment_type.clone());
    }
    if let Some(term) = filter.search.as_deref().map(str::trim)
        && !term.is_empty()
    {
        let pattern = format!("%{term}%");
        builder
            .push(" AND (job_title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR job_description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

macro_rules! bind_details {
    ($query:expr, $details:expr) => {
        $query
            .bind($details.job_title.as_str())
            .bind($details.job_description.as_str())
            .bind($details.department_id.value())
            .bind($details.status.as_str())
            .bind($details.priority.as_str())
            .bind($details.assigned_to_employee_id.map(|id| id.value()))
            .bind($details.min_salary)
            .bind($details.max_salary)
            .bind($details.employment_type.as_str())
            .bind($details.application_deadline)
            .bind($details.is_remote)
            .bind($details.client_budget_hourly)
            .bind($details.internal_budget_hourly)
            .bind($details.candidate_split_percentage)
            .bind($details.company_split_percentage)
            .bind($details.requirements.as_deref())
            .bind($details.responsibilities.as_deref())
            .bind($details.benefits.as_deref())
    };
}

#[async_trait]
impl JobPostingRepository for PostgresJobPostingRepository {
    async fn list_job_postings(
        &self,
        filter: &JobPostingFilter,
        page: PageRequest,
    ) -> AppResult<Page<JobPosting>> {
        let (limit, offset) = page_bounds(page)?;

        let mut count_query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM job_postings");
        push_filter(&mut count_query, filter);
        let total = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to count job postings: {error}"))
            })?;

        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            "SELECT {JOB_POSTING_COLUMNS} FROM job_postings"
        ));
        push_filter(&mut query, filter);
        query
            .push(" ORDER BY created_at DESC, job_id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = query
            .build_query_as::<JobPostingRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to list job postings: {error}")))?;

        Ok(Page::new(
            rows.into_iter().map(JobPosting::from).collect(),
            page_total(total),
            page,
        ))
    }

    async fn find_job_posting(&self, job_id: JobId) -> AppResult<Option<JobPosting>> {
        let row = sqlx::query_as::<_, JobPostingRow>(&format!(
            "SELECT {JOB_POSTING_COLUMNS} FROM job_postings WHERE job_id = $1"
        ))
        .bind(job_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find job posting: {error}")))?;

        Ok(row.map(JobPosting::from))
    }

    async fn create_job_posting(&self, details: JobPostingDetails) -> AppResult<JobPosting> {
        let sql = format!(
            r#"
            INSERT INTO job_postings (
                job_title, job_description, department_id, status, priority,
                assigned_to_employee_id, min_salary, max_salary, employment_type,
                application_deadline, is_remote, client_budget_hourly, internal_budget_hourly,
                candidate_split_percentage, company_split_percentage, requirements,
                responsibilities, benefits
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            RETURNING {JOB_POSTING_COLUMNS}
            "#
        );
        let row = bind_details!(sqlx::query_as::<_, JobPostingRow>(&sql), details)
            .fetch_one(&self.pool)
            .await
            .map_err(|error| write_error(error, String::new, "create job posting"))?;

        Ok(JobPosting::from(row))
    }

    async fn update_job_posting(
        &self,
        job_id: JobId,
        details: JobPostingDetails,
    ) -> AppResult<JobPosting> {
        let sql = format!(
            r#"
            UPDATE job_postings
            SET job_title = $1, job_description = $2, department_id = $3, status = $4,
                priority = $5, assigned_to_employee_id = $6, min_salary = $7,
                max_salary = $8, employment_type = $9, application_deadline = $10,
                is_remote = $11, client_budget_hourly = $12, internal_budget_hourly = $13,
                candidate_split_percentage = $14, company_split_percentage = $15,
                requirements = $16, responsibilities = $17, benefits = $18,
                updated_at = now()
            WHERE job_id = $19
            RETURNING {JOB_POSTING_COLUMNS}
            "#
        );
        let row = bind_details!(sqlx::query_as::<_, JobPostingRow>(&sql), details)
            .bind(job_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| write_error(error, String::new, "update job posting"))?
            .ok_or_else(|| AppError::NotFound(format!("job posting '{job_id}' not found")))?;

        Ok(JobPosting::from(row))
    }

    async fn delete_job_posting(&self, job_id: JobId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM job_postings WHERE job_id = $1")
            .bind(job_id.value())
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete job posting: {error}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("job posting '{job_id}' not found")));
        }

        Ok(())
    }
}
