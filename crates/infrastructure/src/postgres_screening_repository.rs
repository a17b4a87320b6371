//! PostgreSQL-backed interview screenings.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use qorehr_application::{ScreeningFilter, ScreeningInput, ScreeningRepository};
use qorehr_core::{AppError, AppResult, Page, PageRequest};
use qorehr_domain::{InterviewScreening, JobId, ScreeningId};

use crate::postgres_rows::{
    SCREENING_COLUMNS, ScreeningRow, page_bounds, page_total, screenings_from_rows,
};

/// PostgreSQL implementation of the screening repository port.
#[derive(Clone)]
pub struct PostgresScreeningRepository {
    pool: PgPool,
}

impl PostgresScreeningRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select(filter: &ScreeningFilter) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {SCREENING_COLUMNS} FROM interview_screenings"
        ));
        push_filter(&mut query, filter);
        query
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ScreeningFilter) {
    builder.push(" WHERE TRUE");

    if let Some(call_id) = &filter.call_id {
        builder.push(" AND call_id = ").push_bind(call_id.clone());
    }
    if let Some(user_id) = &filter.user_id {
        builder.push(" AND user_id = ").push_bind(user_id.clone());
    }
    if let Some(job_id) = filter.job_id {
        builder.push(" AND job_id = ").push_bind(job_id.value());
    }
    if let Some(status) = filter.status {
        builder.push(" AND status = ").push_bind(status.as_str());
    }
    if let Some(term) = filter.search.as_deref().map(str::trim)
        && !term.is_empty()
    {
        let pattern = format!("%{term}%");
        builder
            .push(" AND (COALESCE(call_id, '') ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR COALESCE(user_id, '') ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

#[async_trait]
impl ScreeningRepository for PostgresScreeningRepository {
    async fn list_screenings(
        &self,
        filter: &ScreeningFilter,
        page: PageRequest,
    ) -> AppResult<Page<InterviewScreening>> {
        let (limit, offset) = page_bounds(page)?;

        let mut count_query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM interview_screenings");
        push_filter(&mut count_query, filter);
        let total = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to count screenings: {error}")))?;

        let mut query = Self::select(filter);
        query
            .push(" ORDER BY created_at DESC, id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = query
            .build_query_as::<ScreeningRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to list screenings: {error}")))?;

        Ok(Page::new(screenings_from_rows(rows)?, page_total(total), page))
    }

    async fn find_screenings(
        &self,
        filter: &ScreeningFilter,
    ) -> AppResult<Vec<InterviewScreening>> {
        let mut query = Self::select(filter);
        query.push(" ORDER BY created_at DESC, id DESC");

        let rows = query
            .build_query_as::<ScreeningRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to find screenings: {error}")))?;

        screenings_from_rows(rows)
    }

    async fn find_screening(
        &self,
        screening_id: ScreeningId,
    ) -> AppResult<Option<InterviewScreening>> {
        let row = sqlx::query_as::<_, ScreeningRow>(&format!(
            "SELECT {SCREENING_COLUMNS} FROM interview_screenings WHERE id = $1"
        ))
        .bind(screening_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find screening: {error}")))?;

        row.map(InterviewScreening::try_from).transpose()
    }

    async fn find_screening_for_user_job(
        &self,
        user_id: &str,
        job_id: JobId,
    ) -> AppResult<Option<InterviewScreening>> {
        let row = sqlx::query_as::<_, ScreeningRow>(&format!(
            "SELECT {SCREENING_COLUMNS} FROM interview_screenings \
             WHERE user_id = $1 AND job_id = $2 ORDER BY id LIMIT 1"
        ))
        .bind(user_id)
        .bind(job_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find screening: {error}")))?;

        row.map(InterviewScreening::try_from).transpose()
    }

    async fn find_screening_for_user(
        &self,
        user_id: &str,
    ) -> AppResult<Option<InterviewScreening>> {
        let row = sqlx::query_as::<_, ScreeningRow>(&format!(
            "SELECT {SCREENING_COLUMNS} FROM interview_screenings \
             WHERE user_id = $1 ORDER BY id LIMIT 1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find screening: {error}")))?;

        row.map(InterviewScreening::try_from).transpose()
    }

    async fn create_screening(&self, input: ScreeningInput) -> AppResult<InterviewScreening> {
        let row = sqlx::query_as::<_, ScreeningRow>(&format!(
            r#"
            INSERT INTO interview_screenings (call_id, user_id, join_url, job_id, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SCREENING_COLUMNS}
            "#
        ))
        .bind(input.call_id.as_deref())
        .bind(input.user_id.as_deref())
        .bind(input.join_url.as_deref())
        .bind(input.job_id.map(|id| id.value()))
        .bind(input.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to create screening: {error}")))?;

        InterviewScreening::try_from(row)
    }

    async fn update_screening(
        &self,
        screening_id: ScreeningId,
        input: ScreeningInput,
    ) -> AppResult<InterviewScreening> {
        let row = sqlx::query_as::<_, ScreeningRow>(&format!(
            r#"
            UPDATE interview_screenings
            SET call_id = $2, user_id = $3, join_url = $4, job_id = $5, status = $6,
                updated_at = now()
            WHERE id = $1
            RETURNING {SCREENING_COLUMNS}
            "#
        ))
        .bind(screening_id.value())
        .bind(input.call_id.as_deref())
        .bind(input.user_id.as_deref())
        .bind(input.join_url.as_deref())
        .bind(input.job_id.map(|id| id.value()))
        .bind(input.status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to update screening: {error}")))?
        .ok_or_else(|| AppError::NotFound(format!("screening '{screening_id}' not found")))?;

        InterviewScreening::try_from(row)
    }

    async fn delete_screening(&self, screening_id: ScreeningId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM interview_screenings WHERE id = $1")
            .bind(screening_id.value())
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete screening: {error}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "screening '{screening_id}' not found"
            )));
        }

        Ok(())
    }
}
