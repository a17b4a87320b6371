use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use qorehr_application::JobPostingChanges;
use qorehr_domain::JobId;

use crate::dto::{JobPostingListQuery, JobPostingRequest, JobPostingResponse, PaginatedResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_job_postings_handler(
    State(state): State<AppState>,
    Query(query): Query<JobPostingListQuery>,
) -> ApiResult<Json<PaginatedResponse<JobPostingResponse>>> {
    let page = state
        .job_posting_service
        .list_job_postings(&query.filter(), query.page_request())
        .await?;

    Ok(Json(PaginatedResponse::from_page(page)))
}

pub async fn get_job_posting_handler(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
) -> ApiResult<Json<JobPostingResponse>> {
    let posting = state
        .job_posting_service
        .get_job_posting(JobId::new(job_id))
        .await?;

    Ok(Json(JobPostingResponse::from(posting)))
}

pub async fn create_job_posting_handler(
    State(state): State<AppState>,
    Json(payload): Json<JobPostingRequest>,
) -> ApiResult<(StatusCode, Json<JobPostingResponse>)> {
    let posting = state
        .job_posting_service
        .create_job_posting(JobPostingChanges::try_from(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(JobPostingResponse::from(posting))))
}

pub async fn update_job_posting_handler(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
    Json(payload): Json<JobPostingRequest>,
) -> ApiResult<Json<JobPostingResponse>> {
    let posting = state
        .job_posting_service
        .update_job_posting(JobId::new(job_id), JobPostingChanges::try_from(payload)?)
        .await?;

    Ok(Json(JobPostingResponse::from(posting)))
}

pub async fn delete_job_posting_handler(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .job_posting_service
        .delete_job_posting(JobId::new(job_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
