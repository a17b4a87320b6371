use super::*;

pub async fn list_screenings_handler(
    State(state): State<AppState>,
    Query(query): Query<ScreeningListQuery>,
) -> ApiResult<Json<PaginatedResponse<ScreeningResponse>>> {
    let page = state
        .screening_service
        .list_screenings(&query.filter()?, query.page_request())
        .await?;

    Ok(Json(PaginatedResponse::from_page(page)))
}

pub async fn get_screening_handler(
    State(state): State<AppState>,
    Path(screening_id): Path<i64>,
) -> ApiResult<Json<ScreeningResponse>> {
    let screening = state
        .screening_service
        .get_screening(ScreeningId::new(screening_id))
        .await?;

    Ok(Json(ScreeningResponse::from(screening)))
}

/// Creates a screening, or updates the one already tracking the same user and job.
pub async fn upsert_screening_handler(
    State(state): State<AppState>,
    Json(payload): Json<ScreeningRequest>,
) -> ApiResult<(StatusCode, Json<ScreeningUpsertResponse>)> {
    let (screening, outcome) = state
        .screening_service
        .create_or_update_screening(ScreeningChanges::from(payload))
        .await?;
    let status = match outcome {
        UpsertOutcome::Created => StatusCode::CREATED,
        UpsertOutcome::Updated => StatusCode::OK,
    };

    Ok((status, Json(ScreeningUpsertResponse::new(screening, outcome))))
}

pub async fn update_screening_handler(
    State(state): State<AppState>,
    Path(screening_id): Path<i64>,
    Json(payload): Json<ScreeningRequest>,
) -> ApiResult<Json<ScreeningResponse>> {
    let screening = state
        .screening_service
        .update_screening(
            ScreeningId::new(screening_id),
            ScreeningChanges::from(payload),
        )
        .await?;

    Ok(Json(ScreeningResponse::from(screening)))
}

pub async fn delete_screening_handler(
    State(state): State<AppState>,
    Path(screening_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .screening_service
        .delete_screening(ScreeningId::new(screening_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
