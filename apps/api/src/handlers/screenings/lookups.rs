use super::*;

pub async fn list_screenings_by_call_handler(
    State(state): State<AppState>,
    Path(call_id): Path<String>,
) -> ApiResult<Json<ListResponse<ScreeningResponse>>> {
    let screenings = state.screening_service.screenings_by_call(&call_id).await?;
    Ok(Json(ListResponse::from_items(screenings)))
}

pub async fn list_screenings_by_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ListResponse<ScreeningResponse>>> {
    let screenings = state.screening_service.screenings_by_user(&user_id).await?;
    Ok(Json(ListResponse::from_items(screenings)))
}

pub async fn list_screenings_by_job_handler(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
) -> ApiResult<Json<ListResponse<ScreeningResponse>>> {
    let screenings = state
        .screening_service
        .screenings_by_job(JobId::new(job_id))
        .await?;
    Ok(Json(ListResponse::from_items(screenings)))
}

pub async fn list_screenings_by_status_handler(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> ApiResult<Json<ListResponse<ScreeningResponse>>> {
    let screenings = state
        .screening_service
        .screenings_by_status(&status)
        .await?;
    Ok(Json(ListResponse::from_items(screenings)))
}

pub async fn list_screenings_with_employee_handler(
    State(state): State<AppState>,
    Query(query): Query<ScreeningListQuery>,
) -> ApiResult<Json<PaginatedResponse<ScreeningWithEmployeeResponse>>> {
    let page = state
        .screening_service
        .list_screenings_with_employee(&query.filter()?, query.page_request())
        .await?;

    Ok(Json(PaginatedResponse::from_page(page)))
}

pub async fn get_screening_with_employee_handler(
    State(state): State<AppState>,
    Path(screening_id): Path<i64>,
) -> ApiResult<Json<ScreeningWithEmployeeResponse>> {
    let screening = state
        .screening_service
        .screening_with_employee(ScreeningId::new(screening_id))
        .await?;

    Ok(Json(ScreeningWithEmployeeResponse::from(screening)))
}
