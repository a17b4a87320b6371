use super::*;

pub async fn list_departments_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentResponse>>> {
    let departments = state
        .organization_service
        .list_departments()
        .await?
        .into_iter()
        .map(DepartmentResponse::from)
        .collect();

    Ok(Json(departments))
}

pub async fn get_department_handler(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
) -> ApiResult<Json<DepartmentResponse>> {
    let department = state
        .organization_service
        .get_department(DepartmentId::new(department_id))
        .await?;

    Ok(Json(DepartmentResponse::from(department)))
}

pub async fn create_department_handler(
    State(state): State<AppState>,
    Json(payload): Json<DepartmentRequest>,
) -> ApiResult<(StatusCode, Json<DepartmentResponse>)> {
    let department = state
        .organization_service
        .create_department(DepartmentChanges::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(DepartmentResponse::from(department))))
}

pub async fn update_department_handler(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
    Json(payload): Json<DepartmentRequest>,
) -> ApiResult<Json<DepartmentResponse>> {
    let department = state
        .organization_service
        .update_department(
            DepartmentId::new(department_id),
            DepartmentChanges::from(payload),
        )
        .await?;

    Ok(Json(DepartmentResponse::from(department)))
}

pub async fn delete_department_handler(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .organization_service
        .delete_department(DepartmentId::new(department_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_designations_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DesignationResponse>>> {
    let designations = state
        .organization_service
        .list_designations()
        .await?
        .into_iter()
        .map(DesignationResponse::from)
        .collect();

    Ok(Json(designations))
}
