use super::*;

pub async fn create_employee_handler(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeRequest>,
) -> ApiResult<(StatusCode, Json<EmployeeResponse>)> {
    let employee = state
        .employee_service
        .create_employee(EmployeeChanges::try_from(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

pub async fn update_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
    Json(payload): Json<EmployeeRequest>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .update_employee(
            EmployeeId::new(employee_id),
            EmployeeChanges::try_from(payload)?,
        )
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// Soft-deletes the employee by deactivating the record.
pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .employee_service
        .deactivate_employee(EmployeeId::new(employee_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
