use super::*;

pub async fn employee_profile_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> ApiResult<Json<EmployeeProfileResponse>> {
    let profile = state
        .profile_service
        .employee_profile(EmployeeId::new(employee_id))
        .await?;

    Ok(Json(EmployeeProfileResponse::from(profile)))
}
