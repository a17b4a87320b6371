use super::*;

pub async fn assign_role_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
    Json(payload): Json<AssignRoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleAssignmentResponse>)> {
    let assignment = state
        .role_admin_service
        .assign_role(EmployeeId::new(employee_id), payload.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RoleAssignmentResponse::from(assignment)),
    ))
}

pub async fn remove_role_assignment_handler(
    State(state): State<AppState>,
    Path(assignment_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .role_admin_service
        .remove_assignment(RoleAssignmentId::new(assignment_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
