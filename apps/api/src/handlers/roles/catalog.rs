use super::*;

pub async fn list_roles_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .role_admin_service
        .list_roles()
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn create_role_handler(
    State(state): State<AppState>,
    Json(payload): Json<RoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let role = state
        .role_admin_service
        .create_role(RoleChanges::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

pub async fn update_role_handler(
    State(state): State<AppState>,
    Path(role_id): Path<i64>,
    Json(payload): Json<RoleRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let role = state
        .role_admin_service
        .update_role(RoleId::new(role_id), RoleChanges::from(payload))
        .await?;

    Ok(Json(RoleResponse::from(role)))
}

/// Deactivates the role; existing assignments stop contributing access.
pub async fn delete_role_handler(
    State(state): State<AppState>,
    Path(role_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .role_admin_service
        .deactivate_role(RoleId::new(role_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
