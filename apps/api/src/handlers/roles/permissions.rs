use super::*;

pub async fn list_permission_categories_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PermissionCategoryResponse>>> {
    let categories = state
        .role_admin_service
        .list_permission_categories()
        .await?
        .into_iter()
        .map(PermissionCategoryResponse::from)
        .collect();

    Ok(Json(categories))
}

pub async fn list_role_permissions_handler(
    State(state): State<AppState>,
    Path(role_id): Path<i64>,
) -> ApiResult<Json<Vec<PermissionEntryResponse>>> {
    let entries = state
        .role_admin_service
        .role_permissions(RoleId::new(role_id))
        .await?
        .into_iter()
        .map(PermissionEntryResponse::from)
        .collect();

    Ok(Json(entries))
}

pub async fn save_role_permission_handler(
    State(state): State<AppState>,
    Path(role_id): Path<i64>,
    Json(payload): Json<SaveRolePermissionRequest>,
) -> ApiResult<Json<PermissionEntryResponse>> {
    let entry = state
        .role_admin_service
        .save_role_permission(RoleId::new(role_id), payload.category_id(), payload.flags())
        .await?;

    Ok(Json(PermissionEntryResponse::from(entry)))
}
