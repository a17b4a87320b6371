use super::*;

pub async fn list_branches_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<BranchResponse>>> {
    let branches = state
        .organization_service
        .list_branches()
        .await?
        .into_iter()
        .map(BranchResponse::from)
        .collect();

    Ok(Json(branches))
}

pub async fn get_branch_handler(
    State(state): State<AppState>,
    Path(branch_id): Path<i64>,
) -> ApiResult<Json<BranchResponse>> {
    let branch = state
        .organization_service
        .get_branch(BranchId::new(branch_id))
        .await?;

    Ok(Json(BranchResponse::from(branch)))
}

pub async fn create_branch_handler(
    State(state): State<AppState>,
    Json(payload): Json<BranchRequest>,
) -> ApiResult<(StatusCode, Json<BranchResponse>)> {
    let branch = state
        .organization_service
        .create_branch(BranchChanges::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(BranchResponse::from(branch))))
}

pub async fn update_branch_handler(
    State(state): State<AppState>,
    Path(branch_id): Path<i64>,
    Json(payload): Json<BranchRequest>,
) -> ApiResult<Json<BranchResponse>> {
    let branch = state
        .organization_service
        .update_branch(BranchId::new(branch_id), BranchChanges::from(payload))
        .await?;

    Ok(Json(BranchResponse::from(branch)))
}

pub async fn delete_branch_handler(
    State(state): State<AppState>,
    Path(branch_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .organization_service
        .delete_branch(BranchId::new(branch_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
