use super::*;

pub async fn list_employees_handler(
    State(state): State<AppState>,
    Query(query): Query<EmployeeListQuery>,
) -> ApiResult<Json<PaginatedResponse<EmployeeResponse>>> {
    let page = state
        .employee_service
        .list_employees(&query.filter(), query.page_request())
        .await?;

    Ok(Json(PaginatedResponse::from_page(page)))
}

pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .get_employee(EmployeeId::new(employee_id))
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

pub async fn list_employees_by_branch_handler(
    State(state): State<AppState>,
    Query(query): Query<EmployeeListQuery>,
) -> ApiResult<Json<PaginatedResponse<BranchGroupResponse>>> {
    let page_request = query.page_request();
    let grouped = state
        .employee_service
        .list_employees_by_branch(&query.filter(), page_request)
        .await?;

    Ok(Json(PaginatedResponse {
        data: grouped
            .groups
            .into_iter()
            .map(BranchGroupResponse::from)
            .collect(),
        pagination: PaginationResponse::new(grouped.total, page_request),
    }))
}

pub async fn list_branch_employees_handler(
    State(state): State<AppState>,
    Path(branch_id): Path<i64>,
    Query(query): Query<EmployeeListQuery>,
) -> ApiResult<Json<BranchEmployeesResponse>> {
    let group = state
        .employee_service
        .list_branch_employees(
            BranchId::new(branch_id),
            &query.filter(),
            query.page_request(),
        )
        .await?;

    Ok(Json(BranchEmployeesResponse::from_group(group)?))
}
