use axum::Router;
use axum::routing::{delete, get, post, put};
use qorehr_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;

#[cfg(test)]
mod tests;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = cors::build_cors_layer(frontend_url)?;

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(employee_routes())
        .merge(organization_routes())
        .merge(role_routes())
        .merge(recruitment_routes())
        .merge(call_insight_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}

fn employee_routes() -> Router<AppState> {
    use handlers::employees;

    Router::new()
        .route(
            "/api/employees",
            get(employees::list_employees_handler).post(employees::create_employee_handler),
        )
        .route(
            "/api/employees/by-branch",
            get(employees::list_employees_by_branch_handler),
        )
        .route(
            "/api/employees/branch/{branch_id}",
            get(employees::list_branch_employees_handler),
        )
        .route(
            "/api/employees/{employee_id}",
            get(employees::get_employee_handler)
                .put(employees::update_employee_handler)
                .delete(employees::delete_employee_handler),
        )
        .route(
            "/api/employees/{employee_id}/profile",
            get(employees::employee_profile_handler),
        )
        .route(
            "/api/employees/{employee_id}/roles",
            post(handlers::roles::assign_role_handler),
        )
}

fn organization_routes() -> Router<AppState> {
    use handlers::organization;

    Router::new()
        .route(
            "/api/branches",
            get(organization::list_branches_handler).post(organization::create_branch_handler),
        )
        .route(
            "/api/branches/{branch_id}",
            get(organization::get_branch_handler)
                .put(organization::update_branch_handler)
                .delete(organization::delete_branch_handler),
        )
        .route(
            "/api/departments",
            get(organization::list_departments_handler)
                .post(organization::create_department_handler),
        )
        .route(
            "/api/departments/{department_id}",
            get(organization::get_department_handler)
                .put(organization::update_department_handler)
                .delete(organization::delete_department_handler),
        )
        .route(
            "/api/designations",
            get(organization::list_designations_handler),
        )
}

fn role_routes() -> Router<AppState> {
    use handlers::roles;

    Router::new()
        .route(
            "/api/roles",
            get(roles::list_roles_handler).post(roles::create_role_handler),
        )
        .route(
            "/api/roles/{role_id}",
            put(roles::update_role_handler).delete(roles::delete_role_handler),
        )
        .route(
            "/api/roles/{role_id}/permissions",
            get(roles::list_role_permissions_handler).put(roles::save_role_permission_handler),
        )
        .route(
            "/api/permission-categories",
            get(roles::list_permission_categories_handler),
        )
        .route(
            "/api/role-assignments/{assignment_id}",
            delete(roles::remove_role_assignment_handler),
        )
}

fn recruitment_routes() -> Router<AppState> {
    use handlers::{job_postings, screenings};

    Router::new()
        .route(
            "/api/newjobs",
            get(job_postings::list_job_postings_handler)
                .post(job_postings::create_job_posting_handler),
        )
        .route(
            "/api/newjobs/{job_id}",
            get(job_postings::get_job_posting_handler)
                .put(job_postings::update_job_posting_handler)
                .delete(job_postings::delete_job_posting_handler),
        )
        .route(
            "/api/employee-interview-screenings",
            get(screenings::list_screenings_handler).post(screenings::upsert_screening_handler),
        )
        .route(
            "/api/employee-interview-screenings/{screening_id}",
            get(screenings::get_screening_handler)
                .put(screenings::update_screening_handler)
                .delete(screenings::delete_screening_handler),
        )
        .route(
            "/api/employee-interview-screenings/call/{call_id}",
            get(screenings::list_screenings_by_call_handler),
        )
        .route(
            "/api/employee-interview-screenings/user/{user_id}",
            get(screenings::list_screenings_by_user_handler),
        )
        .route(
            "/api/employee-interview-screenings/job/{job_id}",
            get(screenings::list_screenings_by_job_handler),
        )
        .route(
            "/api/employee-interview-screenings/status/{status}",
            get(screenings::list_screenings_by_status_handler),
        )
        .route(
            "/api/employee-interview-screenings/with-employee/all",
            get(screenings::list_screenings_with_employee_handler),
        )
        .route(
            "/api/employee-interview-screenings/with-employee/{screening_id}",
            get(screenings::get_screening_with_employee_handler),
        )
}

fn call_insight_routes() -> Router<AppState> {
    use handlers::call_insights;

    Router::new()
        .route(
            "/api/qoreai/calls/{call_id}/messages",
            get(call_insights::call_messages_handler),
        )
        .route(
            "/api/qoreai/calls/{call_id}/messages/{message_id}",
            get(call_insights::call_message_handler),
        )
        .route(
            "/api/qoreai/calls/{call_id}/analysis",
            get(call_insights::call_analysis_handler),
        )
}
