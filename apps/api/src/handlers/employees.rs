use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use qorehr_application::EmployeeChanges;
use qorehr_domain::{BranchId, EmployeeId};

use crate::dto::{
    BranchEmployeesResponse, BranchGroupResponse, EmployeeListQuery, EmployeeProfileResponse,
    EmployeeRequest, EmployeeResponse, PaginatedResponse, PaginationResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod directory;
mod lifecycle;
mod profile;

pub use directory::{
    get_employee_handler, list_branch_employees_handler, list_employees_by_branch_handler,
    list_employees_handler,
};
pub use lifecycle::{create_employee_handler, delete_employee_handler, update_employee_handler};
pub use profile::employee_profile_handler;
