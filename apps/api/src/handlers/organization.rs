use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use qorehr_application::{BranchChanges, DepartmentChanges};
use qorehr_domain::{BranchId, DepartmentId};

use crate::dto::{
    BranchRequest, BranchResponse, DepartmentRequest, DepartmentResponse, DesignationResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod branches;
mod departments;

pub use branches::{
    create_branch_handler, delete_branch_handler, get_branch_handler, list_branches_handler,
    update_branch_handler,
};
pub use departments::{
    create_department_handler, delete_department_handler, get_department_handler,
    list_departments_handler, list_designations_handler, update_department_handler,
};
