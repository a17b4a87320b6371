use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use qorehr_application::{ScreeningChanges, UpsertOutcome};
use qorehr_domain::{JobId, ScreeningId};

use crate::dto::{
    ListResponse, PaginatedResponse, ScreeningListQuery, ScreeningRequest, ScreeningResponse,
    ScreeningUpsertResponse, ScreeningWithEmployeeResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod lookups;
mod records;

pub use lookups::{
    get_screening_with_employee_handler, list_screenings_by_call_handler,
    list_screenings_by_job_handler, list_screenings_by_status_handler,
    list_screenings_by_user_handler, list_screenings_with_employee_handler,
};
pub use records::{
    delete_screening_handler, get_screening_handler, list_screenings_handler,
    update_screening_handler, upsert_screening_handler,
};
