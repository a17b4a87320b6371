use chrono::{DateTime, NaiveDate, Utc};
use qorehr_core::{AppError, AppResult, Page, PageRequest};
use serde::Serialize;
use ts_rs::TS;

/// Health status of one backing dependency.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-dependency-status.ts"
)]
pub struct HealthDependencyStatus {
    pub status: &'static str,
    pub detail: Option<String>,
}

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ready: bool,
    pub postgres: HealthDependencyStatus,
    pub redis: HealthDependencyStatus,
}

/// Paging metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/pagination-response.ts"
)]
pub struct PaginationResponse {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub pages: u64,
}

impl PaginationResponse {
    /// Metadata for `total` rows split into pages of the requested size.
    #[must_use]
    pub fn new(total: u64, request: PageRequest) -> Self {
        Self {
            total,
            page: request.page(),
            limit: request.limit(),
            pages: total.div_ceil(u64::from(request.limit())),
        }
    }
}

impl<T> From<&Page<T>> for PaginationResponse {
    fn from(page: &Page<T>) -> Self {
        Self::new(page.total, page.request)
    }
}

/// One page of records.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/paginated-response.ts"
)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationResponse,
}

impl<T> PaginatedResponse<T> {
    /// Converts a domain page into its transport form.
    pub fn from_page<U>(page: Page<U>) -> Self
    where
        T: From<U>,
    {
        let pagination = PaginationResponse::from(&page);
        Self {
            data: page.items.into_iter().map(T::from).collect(),
            pagination,
        }
    }
}

/// Unpaged lookup result.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/list-response.ts"
)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> ListResponse<T> {
    /// Converts domain records into their transport form.
    pub fn from_items<U>(items: Vec<U>) -> Self
    where
        T: From<U>,
    {
        let data: Vec<T> = items.into_iter().map(T::from).collect();
        Self {
            count: data.len(),
            data,
        }
    }
}

pub(crate) fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339()
}

pub(crate) fn format_date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Parses an optional `YYYY-MM-DD` request field. Blank values count as absent.
pub(crate) fn parse_date(field_name: &str, value: Option<String>) -> AppResult<Option<NaiveDate>> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(|value| {
            NaiveDate::parse_from_str(value.as_str(), "%Y-%m-%d").map_err(|_| {
                AppError::Validation(format!(
                    "{field_name} must be a YYYY-MM-DD date, got '{value}'"
                ))
            })
        })
        .transpose()
}
