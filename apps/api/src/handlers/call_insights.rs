use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use uuid::Uuid;

use qorehr_application::{CallInsight, INTEGRATION_VERSION};

use crate::dto::CallAnalysisQuery;
use crate::error::ApiResult;
use crate::state::AppState;

const CACHE_HEADER: &str = "x-qore-cache";
const VERSION_HEADER: &str = "x-qore-version";
const REQUEST_ID_HEADER: &str = "x-qore-request-id";

pub async fn call_messages_handler(
    State(state): State<AppState>,
    Path(call_id): Path<String>,
) -> ApiResult<Response> {
    let insight = state.call_insight_service.call_messages(&call_id).await?;
    Ok(insight_response(insight))
}

pub async fn call_message_handler(
    State(state): State<AppState>,
    Path((call_id, message_id)): Path<(String, String)>,
) -> ApiResult<Response> {
    let insight = state
        .call_insight_service
        .call_message(&call_id, &message_id)
        .await?;
    Ok(insight_response(insight))
}

pub async fn call_analysis_handler(
    State(state): State<AppState>,
    Path(call_id): Path<String>,
    Query(query): Query<CallAnalysisQuery>,
) -> ApiResult<Response> {
    let insight = state
        .call_insight_service
        .analyze_call(&call_id, query.analysis_type())
        .await?;
    Ok(insight_response(insight))
}

fn insight_response(insight: CallInsight) -> Response {
    let mut response = Json::<Value>(insight.body).into_response();
    let headers = response.headers_mut();
    headers.insert(
        CACHE_HEADER,
        HeaderValue::from_static(insight.cache.as_str()),
    );
    headers.insert(VERSION_HEADER, HeaderValue::from_static(INTEGRATION_VERSION));
    if let Ok(request_id) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
        headers.insert(REQUEST_ID_HEADER, request_id);
    }
    response
}
