use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use qorehr_application::{CallInsightService, CallTranscriptGateway};
use qorehr_core::AppResult;
use qorehr_infrastructure::{InMemoryCallInsightCache, InMemoryHrStore};

use crate::api_services::{RepositorySet, assemble_app_state};

use super::build_router;

struct FixedTranscriptGateway;

#[async_trait]
impl CallTranscriptGateway for FixedTranscriptGateway {
    async fn fetch_call_messages(&self, call_id: &str) -> AppResult<Value> {
        Ok(json!({
            "call_id": call_id,
            "results": [
                {"role": "MESSAGE_ROLE_AGENT", "text": "Tell me about your last project."},
                {"role": "MESSAGE_ROLE_USER", "text": "I built a payroll service."}
            ]
        }))
    }

    async fn fetch_call_message(&self, call_id: &str, message_id: &str) -> AppResult<Value> {
        Ok(json!({"call_id": call_id, "message_id": message_id, "text": "hello"}))
    }
}

fn test_router() -> Router {
    let store = Arc::new(InMemoryHrStore::with_default_catalog());
    let call_insight_service = CallInsightService::new(Arc::new(FixedTranscriptGateway))
        .with_cache(Arc::new(InMemoryCallInsightCache::new()), 60);
    let state = assemble_app_state(
        RepositorySet::in_memory(store),
        call_insight_service,
        None,
        None,
    );

    match build_router(state, "http://localhost:3000") {
        Ok(router) => router,
        Err(error) => panic!("router should build: {error}"),
    }
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    };
    let request = match request {
        Ok(request) => request,
        Err(error) => panic!("request should build: {error}"),
    };

    let response = match router.clone().oneshot(request).await {
        Ok(response) => response,
        Err(error) => panic!("router is infallible: {error}"),
    };
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = match to_bytes(response.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => panic!("body should be readable: {error}"),
    };
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(error) => panic!("body should be json: {error}"),
        }
    };

    (status, headers, value)
}

async fn create_employee(router: &Router, code: &str) -> i64 {
    let (status, _, body) = send(
        router,
        Method::POST,
        "/api/employees",
        Some(json!({
            "employee_id": code,
            "first_name": "Asha",
            "last_name": "Nair",
            "email": format!("{code}@example.com"),
            "password": "correct horse battery",
            "hire_date": "2024-03-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    match body["id"].as_i64() {
        Some(id) => id,
        None => panic!("created employee should carry an id: {body}"),
    }
}

#[tokio::test]
async fn health_reports_disabled_dependencies() {
    let router = test_router();

    let (status, _, body) = send(&router, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["ready"], true);
    assert_eq!(body["postgres"]["status"], "disabled");
    assert_eq!(body["redis"]["status"], "disabled");
}

#[tokio::test]
async fn profile_without_roles_has_empty_sidebar() {
    let router = test_router();
    let employee_id = create_employee(&router, "EMP-001").await;

    let (status, _, body) = send(
        &router,
        Method::GET,
        &format!("/api/employees/{employee_id}/profile"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["employee_details"]["employee_code"], "EMP-001");
    assert_eq!(body["employee_details"]["hire_date"], "2024-03-01");
    assert_eq!(body["branch_details"], Value::Null);
    assert_eq!(body["role_details"], json!([]));
    assert_eq!(body["sidebar_menus"], json!([]));
}

#[tokio::test]
async fn assigned_recruiter_role_shows_recruitment_menu() {
    let router = test_router();
    let employee_id = create_employee(&router, "EMP-002").await;

    let (status, _, assignment) = send(
        &router,
        Method::POST,
        &format!("/api/employees/{employee_id}/roles"),
        Some(json!({"role_id": 4, "is_primary": true})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{assignment}");
    assert_eq!(assignment["role_id"], 4);

    let (status, _, body) = send(
        &router,
        Method::GET,
        &format!("/api/employees/{employee_id}/profile"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let menus = match body["sidebar_menus"].as_array() {
        Some(menus) => menus.clone(),
        None => panic!("sidebar_menus should be an array: {body}"),
    };
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0]["menu"], "Recruitment");
    assert_eq!(body["role_details"][0]["role_details"]["slug"], "recruiter");
}

#[tokio::test]
async fn missing_employee_is_not_found() {
    let router = test_router();

    let (status, _, body) = send(&router, Method::GET, "/api/employees/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|message| message.contains("999"))
    );
}

#[tokio::test]
async fn malformed_date_is_rejected() {
    let router = test_router();

    let (status, _, body) = send(
        &router,
        Method::POST,
        "/api/employees",
        Some(json!({
            "employee_code": "EMP-003",
            "first_name": "Ravi",
            "password": "correct horse battery",
            "hire_date": "01/03/2024"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|message| message.contains("hire_date"))
    );
}

#[tokio::test]
async fn screening_post_creates_then_updates_same_user_and_job() {
    let router = test_router();
    let (status, _, department) = send(
        &router,
        Method::POST,
        "/api/departments",
        Some(json!({"name": "Engineering", "short_code": "ENG"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{department}");

    let (status, _, job) = send(
        &router,
        Method::POST,
        "/api/newjobs",
        Some(json!({
            "job_title": "Backend Engineer",
            "job_description": "Owns payroll services",
            "department_id": department["id"],
            "employment_type": "full_time"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{job}");
    let job_id = job["job_id"].clone();
    assert!(job_id.is_i64(), "{job}");

    let (status, _, created) = send(
        &router,
        Method::POST,
        "/api/employee-interview-screenings",
        Some(json!({"userid": "candidate-7", "job_id": job_id, "callid": "call-1"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["outcome"], "created");
    assert_eq!(created["data"]["job_id"], job_id);

    let (status, _, updated) = send(
        &router,
        Method::POST,
        "/api/employee-interview-screenings",
        Some(json!({"userid": "candidate-7", "job_id": job_id, "status": "completed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["outcome"], "updated");
    assert_eq!(updated["data"]["id"], created["data"]["id"]);
    assert_eq!(updated["data"]["call_id"], "call-1");

    let (status, _, by_user) = send(
        &router,
        Method::GET,
        "/api/employee-interview-screenings/user/candidate-7",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_user["count"], 1);
}

#[tokio::test]
async fn call_messages_carry_insight_headers() {
    let router = test_router();

    let (status, headers, body) = send(
        &router,
        Method::GET,
        "/api/qoreai/calls/call-9/messages",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(
        headers.get("x-qore-cache").and_then(|value| value.to_str().ok()),
        Some("MISS")
    );
    assert!(headers.contains_key("x-qore-version"));
    assert!(headers.contains_key("x-qore-request-id"));
    assert_eq!(body["data"]["call_id"], "call-9");

    let (_, headers, _) = send(
        &router,
        Method::GET,
        "/api/qoreai/calls/call-9/messages",
        None,
    )
    .await;
    assert_eq!(
        headers.get("x-qore-cache").and_then(|value| value.to_str().ok()),
        Some("HIT")
    );
}
