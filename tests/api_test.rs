//! Integration tests for the widget endpoints.
//!
//! These tests use stub services to exercise the router without requiring
//! a database or the citations web service.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use faculty_widgets::api::{create_router, AppState};
use faculty_widgets::errors::{AppError, AppResult};
use faculty_widgets::services::{CitationService, DirectoryService};

// =============================================================================
// Stub Services for Testing
// =============================================================================

/// Directory stub that records the ids it was asked for
#[derive(Default)]
struct StubDirectory {
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl DirectoryService for StubDirectory {
    async fn center_people(&self, center_id: &str) -> AppResult<String> {
        self.calls.lock().unwrap().push(format!("center:{}", center_id));
        Ok(format!("<h2 id='director'>Director</h2><p>{}</p><hr>", center_id))
    }

    async fn department_people(&self, department_id: &str) -> AppResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("department:{}", department_id));
        Ok(format!("<h2 id='faculty'>Faculty</h2><p>{}</p><hr>", department_id))
    }
}

/// Citation stub that fails for college 0
struct StubCitations;

#[async_trait]
impl CitationService for StubCitations {
    async fn college_citations(&self, college_id: u32) -> AppResult<String> {
        if college_id == 0 {
            return Err(AppError::UpstreamStatus(500));
        }
        Ok(format!("<h3>2020</h3><p>college {}</p>", college_id))
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn test_app() -> (Router, Arc<StubDirectory>) {
    let directory = Arc::new(StubDirectory::default());
    let state = AppState::new(directory.clone(), Arc::new(StubCitations));
    (create_router(state), directory)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

// =============================================================================
// Center Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_center_people_returns_html_fragment() {
    let (app, directory) = test_app();

    let (status, content_type, body) = get(app, "/centers/people?center_id=metalab").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
    assert!(body.contains("<p>metalab</p>"));
    assert_eq!(*directory.calls.lock().unwrap(), vec!["center:metalab"]);
}

#[tokio::test]
async fn test_center_people_without_center_id_still_renders() {
    let (app, directory) = test_app();

    let (status, content_type, _) = get(app, "/centers/people").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
    assert_eq!(*directory.calls.lock().unwrap(), vec!["center:"]);
}

#[tokio::test]
async fn test_center_people_with_empty_center_id_still_renders() {
    let (app, directory) = test_app();

    let (status, _, _) = get(app, "/centers/people?center_id=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(*directory.calls.lock().unwrap(), vec!["center:"]);
}

// =============================================================================
// Department Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_department_people_passes_path_id() {
    let (app, directory) = test_app();

    let (status, _, body) = get(app, "/departments/academic_departments:189/people").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h2 id='faculty'>Faculty</h2>"));
    assert_eq!(
        *directory.calls.lock().unwrap(),
        vec!["department:academic_departments:189"]
    );
}

// =============================================================================
// Citation Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_college_citations_returns_html_fragment() {
    let (app, _) = test_app();

    let (status, content_type, body) = get(app, "/colleges/52/citations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
    assert!(body.contains("college 52"));
}

#[tokio::test]
async fn test_college_citations_rejects_non_numeric_id() {
    let (app, _) = test_app();

    let (status, _, _) = get(app, "/colleges/engineering/citations").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upstream_failure_maps_to_bad_gateway() {
    let (app, _) = test_app();

    let (status, content_type, body) = get(app, "/colleges/0/citations").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert!(body.contains("UPSTREAM_ERROR"));
    assert!(!body.contains("500"));
}

// =============================================================================
// Service Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_endpoint() {
    let (app, _) = test_app();

    let (status, _, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Faculty directory widgets");
}

#[tokio::test]
async fn test_health_without_database_is_unconfigured() {
    let (app, _) = test_app();

    let (status, _, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"unconfigured\""));
}

#[tokio::test]
async fn test_widgets_allow_cross_origin_embedding() {
    let (app, _) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/colleges/52/citations")
                .header(header::ORIGIN, "https://www.csun.edu")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_unknown_path_returns_json_not_found() {
    let (app, _) = test_app();

    let (status, _, body) = get(app, "/nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_openapi_document_lists_widgets() {
    let (app, _) = test_app();

    let (status, _, body) = get(app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/centers/people"));
    assert!(body.contains("/colleges/{college_id}/citations"));
}
