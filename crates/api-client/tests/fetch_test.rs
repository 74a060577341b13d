//! Integration tests for `CandidateClient` against an in-process HTTP server.

use api_client::{ApiClientError, CandidateClient, ClientConfig};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use candidates::{Clearance, DataLoadError};
use serde_json::{Value, json};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral port and return its address.
async fn spawn_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> CandidateClient {
    let config = ClientConfig::default().with_base_url(format!("http://{addr}/api"));
    CandidateClient::new(config).unwrap()
}

fn payload() -> Value {
    json!([
        {
            "user_id": 2,
            "full_name": "Tom Reyes",
            "user_name": "Tom Reyes",
            "email": "tom@example.com",
            "department": "G7",
            "country": "UK",
            "latest_cv_title": "Developer",
            "skills": "Rust, Go",
            "availability": 80,
            "clearance": null
        },
        {
            "user_id": 1,
            "full_name": "Ana Lima",
            "user_name": "Ana Lima",
            "email": "ana@example.com",
            "department": "G6",
            "country": "UK",
            "latest_cv_title": "Analyst",
            "skills": "Python, SQL",
            "availability": 30,
            "clearance": "SC"
        }
    ])
}

#[tokio::test]
async fn test_fetch_returns_candidates_in_order() {
    let app = Router::new().route("/api/all-candidates", get(|| async { Json(payload()) }));
    let addr = spawn_server(app).await;

    let candidates = client_for(addr).fetch_all_candidates().await.unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].user_id, 2);
    assert_eq!(candidates[0].clearance, None);
    assert_eq!(candidates[1].user_id, 1);
    assert_eq!(candidates[1].clearance, Some(Clearance::Sc));
    assert_eq!(candidates[1].skills.as_deref(), Some("Python, SQL"));
}

#[tokio::test]
async fn test_fetch_empty_list() {
    let app = Router::new().route("/api/all-candidates", get(|| async { Json(json!([])) }));
    let addr = spawn_server(app).await;

    let candidates = client_for(addr).fetch_all_candidates().await.unwrap();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_fetch_server_error() {
    let app = Router::new().route(
        "/api/all-candidates",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
    );
    let addr = spawn_server(app).await;

    let err = client_for(addr).fetch_all_candidates().await.unwrap_err();
    match err {
        ApiClientError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "database unavailable");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_unknown_route_is_status_error() {
    let addr = spawn_server(Router::new()).await;

    let err = client_for(addr).fetch_all_candidates().await.unwrap_err();
    assert!(matches!(err, ApiClientError::Status { status, .. } if status.as_u16() == 404));
}

#[tokio::test]
async fn test_fetch_malformed_payload() {
    let app = Router::new().route(
        "/api/all-candidates",
        get(|| async { Json(json!({"candidates": []})) }),
    );
    let addr = spawn_server(app).await;

    let err = client_for(addr).fetch_all_candidates().await.unwrap_err();
    assert!(matches!(err, ApiClientError::InvalidJson(_)));
}

#[tokio::test]
async fn test_fetch_tolerates_loosely_typed_fields() {
    let app = Router::new().route(
        "/api/all-candidates",
        get(|| async {
            Json(json!([
                { "user_id": 1, "full_name": "Ana Lima", "department": "G6", "clearance": "SC" },
                { "user_id": 2, "full_name": "Tom Reyes", "department": 5, "clearance": true }
            ]))
        }),
    );
    let addr = spawn_server(app).await;

    let candidates = client_for(addr).fetch_all_candidates().await.unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[1].department.as_deref(), Some("5"));
    assert_eq!(candidates[1].clearance, Some(Clearance::Other("true".to_string())));
}

#[tokio::test]
async fn test_fetch_record_without_id_is_record_error() {
    let app = Router::new().route(
        "/api/all-candidates",
        get(|| async { Json(json!([{ "user_id": 1 }, { "full_name": "No Id" }])) }),
    );
    let addr = spawn_server(app).await;

    let err = client_for(addr).fetch_all_candidates().await.unwrap_err();
    assert!(matches!(
        err,
        ApiClientError::InvalidRecord(DataLoadError::ParseError { record: 1, .. })
    ));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Reserve a port, then close it so nothing is listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr).fetch_all_candidates().await.unwrap_err();
    assert!(matches!(err, ApiClientError::Request(_)));
}
