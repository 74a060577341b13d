//! Loading a search session from a live endpoint.

use api_client::{CandidateClient, ClientConfig};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use pipeline::{ANY, FilterField};
use search::ManualSearch;
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

async fn spawn_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(base_url: String) -> CandidateClient {
    let config = ClientConfig::default()
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5));
    CandidateClient::new(config).unwrap()
}

fn ids(search: &ManualSearch) -> Vec<u64> {
    search.results().iter().map(|c| c.user_id).collect()
}

#[tokio::test]
async fn test_load_then_filter() {
    let payload = json!([
        { "user_id": 1, "full_name": "Ana Lima", "country": "UK", "department": "G6",
          "latest_cv_title": "Analyst", "skills": "Python, SQL", "availability": 30, "clearance": "SC" },
        { "user_id": 2, "full_name": "Tom Reyes", "country": "UK", "department": "G7",
          "latest_cv_title": "Developer", "skills": "Rust", "availability": 80, "clearance": null },
        { "user_id": 3, "full_name": "Marie Dubois", "country": "France", "department": "G7",
          "latest_cv_title": "Developer", "skills": null, "availability": null, "clearance": "" }
    ]);
    let app = Router::new().route(
        "/api/all-candidates",
        get(move || {
            let payload = payload.clone();
            async move { Json(payload) }
        }),
    );
    let addr = spawn_server(app).await;

    let mut search = ManualSearch::new();
    search.load(&client_for(format!("http://{addr}/api"))).await;

    assert!(!search.is_loading());
    assert_eq!(search.error(), None);
    assert_eq!(ids(&search), vec![1, 2, 3]);
    assert_eq!(search.options().locations, vec![ANY, "France", "UK"]);
    assert_eq!(search.options().skills, vec![ANY, "Python", "Rust", "SQL"]);

    search.update(FilterField::Clearance, "SC").unwrap();
    assert_eq!(ids(&search), vec![1]);

    search.update(FilterField::Clearance, ANY).unwrap();
    search.update(FilterField::Availability, ">= 75%").unwrap();
    assert_eq!(ids(&search), vec![2]);
}

#[tokio::test]
async fn test_server_error_leaves_search_empty() {
    let app = Router::new().route(
        "/api/all-candidates",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
    );
    let addr = spawn_server(app).await;

    let mut search = ManualSearch::new();
    search.load(&client_for(format!("http://{addr}/api"))).await;

    assert!(!search.is_loading());
    assert!(search.results().is_empty());
    let message = search.error().unwrap();
    assert!(message.contains("500"), "unexpected error: {message}");
}

#[tokio::test]
async fn test_unreachable_backend_keeps_previous_results() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut search = ManualSearch::new();
    let mut existing = candidates::CandidateSummary::new(9);
    existing.country = Some("UK".to_string());
    search.load_from(vec![existing]);

    search.load(&client_for(format!("http://{addr}/api"))).await;

    assert!(search.error().is_some());
    assert_eq!(ids(&search), vec![9]);
    assert_eq!(search.options().locations, vec![ANY, "UK"]);
}
