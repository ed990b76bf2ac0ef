//! Drives the router with a substitute service, without any database.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use series_tracker::api::AppState;
use series_tracker::models::series::{Series, SeriesInput, WatchStatus};
use series_tracker::services::{SeriesError, SeriesService};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Keeps one fixed series and records every status change it receives.
struct FixedSeries {
    status_changes: Mutex<Vec<(String, WatchStatus)>>,
}

fn fixture() -> Series {
    Series {
        id: 1,
        title: "Mocked".to_string(),
        description: String::new(),
        status: "pending".to_string(),
        current_episode: 0,
        total_episodes: 3,
        score: 0,
    }
}

#[async_trait::async_trait]
impl SeriesService for FixedSeries {
    async fn list(&self) -> Result<Vec<Series>, SeriesError> {
        Ok(vec![fixture()])
    }

    async fn get(&self, id: &str) -> Result<Series, SeriesError> {
        if id == "1" {
            Ok(fixture())
        } else {
            Err(SeriesError::NotFound)
        }
    }

    async fn create(&self, _input: SeriesInput) -> Result<Series, SeriesError> {
        Err(SeriesError::Database("connection refused".to_string()))
    }

    async fn replace(&self, _id: &str, _input: SeriesInput) -> Result<(), SeriesError> {
        Err(SeriesError::NotFound)
    }

    async fn delete(&self, _id: &str) -> Result<(), SeriesError> {
        Err(SeriesError::NotFound)
    }

    async fn set_status(&self, id: &str, status: WatchStatus) -> Result<(), SeriesError> {
        self.status_changes
            .lock()
            .unwrap()
            .push((id.to_string(), status));
        Ok(())
    }

    async fn next_episode(&self, _id: &str) -> Result<(), SeriesError> {
        Err(SeriesError::LastEpisode)
    }

    async fn upvote(&self, _id: &str) -> Result<(), SeriesError> {
        Ok(())
    }

    async fn downvote(&self, _id: &str) -> Result<(), SeriesError> {
        Ok(())
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_handlers_use_injected_service() {
    let service = Arc::new(FixedSeries {
        status_changes: Mutex::new(Vec::new()),
    });
    let app = series_tracker::api::router(Arc::new(AppState::new(service.clone())));

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/series/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Mocked");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/series/abc/status")
                .body(Body::from(r#"{"status": "completed"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let changes = service.status_changes.lock().unwrap().clone();
    assert_eq!(changes, vec![("abc".to_string(), WatchStatus::Completed)]);
}

#[tokio::test]
async fn test_store_errors_pass_through_verbatim() {
    let service = Arc::new(FixedSeries {
        status_changes: Mutex::new(Vec::new()),
    });
    let app = series_tracker::api::router(Arc::new(AppState::new(service)));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/series")
                .body(Body::from(r#"{"title": "Foo"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "connection refused");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/series/1/episode")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Already at the last episode"
    );
}
