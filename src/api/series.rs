use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{ApiError, AppState, MessageResponse, StatusUpdateRequest};
use crate::api::validation::{validate_status, validate_title};
use crate::models::series::{Series, SeriesInput};

// Bodies are decoded from raw bytes so a missing or non-JSON content type
// does not change how a payload is read.
fn decode<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    let Json(value) = Json::<T>::from_bytes(body)?;
    Ok(value)
}

pub async fn list_series(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Series>>, ApiError> {
    let series = state.series().list().await?;
    Ok(Json(series))
}

pub async fn get_series(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Series>, ApiError> {
    let series = state.series().get(&id).await?;
    Ok(Json(series))
}

pub async fn create_series(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Series>), ApiError> {
    let input: SeriesInput = decode(&body)?;
    validate_title(&input.title)?;

    let created = state.series().create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Full replace. Status is stored as given, without checking it against the
/// known watch states.
pub async fn update_series(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let input: SeriesInput = decode(&body)?;
    validate_title(&input.title)?;

    state.series().replace(&id, input).await?;
    Ok(Json(MessageResponse::new("Series updated successfully")))
}

pub async fn delete_series(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.series().delete(&id).await?;
    Ok(Json(MessageResponse::new("Series deleted successfully")))
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let request: StatusUpdateRequest = decode(&body)?;
    let status = validate_status(&request.status)?;

    state.series().set_status(&id, status).await?;
    Ok(Json(MessageResponse::new("Status updated successfully")))
}

pub async fn increment_episode(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.series().next_episode(&id).await?;
    Ok(Json(MessageResponse::new("Episode incremented successfully")))
}

pub async fn upvote_series(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.series().upvote(&id).await?;
    Ok(Json(MessageResponse::new("Score increased successfully")))
}

pub async fn downvote_series(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.series().downvote(&id).await?;
    Ok(Json(MessageResponse::new("Score decreased successfully")))
}
