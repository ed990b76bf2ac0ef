use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorResponse;
use crate::services::SeriesError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    DatabaseError(String),

    ValidationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            // Store errors are passed through verbatim to the client.
            Self::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            Self::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorResponse::new(error_message))).into_response()
    }
}

impl From<SeriesError> for ApiError {
    fn from(err: SeriesError) -> Self {
        match err {
            SeriesError::NotFound => Self::series_not_found(),
            SeriesError::LastEpisode => Self::validation(SeriesError::LastEpisode.to_string()),
            SeriesError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(rejection.body_text())
    }
}

impl ApiError {
    pub fn series_not_found() -> Self {
        Self::NotFound("Series not found".to_string())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_error_mapping() {
        let not_found = ApiError::from(SeriesError::NotFound).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let last = ApiError::from(SeriesError::LastEpisode).into_response();
        assert_eq!(last.status(), StatusCode::BAD_REQUEST);

        let db = ApiError::from(SeriesError::Database("boom".to_string())).into_response();
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_store_error_text_is_passed_through() {
        use http_body_util::BodyExt;

        let message = r#"relation "series" does not exist"#;
        let err = ApiError::from(SeriesError::Database(message.to_string()));
        assert_eq!(err.to_string(), format!("Database error: {message}"));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], message);
    }
}
