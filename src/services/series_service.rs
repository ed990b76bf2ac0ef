//! Domain service for the series list.
//!
//! Handlers only talk to [`SeriesService`], so the HTTP layer can run against the
//! sea-orm backed implementation or any substitute (an in-memory store, a mock).

use crate::models::series::{Series, SeriesInput, WatchStatus};
use thiserror::Error;

/// Domain errors for series operations.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("Series not found")]
    NotFound,

    #[error("Already at the last episode")]
    LastEpisode,

    #[error("{0}")]
    Database(String),
}

impl From<anyhow::Error> for SeriesError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<sea_orm::DbErr> for SeriesError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

/// Operations over the series list.
///
/// Ids are taken exactly as they appear in the request path. Implementations
/// report an id that does not parse as [`SeriesError::Database`].
#[async_trait::async_trait]
pub trait SeriesService: Send + Sync {
    /// Lists every series.
    async fn list(&self) -> Result<Vec<Series>, SeriesError>;

    /// Fetches one series.
    ///
    /// # Errors
    ///
    /// - [`SeriesError::NotFound`] if no row has this id
    /// - [`SeriesError::Database`] on store failures
    async fn get(&self, id: &str) -> Result<Series, SeriesError>;

    /// Inserts a new series and returns it with its assigned id.
    /// An empty status is stored as `pending`.
    async fn create(&self, input: SeriesInput) -> Result<Series, SeriesError>;

    /// Overwrites every mutable field of an existing series.
    ///
    /// # Errors
    ///
    /// [`SeriesError::NotFound`] when the row is absent or the existence check
    /// itself fails.
    async fn replace(&self, id: &str, input: SeriesInput) -> Result<(), SeriesError>;

    /// Deletes a series, failing with [`SeriesError::NotFound`] if nothing was removed.
    async fn delete(&self, id: &str) -> Result<(), SeriesError>;

    /// Sets the watch status. Unknown ids are a silent no-op.
    async fn set_status(&self, id: &str, status: WatchStatus) -> Result<(), SeriesError>;

    /// Advances `current_episode` by one.
    ///
    /// # Errors
    ///
    /// - [`SeriesError::NotFound`] if no row has this id
    /// - [`SeriesError::LastEpisode`] if `current_episode >= total_episodes`
    async fn next_episode(&self, id: &str) -> Result<(), SeriesError>;

    /// Adds one to the score. Unknown ids are a silent no-op.
    async fn upvote(&self, id: &str) -> Result<(), SeriesError>;

    /// Subtracts one from the score. Unknown ids are a silent no-op.
    async fn downvote(&self, id: &str) -> Result<(), SeriesError>;
}

/// Applies creation defaults to an incoming payload.
#[must_use]
pub fn with_creation_defaults(mut input: SeriesInput) -> SeriesInput {
    if input.status.is_empty() {
        input.status = WatchStatus::default().as_str().to_string();
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_defaults_fill_status() {
        let input = with_creation_defaults(SeriesInput {
            title: "Foo".to_string(),
            ..Default::default()
        });
        assert_eq!(input.status, "pending");
    }

    #[test]
    fn test_creation_defaults_keep_explicit_status() {
        let input = with_creation_defaults(SeriesInput {
            title: "Foo".to_string(),
            status: "watching".to_string(),
            ..Default::default()
        });
        assert_eq!(input.status, "watching");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(SeriesError::NotFound.to_string(), "Series not found");
        assert_eq!(
            SeriesError::LastEpisode.to_string(),
            "Already at the last episode"
        );
        let err: SeriesError = anyhow::anyhow!("connection refused").into();
        assert_eq!(err.to_string(), "connection refused");
    }
}
