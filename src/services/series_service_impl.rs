//! `SeaORM` implementation of the [`SeriesService`] trait.

use crate::db::Store;
use crate::domain::SeriesId;
use crate::models::series::{Series, SeriesInput, WatchStatus};
use crate::services::series_service::{SeriesError, SeriesService, with_creation_defaults};
use std::sync::Arc;

pub struct SeaOrmSeriesService {
    store: Arc<Store>,
}

impl SeaOrmSeriesService {
    #[must_use]
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    fn parse_id(raw: &str) -> Result<SeriesId, SeriesError> {
        raw.parse::<SeriesId>()
            .map_err(|e| SeriesError::Database(e.to_string()))
    }
}

#[async_trait::async_trait]
impl SeriesService for SeaOrmSeriesService {
    async fn list(&self) -> Result<Vec<Series>, SeriesError> {
        Ok(self.store.list_series().await?)
    }

    async fn get(&self, id: &str) -> Result<Series, SeriesError> {
        let id = Self::parse_id(id)?;
        self.store
            .get_series(id)
            .await?
            .ok_or(SeriesError::NotFound)
    }

    async fn create(&self, input: SeriesInput) -> Result<Series, SeriesError> {
        let input = with_creation_defaults(input);
        Ok(self.store.insert_series(&input).await?)
    }

    async fn replace(&self, id: &str, input: SeriesInput) -> Result<(), SeriesError> {
        let Ok(id) = Self::parse_id(id) else {
            return Err(SeriesError::NotFound);
        };

        match self.store.series_exists(id).await {
            Ok(true) => {}
            Ok(false) => return Err(SeriesError::NotFound),
            Err(e) => {
                tracing::debug!("Existence check failed for series {}: {}", id.value(), e);
                return Err(SeriesError::NotFound);
            }
        }

        self.store.replace_series(id, &input).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), SeriesError> {
        let id = Self::parse_id(id)?;
        if self.store.delete_series(id).await? {
            Ok(())
        } else {
            Err(SeriesError::NotFound)
        }
    }

    async fn set_status(&self, id: &str, status: WatchStatus) -> Result<(), SeriesError> {
        let id = Self::parse_id(id)?;
        self.store.set_series_status(id, status).await?;
        Ok(())
    }

    async fn next_episode(&self, id: &str) -> Result<(), SeriesError> {
        let id = Self::parse_id(id)?;
        let (current, total) = self
            .store
            .get_episode_progress(id)
            .await?
            .ok_or(SeriesError::NotFound)?;

        if current >= total {
            return Err(SeriesError::LastEpisode);
        }

        self.store.increment_episode(id).await?;
        Ok(())
    }

    async fn upvote(&self, id: &str) -> Result<(), SeriesError> {
        let id = Self::parse_id(id)?;
        self.store.adjust_score(id, 1).await?;
        Ok(())
    }

    async fn downvote(&self, id: &str) -> Result<(), SeriesError> {
        let id = Self::parse_id(id)?;
        self.store.adjust_score(id, -1).await?;
        Ok(())
    }
}
