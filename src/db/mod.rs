use crate::domain::SeriesId;
use crate::models::series::{Series, SeriesInput, WatchStatus};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod repositories;
pub mod schema;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        if db_url.starts_with("sqlite:") && !db_url.contains(":memory:") {
            let path_str = db_url
                .trim_start_matches("sqlite:")
                .trim_start_matches("//")
                .split('?')
                .next()
                .unwrap_or_default();
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        schema::ensure_schema(&conn).await?;

        info!(
            "Database connected & schema ready (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn series_repo(&self) -> repositories::series::SeriesRepository {
        repositories::series::SeriesRepository::new(self.conn.clone())
    }

    pub async fn list_series(&self) -> Result<Vec<Series>> {
        self.series_repo().list_all().await
    }

    pub async fn get_series(&self, id: SeriesId) -> Result<Option<Series>> {
        self.series_repo().get(id).await
    }

    pub async fn series_exists(&self, id: SeriesId) -> Result<bool> {
        self.series_repo().exists(id).await
    }

    pub async fn insert_series(&self, input: &SeriesInput) -> Result<Series> {
        self.series_repo().insert(input).await
    }

    pub async fn replace_series(&self, id: SeriesId, input: &SeriesInput) -> Result<u64> {
        self.series_repo().replace(id, input).await
    }

    pub async fn delete_series(&self, id: SeriesId) -> Result<bool> {
        self.series_repo().delete(id).await
    }

    pub async fn set_series_status(&self, id: SeriesId, status: WatchStatus) -> Result<u64> {
        self.series_repo().set_status(id, status).await
    }

    pub async fn get_episode_progress(&self, id: SeriesId) -> Result<Option<(i32, i32)>> {
        self.series_repo().episode_progress(id).await
    }

    pub async fn increment_episode(&self, id: SeriesId) -> Result<u64> {
        self.series_repo().increment_episode(id).await
    }

    pub async fn adjust_score(&self, id: SeriesId, delta: i32) -> Result<u64> {
        self.series_repo().adjust_score(id, delta).await
    }
}
