use crate::domain::SeriesId;
use crate::entities::{prelude::*, series};
use crate::models::series::{Series as SeriesRecord, SeriesInput, WatchStatus};
use anyhow::Result;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

/// Repository for the `series` table. Every method issues a single statement.
pub struct SeriesRepository {
    conn: DatabaseConnection,
}

impl SeriesRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: series::Model) -> SeriesRecord {
        SeriesRecord {
            id: m.id,
            title: m.title,
            description: m.description.unwrap_or_default(),
            status: m.status,
            current_episode: m.current_episode,
            total_episodes: m.total_episodes.unwrap_or_default(),
            score: m.score,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<SeriesRecord>> {
        let rows = Series::find()
            .order_by_asc(series::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: SeriesId) -> Result<Option<SeriesRecord>> {
        let row = Series::find_by_id(id.value()).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn exists(&self, id: SeriesId) -> Result<bool> {
        let count = Series::find_by_id(id.value()).count(&self.conn).await?;
        Ok(count > 0)
    }

    pub async fn insert(&self, input: &SeriesInput) -> Result<SeriesRecord> {
        let now = chrono::Utc::now().naive_utc();

        let active_model = series::ActiveModel {
            title: Set(input.title.clone()),
            description: Set(Some(input.description.clone())),
            status: Set(input.status.clone()),
            current_episode: Set(input.current_episode),
            total_episodes: Set(Some(input.total_episodes)),
            score: Set(input.score),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.conn).await?;
        Ok(Self::map_model(model))
    }

    /// Overwrites every mutable column. Timestamps are left untouched.
    pub async fn replace(&self, id: SeriesId, input: &SeriesInput) -> Result<u64> {
        let result = Series::update_many()
            .col_expr(series::Column::Title, Expr::value(input.title.clone()))
            .col_expr(
                series::Column::Description,
                Expr::value(input.description.clone()),
            )
            .col_expr(series::Column::Status, Expr::value(input.status.clone()))
            .col_expr(
                series::Column::CurrentEpisode,
                Expr::value(input.current_episode),
            )
            .col_expr(
                series::Column::TotalEpisodes,
                Expr::value(input.total_episodes),
            )
            .col_expr(series::Column::Score, Expr::value(input.score))
            .filter(series::Column::Id.eq(id.value()))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: SeriesId) -> Result<bool> {
        let result = Series::delete_by_id(id.value()).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn set_status(&self, id: SeriesId, status: WatchStatus) -> Result<u64> {
        let result = Series::update_many()
            .col_expr(series::Column::Status, Expr::value(status.as_str()))
            .filter(series::Column::Id.eq(id.value()))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Returns `(current_episode, total_episodes)`, with an unset total read as 0.
    pub async fn episode_progress(&self, id: SeriesId) -> Result<Option<(i32, i32)>> {
        let row: Option<(i32, Option<i32>)> = Series::find_by_id(id.value())
            .select_only()
            .column(series::Column::CurrentEpisode)
            .column(series::Column::TotalEpisodes)
            .into_tuple()
            .one(&self.conn)
            .await?;

        Ok(row.map(|(current, total)| (current, total.unwrap_or_default())))
    }

    pub async fn increment_episode(&self, id: SeriesId) -> Result<u64> {
        let result = Series::update_many()
            .col_expr(
                series::Column::CurrentEpisode,
                Expr::col(series::Column::CurrentEpisode).add(1),
            )
            .filter(series::Column::Id.eq(id.value()))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn adjust_score(&self, id: SeriesId, delta: i32) -> Result<u64> {
        let result = Series::update_many()
            .col_expr(
                series::Column::Score,
                Expr::col(series::Column::Score).add(delta),
            )
            .filter(series::Column::Id.eq(id.value()))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected)
    }
}
