//! Table bootstrap. The `series` table is created when missing and never altered.

use crate::entities::{prelude::*, series};
use sea_orm::sea_query::{ColumnDef, Expr, SimpleExpr, Table, TableCreateStatement};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

/// Counters must stay within `i32`. SQLite widens integers to 64 bits on its own,
/// so an overflowing `UPDATE` has to be rejected by the table.
fn within_i32(column: series::Column) -> SimpleExpr {
    Expr::col(column).between(i32::MIN, i32::MAX)
}

fn create_series_table() -> TableCreateStatement {
    Table::create()
        .table(Series)
        .if_not_exists()
        .col(
            ColumnDef::new(series::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(series::Column::Title)
                .string_len(255)
                .not_null(),
        )
        .col(ColumnDef::new(series::Column::Description).text().null())
        .col(
            ColumnDef::new(series::Column::Status)
                .string_len(50)
                .not_null()
                .default("pending"),
        )
        .col(
            ColumnDef::new(series::Column::CurrentEpisode)
                .integer()
                .not_null()
                .default(0)
                .check(within_i32(series::Column::CurrentEpisode)),
        )
        .col(ColumnDef::new(series::Column::TotalEpisodes).integer().null())
        .col(
            ColumnDef::new(series::Column::Score)
                .integer()
                .not_null()
                .default(0)
                .check(within_i32(series::Column::Score)),
        )
        .col(
            ColumnDef::new(series::Column::CreatedAt)
                .date_time()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(series::Column::UpdatedAt)
                .date_time()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    conn.execute(backend.build(&create_series_table())).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbBackend;

    #[test]
    fn test_postgres_ddl() {
        let sql = DbBackend::Postgres.build(&create_series_table()).sql;

        assert!(sql.starts_with(r#"CREATE TABLE IF NOT EXISTS "series""#));
        assert!(sql.contains(r#""title" varchar(255) NOT NULL"#));
        assert!(sql.contains("DEFAULT 'pending'"));
        assert!(sql.contains("DEFAULT CURRENT_TIMESTAMP"));
    }

    #[test]
    fn test_counters_are_range_checked() {
        let sql = DbBackend::Sqlite.build(&create_series_table()).sql;

        assert!(sql.contains("CHECK"));
        assert!(sql.contains(r#""score" BETWEEN -2147483648 AND 2147483647"#));
        assert!(sql.contains(r#""current_episode" BETWEEN -2147483648 AND 2147483647"#));
    }
}
