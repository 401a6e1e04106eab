//! Schema initialization for the Item table

use sqlx::SqlitePool;
use tracing::info;

/// Create the `Item` table and its date index if they do not exist.
///
/// Safe to run on every startup.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("running item migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "Item" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            count REAL NOT NULL,
            day INTEGER NOT NULL,
            month INTEGER NOT NULL,
            year INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_item_date ON "Item" (day, month, year)
        "#,
    )
    .execute(pool)
    .await?;

    info!("item migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = create_memory_pool().await.unwrap();
        run(&pool).await.unwrap();
        run(&pool).await.unwrap();

        let (tables,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'Item'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(tables, 1);
    }
}
