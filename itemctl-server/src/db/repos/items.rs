//! Item repository
//!
//! - list / by_date: single ordered SELECT
//! - upsert: lookup on (name, day, month, year), then increment or insert
//! - total_count: SUM computed by SQLite

use std::fmt;

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::models::{CalendarDate, Item, ItemSummary, NewItem};

/// Which write a failed transaction was performing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Save,
    Update,
}

impl fmt::Display for WriteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Save => write!(f, "save item"),
            Self::Update => write!(f, "update item"),
        }
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("failed to {op}: {source}")]
    Write {
        op: WriteOp,
        #[source]
        source: sqlx::Error,
    },
}

impl DbError {
    fn save(source: sqlx::Error) -> Self {
        Self::Write {
            op: WriteOp::Save,
            source,
        }
    }

    fn update(source: sqlx::Error) -> Self {
        Self::Write {
            op: WriteOp::Update,
            source,
        }
    }
}

/// Outcome of an upsert
#[derive(Debug, Clone, PartialEq)]
pub enum Upserted {
    /// No row matched; a new one was inserted
    Created(Item),
    /// An existing row had its count increased
    Incremented(Item),
}

const ITEM_COLUMNS: &str = "id, name, count, day, month, year";

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All items, oldest id first.
    pub async fn list(&self) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>(&format!(
            r#"SELECT {ITEM_COLUMNS} FROM "Item" ORDER BY id ASC"#
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Add `item.count` to the row with the same name and date, or insert
    /// a new row when there is none.
    ///
    /// Lookup and write share one `BEGIN IMMEDIATE` transaction, so the
    /// write lock is taken up front and concurrent writers wait on the busy
    /// timeout instead of failing a SHARED -> RESERVED lock upgrade.
    pub async fn upsert(&self, item: &NewItem) -> Result<Upserted, DbError> {
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(DbError::save)?;

        let existing: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT id FROM "Item"
            WHERE name = ? AND day = ? AND month = ? AND year = ?
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(&item.name)
        .bind(item.date.day)
        .bind(item.date.month)
        .bind(item.date.year)
        .fetch_optional(&mut *tx)
        .await
        .map_err(DbError::save)?;

        match existing {
            Some((id,)) => {
                debug!(id, name = %item.name, count = item.count, "incrementing existing item");
                let updated = sqlx::query_as::<_, Item>(&format!(
                    r#"UPDATE "Item" SET count = count + ? WHERE id = ? RETURNING {ITEM_COLUMNS}"#
                ))
                .bind(item.count)
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(DbError::update)?;

                tx.commit().await.map_err(DbError::update)?;
                Ok(Upserted::Incremented(updated))
            }
            None => {
                let created = insert_row(&mut tx, item).await.map_err(DbError::save)?;
                tx.commit().await.map_err(DbError::save)?;
                debug!(id = created.id, name = %created.name, "inserted new item");
                Ok(Upserted::Created(created))
            }
        }
    }

    /// Sum of every row's count; 0 on an empty table.
    pub async fn total_count(&self) -> Result<f64, DbError> {
        let (total,): (f64,) = sqlx::query_as(r#"SELECT COALESCE(SUM(count), 0.0) FROM "Item""#)
            .fetch_one(self.pool)
            .await?;

        Ok(total)
    }

    /// Name and count of every item tagged with exactly `date`.
    pub async fn by_date(&self, date: CalendarDate) -> Result<Vec<ItemSummary>, DbError> {
        let items = sqlx::query_as::<_, ItemSummary>(
            r#"
            SELECT name, count FROM "Item"
            WHERE day = ? AND month = ? AND year = ?
            ORDER BY id ASC
            "#,
        )
        .bind(date.day)
        .bind(date.month)
        .bind(date.year)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}

async fn insert_row(conn: &mut SqliteConnection, item: &NewItem) -> Result<Item, sqlx::Error> {
    sqlx::query_as::<_, Item>(&format!(
        r#"
        INSERT INTO "Item" (name, count, day, month, year)
        VALUES (?, ?, ?, ?, ?)
        RETURNING {ITEM_COLUMNS}
        "#
    ))
    .bind(&item.name)
    .bind(item.count)
    .bind(item.date.day)
    .bind(item.date.month)
    .bind(item.date.year)
    .fetch_one(conn)
    .await
}
