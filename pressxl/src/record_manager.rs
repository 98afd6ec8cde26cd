use crate::types::{PressError, Record, RecordSummary, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::{debug, info};
use uuid::Uuid;

/// Persistent store of ingested press releases.
///
/// Each record is written once and never updated. `link` carries a unique
/// constraint so two overlapping runs cannot store the same release twice.
pub struct RecordManager {
    db: SqlitePool,
}

impl RecordManager {
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to an in-memory database is a separate database,
        // so those pools are pinned to one connection that never expires.
        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let db = pool_options.connect_with(options).await?;
        let manager = Self { db };
        manager.setup_schema().await?;

        info!("Connected record store: {}", database_url);
        Ok(manager)
    }

    pub async fn setup_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS press_releases (
                id TEXT PRIMARY KEY,
                link TEXT NOT NULL UNIQUE,
                title TEXT NOT NULL,
                summary TEXT NOT NULL,
                published INTEGER NOT NULL,
                body TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_press_releases_published ON press_releases (published DESC, id DESC)",
        )
        .execute(&self.db)
        .await?;

        Ok(())
    }

    pub async fn exists_by_link(&self, link: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM press_releases WHERE link = ?")
            .bind(link)
            .fetch_one(&self.db)
            .await?;
        Ok(count > 0)
    }

    /// Store a new record. Returns `false` when a record with the same link
    /// already exists, in which case nothing is written.
    pub async fn insert(&self, record: &Record) -> Result<bool> {
        let body = serde_json::to_string(&record.body)?;

        let result = sqlx::query(
            r#"
            INSERT INTO press_releases (id, link, title, summary, published, body, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (link) DO NOTHING
            "#,
        )
        .bind(record.id.to_string())
        .bind(&record.link)
        .bind(&record.title)
        .bind(&record.summary)
        .bind(record.published.timestamp())
        .bind(body)
        .bind(Utc::now().timestamp())
        .execute(&self.db)
        .await?;

        let inserted = result.rows_affected() > 0;
        if inserted {
            debug!("Stored record {} for {}", record.id, record.link);
        } else {
            debug!("Record for {} already present, nothing stored", record.link);
        }
        Ok(inserted)
    }

    pub async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM press_releases")
            .fetch_one(&self.db)
            .await?;
        Ok(count as u64)
    }

    /// Newest first by publish date, ties broken by id (newest first).
    pub async fn list(&self, offset: u64, limit: u32) -> Result<Vec<RecordSummary>> {
        let rows = sqlx::query(
            r#"
            SELECT id, link, title, summary, published
            FROM press_releases
            ORDER BY published DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(i64::from(limit))
        .bind(offset as i64)
        .fetch_all(&self.db)
        .await?;

        rows.iter()
            .map(|row| -> Result<RecordSummary> {
                Ok(RecordSummary {
                    id: parse_id(row)?,
                    link: row.try_get("link")?,
                    title: row.try_get("title")?,
                    summary: row.try_get("summary")?,
                    published: parse_published(row)?,
                })
            })
            .collect()
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Record>> {
        let row = sqlx::query(
            "SELECT id, link, title, summary, published, body FROM press_releases WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.db)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let body: String = row.try_get("body")?;
        let body: BTreeMap<String, String> = serde_json::from_str(&body)?;

        Ok(Some(Record {
            id: parse_id(&row)?,
            link: row.try_get("link")?,
            title: row.try_get("title")?,
            summary: row.try_get("summary")?,
            published: parse_published(&row)?,
            body,
        }))
    }
}

fn parse_id(row: &SqliteRow) -> Result<Uuid> {
    let raw: String = row.try_get("id")?;
    Uuid::parse_str(&raw).map_err(|e| PressError::Storage(format!("bad id {:?}: {}", raw, e)))
}

fn parse_published(row: &SqliteRow) -> Result<DateTime<Utc>> {
    let seconds: i64 = row.try_get("published")?;
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| PressError::Storage(format!("bad timestamp {}", seconds)))
}
