use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// One item of the polled feed, validated at the fetch boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub link: String,
    pub title: String,
    pub summary: String,
    pub published: DateTime<Utc>,
}

/// A persisted press release with its body in every configured language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub link: String,
    pub title: String,
    pub summary: String,
    pub published: DateTime<Utc>,
    pub body: BTreeMap<String, String>,
}

impl Record {
    pub fn new(entry: FeedEntry, body: BTreeMap<String, String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            link: entry.link,
            title: entry.title,
            summary: entry.summary,
            published: entry.published,
            body,
        }
    }

    /// Body for `lang`, falling back to `fallback` when that language is missing.
    pub fn body_for<'a>(&'a self, lang: &str, fallback: &str) -> Option<&'a str> {
        self.body
            .get(lang)
            .or_else(|| self.body.get(fallback))
            .map(String::as_str)
    }
}

/// Listing projection of a record (body omitted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: Uuid,
    pub link: String,
    pub title: String,
    pub summary: String,
    pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub total_entries: usize,
    pub new_entries: usize,
}

impl fmt::Display for IngestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OK. Processed {} entries, {} new.",
            self.total_entries, self.new_entries
        )
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_feed_size_mb: usize,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "pressxl/0.1".to_string(),
            timeout_seconds: 30,
            max_feed_size_mb: 10,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PressError {
    #[error("Feed fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Article retrieval failed for {url}: {reason}")]
    Retrieval { url: String, reason: String },

    #[error("Translation {source_language} -> {target_language} failed: {reason}")]
    Translation {
        source_language: String,
        target_language: String,
        reason: String,
    },

    #[error("Invalid record id: {0}")]
    InvalidId(String),

    #[error("Invalid page number: {0}")]
    InvalidPage(u32),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt stored record: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PressError {
    pub fn fetch(url: &str, reason: impl fmt::Display) -> Self {
        Self::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn retrieval(url: &str, reason: impl fmt::Display) -> Self {
        Self::Retrieval {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PressError>;
