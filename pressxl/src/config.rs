//! Application configuration loaded from environment variables.

use crate::types::FetchConfig;
use anyhow::{anyhow, bail, Context};
use std::fmt;
use url::Url;

/// A value that must never show up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[derive(Debug, Clone)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: Secret,
}

/// Where and as whom translation calls are made.
#[derive(Debug, Clone)]
pub struct TranslationSettings {
    pub region: String,
    /// Explicit keys; when absent the default AWS credential chain is used.
    pub credentials: Option<StaticCredentials>,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Store connection URL.
    pub database_url: String,

    /// Records per listing page.
    pub page_size: u32,

    /// RSS/Atom feed polled by `/update`.
    pub feed_url: String,

    /// Shared secret expected in the `token` header of `/update`.
    pub update_token: Secret,

    pub source_language: String,

    /// Target languages, in the order they are translated.
    pub target_languages: Vec<String>,

    pub translation: TranslationSettings,

    pub fetch: FetchConfig,

    /// Banner shown on rendered pages (e.g. "staging").
    pub deploy_context: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `PRESSXL_FEED_URL`: feed to ingest
    /// - `PRESSXL_UPDATE_TOKEN`: shared secret for `POST /update`
    ///
    /// Optional:
    /// - `PRESSXL_BIND_ADDR` (default: "0.0.0.0:8080")
    /// - `DATABASE_URL` (default: "sqlite://pressxl.db")
    /// - `PRESSXL_PAGE_SIZE` (default: 10)
    /// - `PRESSXL_SOURCE_LANGUAGE` (default: "en")
    /// - `PRESSXL_TARGET_LANGUAGES`: comma-separated (default: "es,fr,de")
    /// - `AWS_REGION` (default: "us-east-1")
    /// - `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`: static credentials
    /// - `PRESSXL_USER_AGENT`, `PRESSXL_HTTP_TIMEOUT_SECS`, `PRESSXL_MAX_FEED_SIZE_MB`
    /// - `DEPLOY_CONTEXT`: page banner
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let bind_addr = get_or("PRESSXL_BIND_ADDR", "0.0.0.0:8080");
        let database_url = get_or("DATABASE_URL", "sqlite://pressxl.db");

        let page_size: u32 = get_or("PRESSXL_PAGE_SIZE", "10")
            .parse()
            .context("PRESSXL_PAGE_SIZE must be a positive integer")?;
        if page_size == 0 {
            bail!("PRESSXL_PAGE_SIZE must be greater than zero");
        }

        let feed_url = get("PRESSXL_FEED_URL")
            .ok_or_else(|| anyhow!("PRESSXL_FEED_URL environment variable is required"))?;
        let parsed = Url::parse(&feed_url).context("PRESSXL_FEED_URL is not a valid URL")?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("PRESSXL_FEED_URL must use http or https");
        }

        let update_token = get("PRESSXL_UPDATE_TOKEN")
            .map(Secret::new)
            .ok_or_else(|| anyhow!("PRESSXL_UPDATE_TOKEN environment variable is required"))?;

        let source_language = get_or("PRESSXL_SOURCE_LANGUAGE", "en");
        let target_languages =
            parse_languages(&get_or("PRESSXL_TARGET_LANGUAGES", "es,fr,de"), &source_language)?;

        let credentials = match (get("AWS_ACCESS_KEY_ID"), get("AWS_SECRET_ACCESS_KEY")) {
            (Some(access_key_id), Some(secret)) => Some(StaticCredentials {
                access_key_id,
                secret_access_key: Secret::new(secret),
            }),
            (None, None) => None,
            _ => bail!("AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must be set together"),
        };
        let translation = TranslationSettings {
            region: get_or("AWS_REGION", "us-east-1"),
            credentials,
        };

        let defaults = FetchConfig::default();
        let fetch = FetchConfig {
            user_agent: get_or("PRESSXL_USER_AGENT", &defaults.user_agent),
            timeout_seconds: get("PRESSXL_HTTP_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("PRESSXL_HTTP_TIMEOUT_SECS must be an integer")?
                .unwrap_or(defaults.timeout_seconds),
            max_feed_size_mb: get("PRESSXL_MAX_FEED_SIZE_MB")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("PRESSXL_MAX_FEED_SIZE_MB must be an integer")?
                .unwrap_or(defaults.max_feed_size_mb),
            ..defaults
        };

        let deploy_context = get("DEPLOY_CONTEXT");

        tracing::info!(
            bind_addr = %bind_addr,
            feed_url = %feed_url,
            page_size,
            source = %source_language,
            targets = ?target_languages,
            region = %translation.region,
            static_credentials = translation.credentials.is_some(),
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_url,
            page_size,
            feed_url,
            update_token,
            source_language,
            target_languages,
            translation,
            fetch,
            deploy_context,
        })
    }

    /// Source language followed by the targets, as offered in the language switcher.
    pub fn languages(&self) -> Vec<String> {
        std::iter::once(self.source_language.clone())
            .chain(self.target_languages.iter().cloned())
            .collect()
    }
}

fn parse_languages(raw: &str, source_language: &str) -> anyhow::Result<Vec<String>> {
    let mut languages: Vec<String> = Vec::new();
    for code in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        if code == source_language {
            bail!("PRESSXL_TARGET_LANGUAGES must not contain the source language {code}");
        }
        if !languages.iter().any(|existing| existing == code) {
            languages.push(code.to_string());
        }
    }

    if languages.is_empty() {
        bail!("PRESSXL_TARGET_LANGUAGES must name at least one language");
    }
    Ok(languages)
}
