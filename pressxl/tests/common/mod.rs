#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use pressxl::{Config, FeedEntry, PressError, Record, RecordManager, Result, Translate};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const UPDATE_TOKEN: &str = "letmein";

pub async fn memory_store() -> Arc<RecordManager> {
    Arc::new(RecordManager::new("sqlite::memory:").await.unwrap())
}

pub fn test_config(feed_url: &str, extra: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = [
        ("PRESSXL_FEED_URL", feed_url),
        ("PRESSXL_UPDATE_TOKEN", UPDATE_TOKEN),
        ("DATABASE_URL", "sqlite::memory:"),
        ("PRESSXL_TARGET_LANGUAGES", "fr,de"),
        ("PRESSXL_HTTP_TIMEOUT_SECS", "5"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (key, value) in extra {
        vars.insert(key.to_string(), value.to_string());
    }
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

/// Prefixes every sentence with the target language.
pub struct StubTranslator;

#[async_trait]
impl Translate for StubTranslator {
    fn provider_name(&self) -> String {
        "stub".to_string()
    }

    async fn translate_text(&self, text: &str, _source: &str, target: &str) -> Result<String> {
        Ok(format!("[{}] {}", target, text))
    }
}

/// Fails whenever a sentence contains `trigger`.
pub struct FailingTranslator {
    pub trigger: &'static str,
}

#[async_trait]
impl Translate for FailingTranslator {
    fn provider_name(&self) -> String {
        "failing".to_string()
    }

    async fn translate_text(&self, text: &str, source: &str, target: &str) -> Result<String> {
        if text.contains(self.trigger) {
            return Err(PressError::Translation {
                source_language: source.to_string(),
                target_language: target.to_string(),
                reason: "service unavailable".to_string(),
            });
        }
        Ok(format!("[{}] {}", target, text))
    }
}

pub struct Item<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub pub_date: &'a str,
}

/// RSS document whose item links point at `base`.
pub fn rss(base: &str, items: &[Item<'_>]) -> String {
    let items: String = items
        .iter()
        .map(|item| {
            format!(
                "<item><title>{}</title><link>{}/{}</link><pubDate>{}</pubDate><description>&lt;p&gt;About {}&lt;/p&gt;</description></item>",
                item.title, base, item.slug, item.pub_date, item.title
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>Newsroom</title><link>{}</link><description>Press releases</description>{}</channel></rss>"#,
        base, items
    )
}

pub fn article(title: &str, text: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body><nav>Menu</nav><div class=\"content\"><p>{}</p></div></body></html>",
        title, text
    )
}

pub async fn mount_feed(server: &MockServer, feed: String) {
    Mock::given(method("GET"))
        .and(path("/feed.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed))
        .mount(server)
        .await;
}

pub async fn mount_article(server: &MockServer, slug: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", slug)))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

pub fn published(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 21, hour, 0, 0).unwrap()
}

pub fn record(link: &str, title: &str, published: DateTime<Utc>) -> Record {
    let mut body = BTreeMap::new();
    body.insert("en".to_string(), format!("<div><h1>{}</h1></div>", title));
    Record::new(
        FeedEntry {
            link: link.to_string(),
            title: title.to_string(),
            summary: format!("<p>Summary of {}</p>", title),
            published,
        },
        body,
    )
}
