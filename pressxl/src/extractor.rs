use crate::fetcher::Fetcher;
use crate::readability;
use crate::types::Result;
use maud::{html, PreEscaped};
use std::sync::Arc;
use tracing::debug;

/// Turns an article URL into the source-language body stored with a record.
pub struct ContentExtractor {
    fetcher: Arc<Fetcher>,
}

impl ContentExtractor {
    pub fn new(fetcher: Arc<Fetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn extract(&self, url: &str) -> Result<String> {
        let html = self.fetcher.fetch_full_content(url).await?;
        let body = source_body(&html);
        debug!("Extracted {} bytes of readable content from {}", body.len(), url);
        Ok(body)
    }
}

/// `<div><h1>{title}</h1>{content}</div>` with non-breaking spaces flattened.
pub fn source_body(html: &str) -> String {
    let readable = readability::extract(html);
    let content = normalize_spaces(&readable.content);
    html! {
        div {
            h1 { (readable.title) }
            (PreEscaped(content))
        }
    }
    .into_string()
}

fn normalize_spaces(fragment: &str) -> String {
    fragment
        .replace('\u{a0}', " ")
        .replace("&nbsp;", " ")
        .replace("&#160;", " ")
}
