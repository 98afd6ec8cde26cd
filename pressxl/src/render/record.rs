use maud::{html, Markup, PreEscaped};

use super::{format_date, lang_query, layout};
use crate::config::Config;
use crate::types::Record;

/// Full record page with the body in `lang`, or in the source language when
/// `lang` was never translated.
pub fn render(config: &Config, lang: &str, record: &Record) -> Markup {
    let body = record
        .body_for(lang, &config.source_language)
        .unwrap_or_default();
    let switch_path = format!("/id/{}", record.id);

    let content = html! {
        article {
            p class="date" { (format_date(&record.published)) }
            div class="body" { (PreEscaped(body)) }
            p {
                a href=(record.link) { "Original release" }
                " · "
                a href={ "/" (lang_query(lang)) } { "All press releases" }
            }
        }
    };

    layout(config, lang, &record.title, &switch_path, content)
}
