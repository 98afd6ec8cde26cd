//! HTML rendering for the public pages.
//!
//! All rendering uses maud; dynamic values are escaped unless they are stored
//! bodies, which are trusted fragments produced by the extractor.

pub mod listing;
pub mod record;

use chrono::{DateTime, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use scraper::Html;
use url::form_urlencoded;

use crate::config::Config;

/// Inline CSS shared by every page.
pub const PAGE_CSS: &str = r#"
*{box-sizing:border-box}
body{font-family:Georgia,"Times New Roman",serif;line-height:1.6;color:#1d1d1d;background:#fcfcfa;margin:0;padding:1.5rem 1rem;display:flex;flex-direction:column;align-items:center}
main{max-width:720px;width:100%}
a{color:#0b5394;text-decoration:none}
a:hover{text-decoration:underline}
.banner{width:100%;max-width:720px;background:#fff3cd;border:1px solid #e0c36c;padding:.35rem .75rem;margin-bottom:1rem;font-family:sans-serif;font-size:.85rem;text-transform:uppercase;letter-spacing:.05em}
.langs{font-family:sans-serif;font-size:.85rem;margin-bottom:1.5rem}
.langs a,.langs span{margin-right:.6rem}
.langs .current{font-weight:700}
.release{padding:1rem 0;border-bottom:1px solid #e5e5e0}
.release h2{font-size:1.25rem;margin:0 0 .25rem}
.date{color:#777;font-size:.85rem;font-family:sans-serif}
.pager{display:flex;gap:.5rem;flex-wrap:wrap;margin:1.5rem 0;font-family:sans-serif}
.pager .current{font-weight:700}
.pager .gap{color:#999}
.body img{max-width:100%;height:auto}
"#;

/// Wrap `content` in the shared page chrome.
///
/// `switch_path` is the path the language switcher links back to.
pub fn layout(config: &Config, lang: &str, title: &str, switch_path: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                @if let Some(context) = &config.deploy_context {
                    div class="banner" { (context) }
                }
                main {
                    nav class="langs" {
                        @for code in config.languages() {
                            @if code == lang {
                                span class="current" { (code) }
                            } @else {
                                a href={ (switch_path) (lang_query(&code)) } { (code) }
                            }
                        }
                    }
                    (content)
                }
            }
        }
    }
}

pub fn format_date(published: &DateTime<Utc>) -> String {
    published.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Text content of an HTML fragment with entities decoded and whitespace
/// collapsed.
pub fn plain_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `?lang=…` query string with the code percent-encoded.
pub fn lang_query(lang: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(lang.as_bytes()).collect();
    format!("?lang={}", encoded)
}
