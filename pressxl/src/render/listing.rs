use maud::{html, Markup};

use super::{format_date, lang_query, layout, plain_text};
use crate::config::Config;
use crate::pagination::Pagination;
use crate::query::ListingPage;

pub fn render(config: &Config, lang: &str, listing: &ListingPage) -> Markup {
    let pagination = &listing.pagination;
    let switch_path = if pagination.page == 1 {
        "/".to_string()
    } else {
        format!("/page/{}", pagination.page)
    };

    let content = html! {
        h1 { "Press releases" }
        @if listing.records.is_empty() {
            p { "No press releases yet." }
        }
        @for record in &listing.records {
            article class="release" {
                h2 {
                    a href={ "/id/" (record.id.to_string()) (lang_query(lang)) } { (record.title) }
                }
                p class="date" { (format_date(&record.published)) }
                p { (plain_text(&record.summary)) }
                a href=(record.link) { "Original release" }
            }
        }
        (pager(pagination, lang))
    };

    layout(config, lang, "Press releases", &switch_path, content)
}

fn pager(pagination: &Pagination, lang: &str) -> Markup {
    html! {
        @if pagination.pages() > 1 {
            nav class="pager" {
                @if pagination.has_prev() {
                    a href=(page_href(pagination.page - 1, lang)) { "« Prev" }
                }
                @for item in pagination.iter_pages() {
                    @if let Some(num) = item {
                        @if num == pagination.page {
                            span class="current" { (num) }
                        } @else {
                            a href=(page_href(num, lang)) { (num) }
                        }
                    } @else {
                        span class="gap" { "…" }
                    }
                }
                @if pagination.has_next() {
                    a href=(page_href(pagination.page + 1, lang)) { "Next »" }
                }
            }
        }
    }
}

fn page_href(page: u32, lang: &str) -> String {
    format!("/page/{}{}", page, lang_query(lang))
}
