//! Readability-style article extraction.
//!
//! Picks the element that holds most of the page's paragraph text and
//! re-serialises it without scripts and page chrome, alongside a title with
//! the site name trimmed off.

use scraper::{ElementRef, Html, Selector};

const TITLE_DELIMITERS: &[&str] = &[" | ", " - ", " \u{2013} ", " \u{2014} ", " :: ", " / "];
const MIN_PARAGRAPH_CHARS: usize = 25;

const STRIPPED_TAGS: &[&str] = &[
    "script", "style", "noscript", "iframe", "form", "nav", "aside", "header", "footer",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Readable {
    pub title: String,
    pub content: String,
}

pub fn extract(html: &str) -> Readable {
    let document = Html::parse_document(html);
    Readable {
        title: short_title(&document),
        content: main_content(&document),
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn short_title(document: &Html) -> String {
    let title = document
        .select(&selector("title"))
        .next()
        .or_else(|| document.select(&selector("h1")).next())
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default();

    shorten_title(&title)
}

fn shorten_title(title: &str) -> String {
    let candidate = TITLE_DELIMITERS
        .iter()
        .filter(|delimiter| title.contains(**delimiter))
        .find_map(|delimiter| {
            let parts: Vec<&str> = title.split(delimiter).collect();
            parts
                .first()
                .filter(|part| word_count(part) >= 4)
                .or_else(|| parts.last().filter(|part| word_count(part) >= 4))
                .map(|part| part.trim().to_string())
        })
        .or_else(|| {
            title.contains(": ").then(|| {
                title
                    .rsplit(": ")
                    .next()
                    .filter(|part| word_count(part) >= 4)
                    .or_else(|| title.split_once(": ").map(|(_, rest)| rest))
                    .unwrap_or_default()
                    .trim()
                    .to_string()
            })
        });

    match candidate {
        Some(short) if (16..150).contains(&short.chars().count()) => short,
        _ => title.to_string(),
    }
}

fn main_content(document: &Html) -> String {
    let mut scores: Vec<(ElementRef<'_>, f64)> = Vec::new();

    for paragraph in document.select(&selector("p, pre, td")) {
        let text: String = paragraph.text().collect();
        let length = text.trim().chars().count();
        if length < MIN_PARAGRAPH_CHARS {
            continue;
        }

        let score = 1.0 + text.matches(',').count() as f64 + (length as f64 / 100.0).min(3.0);

        if let Some(parent) = paragraph.parent().and_then(ElementRef::wrap) {
            add_score(&mut scores, parent, score);
            if let Some(grandparent) = parent.parent().and_then(ElementRef::wrap) {
                add_score(&mut scores, grandparent, score / 2.0);
            }
        }
    }

    let mut best: Option<(ElementRef<'_>, f64)> = None;
    for (element, score) in scores {
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((element, score));
        }
    }

    let Some(root) = best
        .map(|(element, _)| element)
        .or_else(|| document.select(&selector("body")).next())
        .map(|element| element.id())
    else {
        return String::new();
    };

    let cleaned = without_chrome(document);
    let inner = cleaned
        .tree
        .get(root)
        .and_then(ElementRef::wrap)
        .map(|element| element.inner_html())
        .unwrap_or_default();

    format!("<div>{}</div>", inner)
}

/// Copy of `document` with every stripped subtree detached.
fn without_chrome(document: &Html) -> Html {
    let mut cleaned = document.clone();
    let stripped: Vec<_> = cleaned
        .select(&selector(&STRIPPED_TAGS.join(", ")))
        .map(|element| element.id())
        .collect();

    for id in stripped {
        if let Some(mut node) = cleaned.tree.get_mut(id) {
            node.detach();
        }
    }
    cleaned
}

fn add_score<'a>(scores: &mut Vec<(ElementRef<'a>, f64)>, element: ElementRef<'a>, score: f64) {
    match scores.iter_mut().find(|(candidate, _)| candidate.id() == element.id()) {
        Some((_, total)) => *total += score,
        None => scores.push((element, score)),
    }
}
