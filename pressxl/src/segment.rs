//! Sentence segmentation for running text.
//!
//! Markup inside the text is not treated specially, so a tag that directly
//! follows a full stop keeps both sentences together.

const TERMINATORS: &[char] = &['.', '!', '?'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{2019}', '\u{201d}'];

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ave", "inc", "ltd", "co",
    "corp", "llc", "plc", "dept", "univ", "vs", "etc", "no", "vol", "fig", "approx", "est",
    "gov", "sen", "rep", "gen", "col", "lt", "capt", "jan", "feb", "mar", "apr", "jun", "jul",
    "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Split `text` into trimmed sentences, in order.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (_, c) = chars[i];
        if !TERMINATORS.contains(&c) {
            i += 1;
            continue;
        }

        // Swallow runs like `?!` or `."` so they stay with the sentence.
        let mut end = i + 1;
        while end < chars.len()
            && (TERMINATORS.contains(&chars[end].1) || CLOSERS.contains(&chars[end].1))
        {
            end += 1;
        }

        let end_byte = chars.get(end).map(|(b, _)| *b).unwrap_or(text.len());
        let followed_by_space = end == chars.len() || chars[end].1.is_whitespace();

        if followed_by_space && is_boundary(text, &chars, i, end) {
            push_trimmed(&mut sentences, &text[start..end_byte]);
            start = end_byte;
        }
        i = end;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn is_boundary(text: &str, chars: &[(usize, char)], terminator: usize, after: usize) -> bool {
    let next = chars[after..].iter().map(|(_, c)| *c).find(|c| !c.is_whitespace());
    if let Some(next) = next {
        if next.is_lowercase() {
            return false;
        }
    }

    if chars[terminator].1 == '.' {
        let token = preceding_token(text, chars[terminator].0);
        if is_abbreviation(token) {
            return false;
        }
    }

    true
}

fn preceding_token(text: &str, period_byte: usize) -> &str {
    let head = &text[..period_byte];
    let token_start = head
        .rfind(char::is_whitespace)
        .map(|idx| idx + head[idx..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    head[token_start..].trim_start_matches(|c: char| !c.is_alphanumeric())
}

fn is_abbreviation(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    let mut letters = token.chars();
    if let (Some(first), None) = (letters.next(), letters.next()) {
        // Single-letter initials such as the "J." in "J. Smith".
        return first.is_alphabetic();
    }

    if token.contains('.') {
        return true;
    }

    let lower = token.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
