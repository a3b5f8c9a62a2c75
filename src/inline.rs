//! Line-level markdown formatting.
//!
//! Formatting is an ordered sequence of independent regex substitution passes rather than a
//! tokenizer. Each pass sees the output of the one before it, so the order below is part of
//! the observable behaviour: code spans, bold, italic, links, then list items. A horizontal
//! rule short-circuits everything else.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code span pattern"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*|__(.*?)__").expect("bold pattern"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*|_(.*?)_").expect("italic pattern"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern"));
static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*\-]\s").expect("unordered item pattern"));
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("ordered item pattern"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]+").expect("non-word pattern"));

/// Trimmed line content that turns into a horizontal rule.
pub const RULE_MARKER: &str = "---";

/// Wraps whichever alternative of a two-delimiter pattern matched.
fn wrap_either(caps: &Captures<'_>, tag: &str) -> String {
    let inner = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map_or("", |m| m.as_str());
    format!("<{tag}>{inner}</{tag}>")
}

#[must_use]
/// Transforms one line of prose (or a heading title) into inline markup.
///
/// The rest of the line is passed through untouched, HTML included.
pub fn format_line(line: &str) -> String {
    if line.trim() == RULE_MARKER {
        return "<hr>".to_string();
    }

    let line = CODE_SPAN.replace_all(line, "<code>${1}</code>");
    let line = BOLD.replace_all(&line, |caps: &Captures<'_>| wrap_either(caps, "strong"));
    let line = ITALIC.replace_all(&line, |caps: &Captures<'_>| wrap_either(caps, "em"));
    let mut line = LINK
        .replace_all(&line, r#"<a href="${2}" target="_blank">${1}</a>"#)
        .into_owned();

    let trimmed = line.trim();
    if let Some(marker) = UNORDERED_ITEM.find(trimmed) {
        line = format!("<li>{}</li>", &trimmed[marker.end()..]);
    }

    if ORDERED_ITEM.is_match(line.trim()) {
        if let Some(dot) = line.find('.') {
            line = format!("<li>{}</li>", line[dot + 1..].trim());
        }
    }

    line
}

#[must_use]
/// Removes every `<...>` tag, keeping the text between them.
pub fn strip_tags(markup: &str) -> String {
    TAG.replace_all(markup, "").into_owned()
}

#[must_use]
/// Derives a section anchor from a plain title.
///
/// The title is lowercased and every run of characters outside `[0-9A-Za-z_]` becomes a
/// single `-`. Distinct titles can collide.
pub fn slugify(plain_title: &str) -> String {
    NON_WORD
        .replace_all(&plain_title.to_lowercase(), "-")
        .into_owned()
}

#[must_use]
/// Escapes text for literal display inside a code block.
///
/// Not idempotent: existing entities are escaped again (`&amp;` becomes `&amp;amp;`).
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[must_use]
/// Reverses [`escape_html`].
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
#[path = "tests/inline.rs"]
mod tests;
