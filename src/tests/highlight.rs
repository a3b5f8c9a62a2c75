use super::{Highlighter, NoHighlight, SyntectHighlighter, DEFAULT_THEME};
use crate::error::Error;

const RUST_BLOCK: &str =
    "<p>intro</p><pre><code class=\"language-rust\">let x = &quot;a&quot;;\n</code></pre><p>outro</p>";

#[test]
fn test_no_highlight_is_identity() {
    assert_eq!(NoHighlight.highlight(RUST_BLOCK), RUST_BLOCK);
}

#[test]
fn test_known_language_gets_styled_spans() {
    let highlighter = SyntectHighlighter::new(DEFAULT_THEME).unwrap();
    let out = highlighter.highlight(RUST_BLOCK);

    assert!(out.starts_with("<p>intro</p><pre><code class=\"language-rust\">"));
    assert!(out.ends_with("</code></pre><p>outro</p>"));
    assert!(out.contains("<span style="), "{out}");
    assert!(out.contains("&quot;"), "text is re-escaped: {out}");
    assert!(!out.contains("\"a\""), "{out}");
}

#[test]
fn test_unknown_language_is_untouched() {
    let highlighter = SyntectHighlighter::new(DEFAULT_THEME).unwrap();
    let doc = "<pre><code class=\"language-nonsense\">a &lt; b\n</code></pre>";
    assert_eq!(highlighter.highlight(doc), doc);

    let untagged = "<pre><code class=\"language-\">plain\n</code></pre>";
    assert_eq!(highlighter.highlight(untagged), untagged);
}

#[test]
fn test_every_block_is_visited() {
    let highlighter = SyntectHighlighter::new(DEFAULT_THEME).unwrap();
    let doc = format!("{RUST_BLOCK}{RUST_BLOCK}");
    let out = highlighter.highlight(&doc);
    assert_eq!(out.matches("<pre><code class=\"language-rust\">").count(), 2);
    assert!(out.matches("<span style=").count() >= 2);
}

#[test]
fn test_unknown_theme_is_rejected() {
    assert!(matches!(
        SyntectHighlighter::new("no-such-theme"),
        Err(Error::UnknownTheme(name)) if name == "no-such-theme"
    ));
}
