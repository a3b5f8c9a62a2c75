use super::{escape_html, format_line, slugify, strip_tags, unescape_html};
use rstest::rstest;

#[rstest]
#[case("plain words", "plain words")]
#[case("use `grep` here", "use <code>grep</code> here")]
#[case("Some **bold** text.", "Some <strong>bold</strong> text.")]
#[case("Some __bold__ text.", "Some <strong>bold</strong> text.")]
#[case("an *italic* word", "an <em>italic</em> word")]
#[case("an _italic_ word", "an <em>italic</em> word")]
#[case(
    "see [docs](https://example.com)",
    r#"see <a href="https://example.com" target="_blank">docs</a>"#
)]
#[case("---", "<hr>")]
#[case("  ---  ", "<hr>")]
#[case("- first item", "<li>first item</li>")]
#[case("* starred item", "<li>starred item</li>")]
#[case("  - indented item", "<li>indented item</li>")]
#[case("12. twelfth", "<li>twelfth</li>")]
#[case("1.5 is not a list", "1.5 is not a list")]
#[case("-no space", "-no space")]
fn test_format_line(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(format_line(input), expected);
}

#[test]
fn test_bold_runs_before_italic() {
    assert_eq!(
        format_line("**strong** and *soft*"),
        "<strong>strong</strong> and <em>soft</em>"
    );
}

#[test]
fn test_list_item_keeps_inline_formatting() {
    assert_eq!(
        format_line("- a **bold** `item`"),
        "<li>a <strong>bold</strong> <code>item</code></li>"
    );
}

#[test]
fn test_rule_excludes_other_rules() {
    assert_eq!(format_line("---"), "<hr>");
    assert_eq!(format_line("----"), "----");
}

#[test]
fn test_code_span_contents_still_see_later_passes() {
    // Passes are independent substitutions, so emphasis markers inside a code span are
    // still rewritten.
    assert_eq!(
        format_line("`a*b*c`"),
        "<code>a<em>b</em>c</code>"
    );
}

#[test]
fn test_underscores_inside_words_become_emphasis() {
    assert_eq!(format_line("snake_case_name"), "snake<em>case</em>name");
}

#[test]
fn test_html_passes_through() {
    assert_eq!(format_line("<b>raw</b>"), "<b>raw</b>");
}

#[rstest]
#[case("Title")]
#[case("Getting started with the parser")]
#[case("Version 2.0 notes")]
fn test_strip_tags_inverts_format_on_plain_text(#[case] title: &str) {
    assert_eq!(strip_tags(&format_line(title)), title);
}

#[test]
fn test_strip_tags_keeps_text() {
    assert_eq!(
        strip_tags(r#"<a href="x" target="_blank">Read <em>this</em></a>"#),
        "Read this"
    );
}

#[rstest]
#[case("Title", "title")]
#[case("Getting Started", "getting-started")]
#[case("What's new?", "what-s-new-")]
#[case("snake_case stays", "snake_case-stays")]
#[case("Ünïcode ok", "-n-code-ok")]
fn test_slugify(#[case] plain: &str, #[case] expected: &str) {
    assert_eq!(slugify(plain), expected);
}

#[test]
fn test_escape_html_entities() {
    assert_eq!(
        escape_html(r#"<a href="x">it's & that</a>"#),
        "&lt;a href=&quot;x&quot;&gt;it&#039;s &amp; that&lt;/a&gt;"
    );
}

#[test]
fn test_escape_html_is_not_idempotent() {
    assert_eq!(escape_html("&amp;"), "&amp;amp;");
}

#[test]
fn test_unescape_reverses_escape() {
    let code = "if a < b && c > \"d\" { 'e' }";
    assert_eq!(unescape_html(&escape_html(code)), code);
}
