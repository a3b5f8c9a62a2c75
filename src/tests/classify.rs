use super::{header_level, split_lines, LineClassifier, LineKind};
use rstest::rstest;

#[rstest]
#[case("# Title", Some(1))]
#[case("### Deep", Some(3))]
#[case("#hashtag", Some(1))]
#[case("  # indented", None)]
#[case("plain", None)]
#[case("", None)]
fn test_header_level(#[case] line: &str, #[case] expected: Option<usize>) {
    assert_eq!(header_level(line), expected);
}

#[test]
fn test_header_text_is_trimmed() {
    let mut classifier = LineClassifier::new();
    assert_eq!(
        classifier.classify("##   Spaced out  "),
        LineKind::Header {
            level: 2,
            text: "Spaced out"
        }
    );
}

#[test]
fn test_fence_toggles_and_captures_language() {
    let mut classifier = LineClassifier::new();
    assert_eq!(
        classifier.classify("```rust"),
        LineKind::FenceOpen { language: "rust" }
    );
    assert!(classifier.in_fence());
    assert_eq!(classifier.classify("let x = 1;"), LineKind::FenceBody("let x = 1;"));
    assert_eq!(classifier.classify("```"), LineKind::FenceClose);
    assert!(!classifier.in_fence());
}

#[test]
fn test_fence_language_is_optional() {
    let mut classifier = LineClassifier::new();
    assert_eq!(
        classifier.classify("   ```  "),
        LineKind::FenceOpen { language: "" }
    );
}

#[test]
fn test_headers_inside_fence_are_body() {
    let mut classifier = LineClassifier::new();
    classifier.classify("```sh");
    assert_eq!(
        classifier.classify("# not a header"),
        LineKind::FenceBody("# not a header")
    );
    assert_eq!(classifier.classify("  indented"), LineKind::FenceBody("  indented"));
}

#[test]
fn test_any_marker_line_closes_fence() {
    let mut classifier = LineClassifier::new();
    classifier.classify("```js");
    assert_eq!(classifier.classify("```python"), LineKind::FenceClose);
}

#[test]
fn test_prose_outside_fence() {
    let mut classifier = LineClassifier::new();
    assert_eq!(classifier.classify("Some text"), LineKind::Prose("Some text"));
    assert_eq!(classifier.classify(""), LineKind::Prose(""));
}

#[test]
fn test_split_lines_drops_carriage_returns() {
    let lines: Vec<&str> = split_lines("# A\r\nbody\r\n").collect();
    assert_eq!(lines, vec!["# A", "body", ""]);
}
