use super::{build_outline, render_outline};
use crate::builder::parse;

#[test]
fn test_outline_structure() {
    let doc = parse("# Title\n## Section 1\nContent 1\n### Subsection\n## Section 2");
    let outline = build_outline(doc.toc());

    assert_eq!(outline.len(), 1);
    let title = &outline[0];
    assert_eq!(title.id, "title");
    assert!(title.expandable);
    assert_eq!(title.depth, 0);
    assert_eq!(title.children.len(), 2);

    let section_1 = &title.children[0];
    assert_eq!(section_1.id, "section-1");
    assert_eq!(section_1.depth, 1);
    assert!(section_1.expandable);
    assert!(!title.children[1].expandable);
    assert_eq!(section_1.children[0].depth, 2);
}

#[test]
fn test_labels_are_plain_text() {
    let doc = parse("# **Bold** and `code`");
    let outline = build_outline(doc.toc());
    assert_eq!(outline[0].label, "Bold and code");
    assert_eq!(outline[0].id, "bold-and-code");
}

#[test]
fn test_initial_markup() {
    let doc = parse("# A\n## B\n# C");
    let html = render_outline(&build_outline(doc.toc()));

    assert_eq!(
        html,
        "<ul class=\"outline\">\
         <li><div class=\"tree-item\" data-section=\"a\"><span class=\"tree-toggle\">+</span>A</div>\
         <ul class=\"hidden\">\
         <li><div class=\"tree-item\" data-section=\"b\">\
         <span class=\"tree-spacer\" style=\"width:16px;display:inline-block;\"></span>B</div></li>\
         </ul></li>\
         <li><div class=\"tree-item\" data-section=\"c\">\
         <span class=\"tree-spacer\" style=\"width:16px;display:inline-block;\"></span>C</div></li>\
         </ul>"
    );
}

#[test]
fn test_every_nested_list_starts_hidden() {
    let doc = parse("# A\n## B\n### C\n#### D");
    let html = render_outline(&build_outline(doc.toc()));
    assert_eq!(html.matches("<ul class=\"hidden\">").count(), 3);
    assert_eq!(html.matches("<ul class=\"outline\">").count(), 1);
    assert_eq!(html.matches("tree-toggle").count(), 3);
    assert!(!html.contains('\u{2212}'));
}

#[test]
fn test_labels_are_escaped() {
    let doc = parse("# a < b");
    let html = render_outline(&build_outline(doc.toc()));
    assert!(html.contains(">a &lt; b</div>"));
}

#[test]
fn test_empty_outline() {
    assert_eq!(render_outline(&build_outline(&[])), "");
}
