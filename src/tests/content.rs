use super::{build_content, render_content};
use crate::builder::parse;

const NESTED: &str = "# A\nalpha\n## B\n### C\n#### D";

#[test]
fn test_blocks_mirror_the_tree() {
    let doc = parse(NESTED);
    let blocks = build_content(&doc.sections);

    assert_eq!(blocks.len(), 1);
    let a = &blocks[0];
    assert_eq!(a.id, "a");
    assert_eq!(a.body, "alpha\n");
    assert!(a.ancestors.is_empty());
    assert!(!a.children_hidden, "top-level wrapper starts visible");

    let b = &a.children[0];
    assert_eq!(b.ancestors, ["a"]);
    assert!(b.children_hidden);

    let c = &b.children[0];
    assert_eq!(c.ancestors, ["a", "b"]);
    assert_eq!(c.children[0].ancestors, ["a", "b", "c"]);
}

#[test]
fn test_single_block_markup() {
    let doc = parse("# Intro\nHello *there*");
    assert_eq!(
        render_content(&build_content(&doc.sections)),
        "<div class=\"section\" id=\"intro\"><h1>Intro</h1>\
         <div class=\"markdown-content\">Hello <em>there</em>\n</div></div>"
    );
}

#[test]
fn test_wrappers_carry_parent_and_ancestors() {
    let doc = parse(NESTED);
    let html = render_content(&build_content(&doc.sections));

    assert!(html.contains("<div class=\"content-section\" data-parent=\"a\">"));
    assert!(html.contains(
        "<div class=\"content-section hidden\" data-parent=\"b\" data-ancestors=\"a\">"
    ));
    assert!(html.contains(
        "<div class=\"content-section hidden\" data-parent=\"c\" data-ancestors=\"a b\">"
    ));
    assert!(!html.contains("data-parent=\"d\""), "leaves get no wrapper");
    assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
}

#[test]
fn test_child_blocks_follow_their_parent() {
    let doc = parse(NESTED);
    let html = render_content(&build_content(&doc.sections));
    let a = html.find("id=\"a\"").unwrap();
    let wrapper = html.find("data-parent=\"a\"").unwrap();
    let b = html.find("id=\"b\"").unwrap();
    assert!(a < wrapper && wrapper < b);
}

#[test]
fn test_heading_level_is_clamped() {
    let doc = parse("####### Deep");
    let html = render_content(&build_content(&doc.sections));
    assert!(html.contains("<h6>Deep</h6>"), "got {html}");
}

#[test]
fn test_empty_forest() {
    assert_eq!(render_content(&build_content(&[])), "");
}
