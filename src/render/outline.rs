//! Collapsible table-of-contents tree.

use crate::inline::escape_html;
use crate::render::HIDDEN_CLASS;
use crate::section::Section;
use crate::toggle::COLLAPSED_GLYPH;
use serde::Serialize;
use std::fmt::Write;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One entry of the outline.
pub struct OutlineNode {
    /// Id of the section this entry points at.
    pub id: String,
    /// Plain-text label shown in the outline.
    pub label: String,
    /// Whether the entry has a toggle affordance.
    pub expandable: bool,
    /// Distance from the top level (0 for table-of-contents entries).
    pub depth: usize,
    /// Nested entries in document order.
    pub children: Vec<OutlineNode>,
}

#[must_use]
/// Builds the outline structure for a section forest.
pub fn build_outline(sections: &[Section]) -> Vec<OutlineNode> {
    build_level(sections, 0)
}

fn build_level(sections: &[Section], depth: usize) -> Vec<OutlineNode> {
    sections
        .iter()
        .map(|section| OutlineNode {
            id: section.id.clone(),
            label: section.plain_title.clone(),
            expandable: section.has_children(),
            depth,
            children: build_level(&section.children, depth + 1),
        })
        .collect()
}

#[must_use]
/// Renders the outline as nested lists in its initial state.
///
/// Every list below the top level is hidden and every toggle shows the collapsed glyph.
/// Leaves get a fixed-width spacer so labels line up with their toggled siblings.
pub fn render_outline(nodes: &[OutlineNode]) -> String {
    let mut html = String::new();
    write_list(&mut html, nodes, 0);
    html
}

fn write_list(html: &mut String, nodes: &[OutlineNode], depth: usize) {
    if nodes.is_empty() {
        return;
    }
    if depth == 0 {
        html.push_str("<ul class=\"outline\">");
    } else {
        let _ = write!(html, "<ul class=\"{HIDDEN_CLASS}\">");
    }

    for node in nodes {
        let _ = write!(html, "<li><div class=\"tree-item\" data-section=\"{}\">", node.id);
        if node.expandable {
            let _ = write!(html, "<span class=\"tree-toggle\">{COLLAPSED_GLYPH}</span>");
        } else {
            html.push_str("<span class=\"tree-spacer\" style=\"width:16px;display:inline-block;\"></span>");
        }
        html.push_str(&escape_html(&node.label));
        html.push_str("</div>");
        write_list(html, &node.children, depth + 1);
        html.push_str("</li>");
    }

    html.push_str("</ul>");
}

#[cfg(test)]
#[path = "../tests/outline.rs"]
mod tests;
