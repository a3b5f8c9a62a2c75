//! Document body mirroring the section hierarchy.
//!
//! Each section renders as a `div.section` holding its heading and body. Its children go in
//! a sibling wrapper tagged with the section id (`data-parent`) and every id above it
//! (`data-ancestors`), so collapsing any ancestor can find and hide the whole subtree.

use crate::render::HIDDEN_CLASS;
use crate::section::Section;
use serde::Serialize;
use std::fmt::Write;

/// Deepest heading element HTML provides.
const MAX_HEADING: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One labeled block of the content view.
pub struct ContentBlock {
    /// Id of the section, used as the element id.
    pub id: String,
    /// Heading level of the section.
    pub level: usize,
    /// Formatted heading markup.
    pub title: String,
    /// Formatted body markup.
    pub body: String,
    /// Ids of every enclosing section, outermost first.
    pub ancestors: Vec<String>,
    /// Blocks of the child sections, held in this block's wrapper.
    pub children: Vec<ContentBlock>,
    /// Whether the child wrapper starts hidden.
    pub children_hidden: bool,
}

#[must_use]
/// Builds the content blocks for a section forest.
///
/// Child wrappers of top-level sections start visible; deeper ones start hidden.
pub fn build_content(sections: &[Section]) -> Vec<ContentBlock> {
    build_level(sections, &[])
}

fn build_level(sections: &[Section], ancestors: &[String]) -> Vec<ContentBlock> {
    sections
        .iter()
        .map(|section| {
            let mut lineage = ancestors.to_vec();
            lineage.push(section.id.clone());
            ContentBlock {
                id: section.id.clone(),
                level: section.level,
                title: section.title.clone(),
                body: section.content.clone(),
                ancestors: ancestors.to_vec(),
                children: build_level(&section.children, &lineage),
                children_hidden: !ancestors.is_empty(),
            }
        })
        .collect()
}

#[must_use]
/// Renders content blocks as nested markup in their initial state.
pub fn render_content(blocks: &[ContentBlock]) -> String {
    let mut html = String::new();
    for block in blocks {
        write_block(&mut html, block);
    }
    html
}

fn write_block(html: &mut String, block: &ContentBlock) {
    let heading = block.level.clamp(1, MAX_HEADING);
    let _ = write!(
        html,
        "<div class=\"section\" id=\"{id}\"><h{heading}>{title}</h{heading}>\
         <div class=\"markdown-content\">{body}</div></div>",
        id = block.id,
        title = block.title,
        body = block.body,
    );

    if block.children.is_empty() {
        return;
    }

    html.push_str("<div class=\"content-section");
    if block.children_hidden {
        let _ = write!(html, " {HIDDEN_CLASS}");
    }
    let _ = write!(html, "\" data-parent=\"{}\"", block.id);
    if !block.ancestors.is_empty() {
        let _ = write!(html, " data-ancestors=\"{}\"", block.ancestors.join(" "));
    }
    html.push('>');
    for child in &block.children {
        write_block(html, child);
    }
    html.push_str("</div>");
}

#[cfg(test)]
#[path = "../tests/content.rs"]
mod tests;
