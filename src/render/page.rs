//! Standalone HTML page holding the outline and content views side by side.

use crate::inline::escape_html;
use crate::render::content::{build_content, render_content};
use crate::render::outline::{build_outline, render_outline};
use crate::section::Document;
use std::fmt::Display;

const BASE_CSS: &str = "\
body { display: flex; margin: 0; font-family: system-ui, sans-serif; }
#tree-view { width: 300px; height: 100vh; overflow-y: auto; padding: 1rem; border-right: 1px solid #ddd; }
#tree-view ul { list-style: none; padding-left: 1rem; }
#tree-view > ul { padding-left: 0; }
.tree-item { cursor: pointer; padding: 2px 0; }
.tree-item.active { font-weight: bold; }
.tree-toggle { display: inline-block; width: 16px; cursor: pointer; }
#content { flex: 1; height: 100vh; overflow-y: auto; padding: 1rem 2rem; }
.content-section { margin-left: 1rem; }
.hidden { display: none; }
.error-message { color: #b00020; border: 1px solid #b00020; padding: 1rem; }
";

/// Runs the toggle protocol in the browser: the outline state decides the direction, the
/// matching content wrapper follows, and a collapse closes the whole subtree.
const PAGE_SCRIPT: &str = r##"
(function () {
  var COLLAPSED = '+';
  var EXPANDED = '−';

  function wrappers(attribute, id) {
    return Array.prototype.filter.call(
      document.querySelectorAll('.content-section[' + attribute + ']'),
      function (wrapper) {
        return wrapper.getAttribute(attribute).split(' ').indexOf(id) !== -1;
      });
  }

  function toggle(item) {
    var list = item.parentElement.querySelector(':scope > ul');
    var glyph = item.querySelector('.tree-toggle');
    if (!list || !glyph) {
      return;
    }
    var id = item.getAttribute('data-section');
    var collapsing = !list.classList.contains('hidden');
    list.classList.toggle('hidden', collapsing);
    glyph.textContent = collapsing ? COLLAPSED : EXPANDED;
    wrappers('data-parent', id).forEach(function (wrapper) {
      wrapper.classList.toggle('hidden', collapsing);
    });
    if (!collapsing) {
      return;
    }
    list.querySelectorAll('ul').forEach(function (nested) {
      nested.classList.add('hidden');
    });
    list.querySelectorAll('.tree-toggle').forEach(function (nested) {
      nested.textContent = COLLAPSED;
    });
    wrappers('data-ancestors', id).forEach(function (wrapper) {
      wrapper.classList.add('hidden');
    });
  }

  document.querySelectorAll('#tree-view .tree-item').forEach(function (item) {
    item.addEventListener('click', function (event) {
      toggle(item);
      if (event.target.classList.contains('tree-toggle')) {
        return;
      }
      var target = document.getElementById(item.getAttribute('data-section'));
      if (target) {
        target.scrollIntoView({ behavior: 'smooth' });
      }
      document.querySelectorAll('#tree-view .tree-item.active').forEach(function (other) {
        other.classList.remove('active');
      });
      item.classList.add('active');
    });
  });
})();
"##;

#[derive(Clone, Debug)]
/// Fixed text surrounding the two views.
pub struct PageOptions {
    /// Document title for the browser tab.
    pub title: String,
    /// Heading above the outline.
    pub toc_heading: String,
    /// Heading above the content.
    pub content_heading: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "docmap".to_string(),
            toc_heading: "Table of Contents".to_string(),
            content_heading: "Content".to_string(),
        }
    }
}

#[must_use]
/// Renders a document as a complete page.
///
/// The views start in their initial state; an inline script expands and collapses them when
/// outline entries are clicked.
pub fn render_page(document: &Document, options: &PageOptions) -> String {
    let outline = render_outline(&build_outline(document.toc()));
    let content = render_content(&build_content(&document.sections));
    embed(options, &outline, &content)
}

#[must_use]
/// Renders the block shown in place of the content when the source cannot be loaded.
pub fn render_error(error: &impl Display) -> String {
    format!(
        "<div class=\"error-message\"><h2>Error Loading Content</h2>\
         <p>There was a problem loading the markdown file: {}</p>\
         <p>Please make sure the file exists and is readable.</p></div>",
        escape_html(&error.to_string())
    )
}

#[must_use]
/// Renders a page whose content area is replaced by the load error.
pub fn render_error_page(error: &impl Display, options: &PageOptions) -> String {
    let mut out = String::new();
    out.push_str(&page_head(options));
    out.push_str("<main id=\"content\">");
    out.push_str(&render_error(error));
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn embed(options: &PageOptions, outline: &str, content: &str) -> String {
    let mut out = page_head(options);
    out.push_str("<nav id=\"tree-view\"><h2>");
    out.push_str(&escape_html(&options.toc_heading));
    out.push_str("</h2>");
    out.push_str(outline);
    out.push_str("</nav>\n<main id=\"content\"><h2>");
    out.push_str(&escape_html(&options.content_heading));
    out.push_str("</h2>");
    out.push_str(content);
    out.push_str("</main>\n<script>");
    out.push_str(PAGE_SCRIPT);
    out.push_str("</script>\n</body>\n</html>\n");
    out
}

fn page_head(options: &PageOptions) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\">\n");
    out.push_str("<head>\n");
    out.push_str("  <meta charset=\"utf-8\" />\n");
    out.push_str("  <title>");
    out.push_str(&escape_html(&options.title));
    out.push_str("</title>\n");
    out.push_str("  <style>\n");
    out.push_str(BASE_CSS);
    out.push_str("  </style>\n");
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    out
}

#[cfg(test)]
#[path = "../tests/page.rs"]
mod tests;
