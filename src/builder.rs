//! Assembles classified lines into a section tree.
//!
//! All parse state lives in a [`SectionBuilder`] value that is fed one line at a time and
//! consumed by [`SectionBuilder::finish`]. Nothing is shared between parses.
//!
//! The builder keeps the path of currently open sections (root to current) as child indices
//! plus their levels. A new header of level `n` attaches under the deepest open section of
//! level `n - 1`; if there is none it starts a new top-level section.

use crate::classify::{split_lines, LineClassifier, LineKind};
use crate::inline::{escape_html, format_line, slugify, strip_tags};
use crate::section::{Document, Section};
use std::collections::HashSet;

#[derive(Clone, Debug)]
/// Knobs that change how the tree is built.
pub struct ParseOptions {
    /// Suffix colliding ids (`-2`, `-3`, ...) so each id names one section.
    pub dedupe_ids: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { dedupe_ids: true }
    }
}

#[must_use]
/// Parses a markdown document with default options.
pub fn parse(markdown: &str) -> Document {
    parse_with(markdown, &ParseOptions::default())
}

#[must_use]
/// Parses a markdown document into its section tree.
pub fn parse_with(markdown: &str, options: &ParseOptions) -> Document {
    let mut builder = SectionBuilder::new(options.clone());
    for line in split_lines(markdown) {
        builder.push_line(line);
    }
    builder.finish()
}

#[derive(Default)]
struct FenceBuffer {
    language: String,
    body: String,
}

/// Incremental state of one parse.
pub struct SectionBuilder {
    options: ParseOptions,
    classifier: LineClassifier,
    roots: Vec<Section>,
    /// Child indices from the roots down to the current section.
    open_path: Vec<usize>,
    /// Levels of the sections on `open_path`.
    open_levels: Vec<usize>,
    pending: String,
    fence: FenceBuffer,
    issued_ids: HashSet<String>,
}

impl SectionBuilder {
    #[must_use]
    /// Creates an empty builder.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            classifier: LineClassifier::new(),
            roots: Vec::new(),
            open_path: Vec::new(),
            open_levels: Vec::new(),
            pending: String::new(),
            fence: FenceBuffer::default(),
            issued_ids: HashSet::new(),
        }
    }

    /// Feeds the next source line.
    pub fn push_line(&mut self, line: &str) {
        match self.classifier.classify(line) {
            LineKind::FenceOpen { language } => {
                self.fence.language = language.to_string();
            }
            LineKind::FenceBody(text) => {
                self.fence.body.push_str(text);
                self.fence.body.push('\n');
            }
            LineKind::FenceClose => self.close_fence(),
            LineKind::Header { level, text } => self.open_section(level, text),
            LineKind::Prose(text) => {
                self.pending.push_str(&format_line(text));
                self.pending.push('\n');
            }
        }
    }

    #[must_use]
    /// Flushes trailing prose and returns the finished tree.
    pub fn finish(mut self) -> Document {
        if self.classifier.in_fence() {
            log::debug!(
                "dropping unterminated {:?} fence ({} bytes)",
                self.fence.language,
                self.fence.body.len()
            );
        }
        self.flush_pending();
        Document {
            sections: self.roots,
        }
    }

    fn close_fence(&mut self) {
        let fence = std::mem::take(&mut self.fence);
        self.flush_pending();
        let block = format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            escape_html(&fence.language),
            escape_html(&fence.body)
        );
        match self.current_mut() {
            Some(section) => section.content.push_str(&block),
            None => log::debug!("dropping code block outside any section"),
        }
    }

    fn flush_pending(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        if pending.trim().is_empty() {
            return;
        }
        match self.current_mut() {
            Some(section) => section.content.push_str(&pending),
            None => log::debug!("dropping {} bytes of prose before the first header", pending.len()),
        }
    }

    fn open_section(&mut self, level: usize, text: &str) {
        self.flush_pending();

        let title = format_line(text);
        let plain_title = strip_tags(&title);
        let id = self.claim_id(slugify(&plain_title));
        let section = Section::new(id, title, plain_title, level);

        let parent_depth = self
            .open_levels
            .iter()
            .rposition(|&open| open + 1 == level);

        match parent_depth {
            Some(depth) => {
                self.open_path.truncate(depth + 1);
                self.open_levels.truncate(depth + 1);
                // A prefix of a resolvable path still resolves.
                let parent = self.current_mut();
                debug_assert!(parent.is_some(), "open path must resolve after truncation");
                match parent {
                    Some(parent) => {
                        parent.children.push(section);
                        let index = parent.children.len() - 1;
                        self.open_path.push(index);
                        self.open_levels.push(level);
                    }
                    None => {
                        log::error!("lost the open section path, placing {text:?} at top level");
                        self.start_root(section);
                    }
                }
            }
            None => {
                if level > 1 {
                    log::debug!("level {level} header {text:?} has no parent, placing at top level");
                }
                self.start_root(section);
            }
        }
    }

    fn start_root(&mut self, section: Section) {
        let level = section.level;
        self.roots.push(section);
        self.open_path = vec![self.roots.len() - 1];
        self.open_levels = vec![level];
    }

    fn current_mut(&mut self) -> Option<&mut Section> {
        let (first, rest) = self.open_path.split_first()?;
        let mut section = self.roots.get_mut(*first)?;
        for &index in rest {
            section = section.children.get_mut(index)?;
        }
        Some(section)
    }

    fn claim_id(&mut self, base: String) -> String {
        if !self.options.dedupe_ids {
            return base;
        }
        let mut candidate = base.clone();
        let mut suffix = 1;
        while !self.issued_ids.insert(candidate.clone()) {
            suffix += 1;
            candidate = format!("{base}-{suffix}");
        }
        if suffix > 1 {
            log::debug!("id {base:?} already taken, using {candidate:?}");
        }
        candidate
    }
}

#[cfg(test)]
#[path = "tests/builder.rs"]
mod tests;
