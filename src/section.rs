//! Section representation for parsed markdown documents.
//!
//! A section represents a hierarchical division of a document, corresponding to a heading in
//! markdown. Sections own their children directly, so a [`Document`] is a forest of sections
//! in document order. The tree is built once per parse and read by every renderer without
//! further mutation.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Heading-delimited division of a document along with its rendered body.
pub struct Section {
    /// Anchor derived from the plain title, shared by the outline and content views.
    pub id: String,
    /// Heading text after inline formatting.
    pub title: String,
    /// Heading text with markup removed, used as the outline label.
    pub plain_title: String,
    /// Nesting depth in the document hierarchy (count of leading `#`).
    pub level: usize,
    /// Formatted prose and code blocks that follow the heading, in source order.
    pub content: String,
    /// Directly nested subsections in document order.
    pub children: Vec<Section>,
}

impl Section {
    #[must_use]
    /// Creates a section with no body and no children yet.
    pub fn new(id: String, title: String, plain_title: String, level: usize) -> Self {
        Self {
            id,
            title,
            plain_title,
            level,
            content: String::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    /// Whether the outline should offer an expand/collapse toggle for this section.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// The parsed section forest of one markdown document.
pub struct Document {
    /// Top-level sections, which double as the table-of-contents entries.
    pub sections: Vec<Section>,
}

impl Document {
    #[must_use]
    /// Entries of the table of contents (the top-level sections).
    pub fn toc(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    /// True when the document contained no headers at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    /// Total number of sections at every depth.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Walks every section depth-first in document order, yielding its depth alongside.
    ///
    /// Top-level sections have depth 0 regardless of their heading level.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(&self.sections)
    }

    #[must_use]
    /// Looks up a section by id; with colliding ids the last one in document order wins.
    pub fn find(&self, id: &str) -> Option<&Section> {
        self.iter()
            .filter(|(_, section)| section.id == id)
            .map(|(_, section)| section)
            .last()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (usize, &'a Section);
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first, document-order iterator over a section forest.
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a Section)>,
}

impl<'a> PreOrder<'a> {
    #[must_use]
    /// Starts a traversal over the given sibling sequence.
    pub fn new(sections: &'a [Section]) -> Self {
        Self {
            stack: sections.iter().rev().map(|s| (0, s)).collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a Section);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, section) = self.stack.pop()?;
        self.stack
            .extend(section.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, section))
    }
}
