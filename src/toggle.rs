//! Keeps the outline and the content view agreeing on which subtrees are open.
//!
//! Two visibility flags are tracked for every section with children:
//!
//! - outline expanded: whether the section's nested list is shown in the outline
//!   (its toggle glyph follows this flag).
//! - content visible: whether the wrapper holding the section's child blocks is shown.
//!
//! Both flags are only written by [`ToggleCoordinator::toggle_at`], which updates them
//! together. Flags belong to a section's position in the tree, so sections sharing an id
//! still toggle independently.
//!
//! Expanding reveals exactly one level. Collapsing cascades: every descendant list, glyph and
//! content wrapper is closed, so a later expand starts from a fully collapsed subtree.
//!
//! ```text
//! collapsed --toggle--> expanded (children visible, grandchildren still collapsed)
//!     ^                    |
//!     |____toggle__________|  (descendants forced collapsed)
//! ```

use crate::section::Section;
use std::collections::HashMap;

/// Glyph shown on a collapsed toggle.
pub const COLLAPSED_GLYPH: &str = "+";
/// Glyph shown on an expanded toggle.
pub const EXPANDED_GLYPH: &str = "\u{2212}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which way a toggle went.
pub enum ToggleAction {
    /// The immediate children became visible.
    Expand,
    /// The whole subtree was hidden.
    Collapse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Result of toggling one outline node.
pub struct ToggleOutcome {
    /// Direction of the toggle.
    pub action: ToggleAction,
    /// Glyph the toggled node now shows.
    pub glyph: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of selecting an outline label.
pub struct Selection {
    /// Content block to bring into view.
    pub scroll_to: String,
    /// Toggle applied on the way, if the node was expandable.
    pub toggled: Option<ToggleOutcome>,
}

#[derive(Clone, Debug)]
struct Entry {
    id: String,
    parent: Option<usize>,
    children: Vec<usize>,
    depth: usize,
    /// `(outline_expanded, content_visible)`, `None` for leaves.
    state: Option<(bool, bool)>,
}

#[derive(Clone, Debug)]
/// Expand/collapse and selection state shared by the outline and content views.
///
/// State is kept per entry, where an entry's position is its index in
/// [`Document::iter`](crate::section::Document::iter) order. The `*_at` methods address
/// entries by position; the id-based methods resolve the id first, and with colliding ids
/// the later entry wins.
pub struct ToggleCoordinator {
    /// Sections flattened in document order.
    entries: Vec<Entry>,
    /// Id to position; with colliding ids the later entry wins.
    index: HashMap<String, usize>,
    active: Option<usize>,
}

impl ToggleCoordinator {
    #[must_use]
    /// Sets up the initial state the renderers produce.
    ///
    /// Every outline list is collapsed. Child wrappers of top-level sections are visible and
    /// all deeper wrappers are hidden.
    pub fn new(sections: &[Section]) -> Self {
        let mut coordinator = Self {
            entries: Vec::new(),
            index: HashMap::new(),
            active: None,
        };
        coordinator.flatten(sections, None, 0);
        coordinator
    }

    fn flatten(&mut self, sections: &[Section], parent: Option<usize>, depth: usize) {
        for section in sections {
            let position = self.entries.len();
            self.entries.push(Entry {
                id: section.id.clone(),
                parent,
                children: Vec::new(),
                depth,
                state: section.has_children().then_some((false, depth == 0)),
            });
            if let Some(parent) = parent {
                self.entries[parent].children.push(position);
            }
            self.index.insert(section.id.clone(), position);
            self.flatten(&section.children, Some(position), depth + 1);
        }
    }

    #[must_use]
    /// Position of the entry an id resolves to.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Flips a node between expanded and collapsed.
    ///
    /// Returns `None` for leaves and unknown ids, which have nothing to toggle.
    pub fn toggle(&mut self, id: &str) -> Option<ToggleOutcome> {
        self.toggle_at(self.position_of(id)?)
    }

    /// Flips the entry at `position` between expanded and collapsed.
    pub fn toggle_at(&mut self, position: usize) -> Option<ToggleOutcome> {
        let (expanded, _) = self.entries.get(position)?.state?;
        let collapsing = expanded;

        self.entries[position].state = Some((!collapsing, !collapsing));

        if collapsing {
            for descendant in self.descendants(position) {
                if let Some(state) = self.entries[descendant].state.as_mut() {
                    *state = (false, false);
                }
            }
        }

        let (action, glyph) = if collapsing {
            (ToggleAction::Collapse, COLLAPSED_GLYPH)
        } else {
            (ToggleAction::Expand, EXPANDED_GLYPH)
        };
        Some(ToggleOutcome { action, glyph })
    }

    /// Handles a click on a node's label: toggle it, scroll to it, make it the active node.
    ///
    /// Returns `None` for unknown ids.
    pub fn select(&mut self, id: &str) -> Option<Selection> {
        self.select_at(self.position_of(id)?)
    }

    /// Selects the entry at `position`.
    pub fn select_at(&mut self, position: usize) -> Option<Selection> {
        let scroll_to = self.entries.get(position)?.id.clone();
        let toggled = self.toggle_at(position);
        self.active = Some(position);
        Some(Selection { scroll_to, toggled })
    }

    #[must_use]
    /// Id of the active node, if any was selected.
    pub fn active(&self) -> Option<&str> {
        self.active.map(|position| self.entries[position].id.as_str())
    }

    #[must_use]
    /// Position of the active node, if any was selected.
    pub fn active_position(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    /// Whether the node is the active one.
    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    #[must_use]
    /// Whether the node's nested list is shown in the outline.
    pub fn is_outline_expanded(&self, id: &str) -> bool {
        self.position_of(id)
            .is_some_and(|position| self.outline_expanded_at(position))
    }

    #[must_use]
    /// Whether the wrapper holding the node's child blocks is shown.
    pub fn is_content_visible(&self, id: &str) -> bool {
        self.position_of(id)
            .is_some_and(|position| self.content_visible_at(position))
    }

    fn outline_expanded_at(&self, position: usize) -> bool {
        self.entries[position].state.is_some_and(|(expanded, _)| expanded)
    }

    fn content_visible_at(&self, position: usize) -> bool {
        self.entries[position].state.is_some_and(|(_, visible)| visible)
    }

    #[must_use]
    /// Toggle glyph for the node, `None` for leaves.
    pub fn glyph(&self, id: &str) -> Option<&'static str> {
        self.glyph_at(self.position_of(id)?)
    }

    #[must_use]
    /// Toggle glyph for the entry at `position`, `None` for leaves.
    pub fn glyph_at(&self, position: usize) -> Option<&'static str> {
        self.entries.get(position)?.state.map(|(expanded, _)| {
            if expanded {
                EXPANDED_GLYPH
            } else {
                COLLAPSED_GLYPH
            }
        })
    }

    #[must_use]
    /// Whether the node's own row can be seen in the outline (every ancestor expanded).
    pub fn is_row_visible(&self, id: &str) -> bool {
        self.position_of(id)
            .is_some_and(|position| self.is_row_visible_at(position))
    }

    #[must_use]
    /// Whether the row of the entry at `position` can be seen in the outline.
    pub fn is_row_visible_at(&self, position: usize) -> bool {
        position < self.entries.len()
            && self.ancestors(position).all(|a| self.outline_expanded_at(a))
    }

    #[must_use]
    /// Whether the node's content block is on screen (every enclosing wrapper visible).
    pub fn is_block_visible(&self, id: &str) -> bool {
        self.position_of(id)
            .is_some_and(|position| self.is_block_visible_at(position))
    }

    #[must_use]
    /// Whether the content block of the entry at `position` is on screen.
    pub fn is_block_visible_at(&self, position: usize) -> bool {
        position < self.entries.len()
            && self.ancestors(position).all(|a| self.content_visible_at(a))
    }

    #[must_use]
    /// Outline rows currently visible, in document order, with their depth.
    pub fn visible_rows(&self) -> Vec<(&str, usize)> {
        (0..self.entries.len())
            .filter(|&position| self.is_row_visible_at(position))
            .map(|position| (self.entries[position].id.as_str(), self.entries[position].depth))
            .collect()
    }

    #[must_use]
    /// Id of the node's parent, `None` for top-level nodes and unknown ids.
    pub fn parent_of(&self, id: &str) -> Option<&str> {
        let parent = self.parent_at(self.position_of(id)?)?;
        Some(self.entries[parent].id.as_str())
    }

    #[must_use]
    /// Position of the parent of the entry at `position`.
    pub fn parent_at(&self, position: usize) -> Option<usize> {
        self.entries.get(position)?.parent
    }

    fn ancestors(&self, position: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.entries[position].parent, |&p| self.entries[p].parent)
    }

    fn descendants(&self, position: usize) -> Vec<usize> {
        let mut found = Vec::new();
        let mut stack = self.entries[position].children.clone();
        while let Some(next) = stack.pop() {
            found.push(next);
            stack.extend(self.entries[next].children.iter().copied());
        }
        found
    }
}

#[cfg(test)]
#[path = "tests/toggle.rs"]
mod tests;
