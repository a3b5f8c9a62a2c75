//! The state machine behind the interactive browser.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the user
//! navigates. The parsed document never changes; everything that does (which subtrees are
//! open, which node is active) lives in the [`ToggleCoordinator`], and this module only adds
//! the cursor, the scroll position and the status message on top.

use crate::inline::{strip_tags, unescape_html};
use crate::section::Document;
use crate::toggle::{ToggleAction, ToggleCoordinator};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Which pane receives navigation keys.
pub enum Focus {
    /// Arrow keys move through the outline.
    Outline,
    /// Arrow keys scroll the document body.
    Content,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One visible outline row.
pub struct Row {
    /// Position of the section in document order.
    pub position: usize,
    /// Section the row points at.
    pub id: String,
    /// Plain-text label.
    pub label: String,
    /// Indentation depth.
    pub depth: usize,
    /// Toggle glyph, `None` for leaves.
    pub glyph: Option<&'static str>,
    /// Whether this is the active (last selected) node.
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a line of the content pane should be styled.
pub enum LineStyle {
    /// Section heading of the given level.
    Heading(usize),
    /// Body text.
    Body,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One line of the content pane.
pub struct ContentLine {
    /// Position of the section the line belongs to.
    pub position: usize,
    /// Section the line belongs to.
    pub id: String,
    /// Styling hint.
    pub style: LineStyle,
    /// Plain text to display.
    pub text: String,
}

/// Browser session state.
pub struct AppState {
    /// Parsed document being browsed.
    pub document: Document,
    /// Expand/collapse and selection state shared by both panes.
    pub coordinator: ToggleCoordinator,
    /// Name of the document, shown in the pane titles.
    pub title: String,
    /// Pane receiving navigation keys.
    pub focus: Focus,
    /// Selected row in the outline.
    pub cursor: usize,
    /// First visible line of the content pane.
    pub content_scroll: u16,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Outline pane width in percent.
    pub outline_width: u16,
}

impl AppState {
    #[must_use]
    /// Starts a session on a parsed document with every subtree collapsed.
    pub fn new(title: String, document: Document, outline_width: u16) -> Self {
        let coordinator = ToggleCoordinator::new(&document.sections);
        Self {
            document,
            coordinator,
            title,
            focus: Focus::Outline,
            cursor: 0,
            content_scroll: 0,
            message: None,
            outline_width,
        }
    }

    #[must_use]
    /// Outline rows currently visible, in document order.
    pub fn rows(&self) -> Vec<Row> {
        self.document
            .iter()
            .enumerate()
            .filter(|&(position, _)| self.coordinator.is_row_visible_at(position))
            .map(|(position, (depth, section))| Row {
                position,
                id: section.id.clone(),
                label: section.plain_title.clone(),
                depth,
                glyph: self.coordinator.glyph_at(position),
                active: self.coordinator.active_position() == Some(position),
            })
            .collect()
    }

    #[must_use]
    /// Id of the section under the cursor.
    pub fn current_id(&self) -> Option<String> {
        self.current_row().map(|row| row.id)
    }

    fn current_row(&self) -> Option<Row> {
        self.rows().into_iter().nth(self.cursor)
    }

    /// Moves the cursor up one row.
    pub fn navigate_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row.
    pub fn navigate_down(&mut self) {
        if self.cursor + 1 < self.rows().len() {
            self.cursor += 1;
        }
    }

    /// Jumps to the first row.
    pub fn navigate_to_first(&mut self) {
        self.cursor = 0;
    }

    /// Jumps to the last row.
    pub fn navigate_to_last(&mut self) {
        self.cursor = self.rows().len().saturating_sub(1);
    }

    /// Moves the cursor to the containing section.
    pub fn navigate_to_parent(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        if let Some(parent) = self.coordinator.parent_at(row.position) {
            self.move_cursor_to(parent);
        }
    }

    /// Expands or collapses the section under the cursor.
    pub fn toggle_current(&mut self) {
        let Some(Row { position, id, .. }) = self.current_row() else {
            return;
        };
        self.message = match self.coordinator.toggle_at(position) {
            Some(outcome) if outcome.action == ToggleAction::Expand => Some(format!("Expanded {id}")),
            Some(_) => Some(format!("Collapsed {id}")),
            None => Some(format!("{id} has no subsections")),
        };
        self.move_cursor_to(position);
    }

    /// Selects the section under the cursor: toggle it, scroll the body to it, mark it active.
    pub fn select_current(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        if self.coordinator.select_at(row.position).is_none() {
            return;
        }
        self.move_cursor_to(row.position);
        if let Some(offset) = self
            .content_lines()
            .iter()
            .position(|line| line.position == row.position)
        {
            self.content_scroll = u16::try_from(offset).unwrap_or(u16::MAX);
        }
        self.message = None;
    }

    /// Scrolls the body by the given number of lines, staying within the content.
    pub fn scroll_content(&mut self, delta: i32) {
        let max = self.content_lines().len().saturating_sub(1);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        let scrolled = i32::from(self.content_scroll) + delta;
        self.content_scroll = u16::try_from(scrolled.max(0)).unwrap_or(u16::MAX).min(max);
    }

    /// Switches keyboard focus between the panes.
    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Outline => Focus::Content,
            Focus::Content => Focus::Outline,
        };
    }

    #[must_use]
    /// Text of every visible content block, as plain lines.
    pub fn content_lines(&self) -> Vec<ContentLine> {
        let mut lines = Vec::new();
        for (position, (_, section)) in self.document.iter().enumerate() {
            if !self.coordinator.is_block_visible_at(position) {
                continue;
            }
            lines.push(ContentLine {
                position,
                id: section.id.clone(),
                style: LineStyle::Heading(section.level),
                text: format!("{} {}", "#".repeat(section.level), section.plain_title),
            });
            for text in body_lines(&section.content) {
                lines.push(ContentLine {
                    position,
                    id: section.id.clone(),
                    style: LineStyle::Body,
                    text,
                });
            }
            lines.push(ContentLine {
                position,
                id: section.id.clone(),
                style: LineStyle::Body,
                text: String::new(),
            });
        }
        lines
    }

    fn move_cursor_to(&mut self, position: usize) {
        let rows = self.rows();
        if let Some(index) = rows.iter().position(|row| row.position == position) {
            self.cursor = index;
        } else {
            self.cursor = self.cursor.min(rows.len().saturating_sub(1));
        }
    }
}

/// Converts a section body into terminal text.
fn body_lines(content: &str) -> Vec<String> {
    let text = content
        .replace("<li>", "\u{2022} ")
        .replace("<hr>", &"\u{2500}".repeat(20))
        .replace("</code></pre>", "\n");
    let text = unescape_html(&strip_tags(&text));
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
