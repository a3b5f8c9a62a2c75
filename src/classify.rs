//! Per-line classification with fence tracking.
//!
//! Lines are classified one at a time. The only state carried between lines is whether a
//! fence is open: while it is, nothing is recognised as a header or formatted.

/// Delimiter that opens and closes a fenced block when it starts a trimmed line.
pub const FENCE_MARKER: &str = "```";
/// Character whose leading run marks a header line.
pub const HEADER_MARKER: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a single source line participates in the document.
pub enum LineKind<'a> {
    /// Opening fence delimiter with the declared language (possibly empty).
    FenceOpen {
        /// Trimmed text after the marker, kept as a display hint.
        language: &'a str,
    },
    /// A line inside an open fence, taken verbatim.
    FenceBody(&'a str),
    /// Closing fence delimiter.
    FenceClose,
    /// A heading outside any fence.
    Header {
        /// Count of leading header markers.
        level: usize,
        /// Heading text with the markers and surrounding whitespace removed.
        text: &'a str,
    },
    /// Any other line outside a fence.
    Prose(&'a str),
}

#[derive(Debug, Default)]
/// Classifies lines in order, remembering whether a fence is open.
pub struct LineClassifier {
    in_fence: bool,
}

impl LineClassifier {
    #[must_use]
    /// Starts outside any fence.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Whether the last classified line left a fence open.
    pub fn in_fence(&self) -> bool {
        self.in_fence
    }

    /// Classifies the next line, toggling fence state on delimiter lines.
    pub fn classify<'a>(&mut self, line: &'a str) -> LineKind<'a> {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix(FENCE_MARKER) {
            self.in_fence = !self.in_fence;
            return if self.in_fence {
                LineKind::FenceOpen {
                    language: rest.trim(),
                }
            } else {
                LineKind::FenceClose
            };
        }

        if self.in_fence {
            return LineKind::FenceBody(line);
        }

        match header_level(line) {
            Some(level) => LineKind::Header {
                level,
                text: line[level..].trim(),
            },
            None => LineKind::Prose(line),
        }
    }
}

#[must_use]
/// Counts the leading header markers of an untrimmed line, if there are any.
pub fn header_level(line: &str) -> Option<usize> {
    let level = line.chars().take_while(|&c| c == HEADER_MARKER).count();
    (level > 0).then_some(level)
}

/// Splits a document into lines on `\n`, dropping a trailing `\r` from each.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
#[path = "tests/classify.rs"]
mod tests;
