//! Views of a parsed document.
//!
//! The outline and content renderers each walk the section tree independently and produce
//! both a structured form and HTML markup. Section ids are the only link between the two,
//! which is what the toggle coordinator relies on to keep them in step. The page module
//! stitches both into a standalone HTML document.

pub mod content;
pub mod outline;
pub mod page;

/// Class applied to any element that starts out invisible.
pub const HIDDEN_CLASS: &str = "hidden";
