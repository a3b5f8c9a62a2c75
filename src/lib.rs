//! docmap: collapsible section outlines and synchronized document views for markdown.
//!
//! A document is parsed once into a forest of [`Section`]s keyed by heading. Two independent
//! renderers walk that forest: the outline (a collapsible table of contents) and the content
//! view (the body, nested to mirror the headings). The [`toggle::ToggleCoordinator`] keeps
//! both views agreeing on which subtrees are open.
//!
//! ```
//! let doc = docmap::parse("# Title\n\nSome **bold** text.\n\n## Sub\nMore text.");
//! assert_eq!(doc.sections[0].id, "title");
//! assert_eq!(doc.sections[0].children[0].id, "sub");
//! ```

pub mod app_state;
pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod highlight;
pub mod inline;
pub mod input;
pub mod render;
pub mod section;
pub mod toggle;
pub mod ui;

pub use builder::{parse, parse_with, ParseOptions};
pub use error::{Error, Result};
pub use section::{Document, Section};
