//! Cosmetic syntax highlighting applied once to a fully rendered document.
//!
//! Highlighting only rewrites the inside of `<pre><code class="language-X">` blocks. Blocks
//! in a language syntect does not know are left exactly as rendered.

use crate::error::{Error, Result};
use crate::inline::unescape_html;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Theme used when the configuration does not name one.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

const BLOCK_OPEN: &str = "<pre><code class=\"language-";
const BLOCK_CLOSE: &str = "</code></pre>";

/// Post-processes rendered markup.
pub trait Highlighter {
    /// Returns the document with code blocks decorated.
    fn highlight(&self, document: &str) -> String;
}

/// Leaves documents untouched.
pub struct NoHighlight;

impl Highlighter for NoHighlight {
    fn highlight(&self, document: &str) -> String {
        document.to_string()
    }
}

/// Highlights code blocks with syntect's bundled syntaxes and themes.
pub struct SyntectHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl SyntectHighlighter {
    /// Loads the bundled syntaxes and the named theme.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTheme`] if syntect does not bundle a theme by that name.
    pub fn new(theme_name: &str) -> Result<Self> {
        let mut themes = ThemeSet::load_defaults().themes;
        let theme = themes
            .remove(theme_name)
            .ok_or_else(|| Error::UnknownTheme(theme_name.to_string()))?;
        Ok(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    fn highlight_block(&self, code_html: &str, syntax: &SyntaxReference) -> Option<String> {
        let code = unescape_html(code_html);
        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut out = String::with_capacity(code_html.len() * 2);
        for line in LinesWithEndings::from(&code) {
            let ranges = highlighter.highlight_line(line, &self.syntax_set).ok()?;
            out.push_str(&styled_line_to_highlighted_html(&ranges[..], IncludeBackground::No).ok()?);
        }
        Some(out)
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, document: &str) -> String {
        let mut out = String::with_capacity(document.len());
        let mut rest = document;

        while let Some(start) = rest.find(BLOCK_OPEN) {
            let after_open = start + BLOCK_OPEN.len();
            let Some(tag_len) = rest[after_open..].find("\">") else {
                break;
            };
            let language = &rest[after_open..after_open + tag_len];
            let body_start = after_open + tag_len + 2;
            let Some(body_len) = rest[body_start..].find(BLOCK_CLOSE) else {
                break;
            };
            let body = &rest[body_start..body_start + body_len];

            out.push_str(&rest[..body_start]);
            let syntax = if language.is_empty() {
                None
            } else {
                self.syntax_set.find_syntax_by_token(&unescape_html(language))
            };
            match syntax.and_then(|syntax| self.highlight_block(body, syntax)) {
                Some(highlighted) => out.push_str(&highlighted),
                None => {
                    log::debug!("no highlighting for language {language:?}");
                    out.push_str(body);
                }
            }
            rest = &rest[body_start + body_len..];
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
#[path = "tests/highlight.rs"]
mod tests;
