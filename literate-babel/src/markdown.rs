//! Markdown conversion
//!
//! The annotator only needs `text -> html`. [`ComrakConverter`] is the production
//! implementation; tests substitute their own converters through the same trait.

use comrak::{markdown_to_html, ComrakOptions};
use serde::Deserialize;

/// Converts Markdown text to an HTML string. No escaping contract beyond what the
/// implementation does itself.
pub trait MarkdownConverter {
    fn to_html(&self, text: &str) -> String;
}

impl<F> MarkdownConverter for F
where
    F: Fn(&str) -> String,
{
    fn to_html(&self, text: &str) -> String {
        self(text)
    }
}

/// Extension switches handed to comrak.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkdownOptions {
    pub table: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    /// Pass raw HTML in comments through instead of escaping it.
    pub unsafe_html: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        MarkdownOptions {
            table: true,
            strikethrough: true,
            autolink: true,
            unsafe_html: true,
        }
    }
}

/// CommonMark conversion backed by comrak.
pub struct ComrakConverter {
    options: ComrakOptions<'static>,
}

impl ComrakConverter {
    pub fn new(settings: &MarkdownOptions) -> Self {
        let mut options = ComrakOptions::default();
        options.extension.table = settings.table;
        options.extension.strikethrough = settings.strikethrough;
        options.extension.autolink = settings.autolink;
        options.render.unsafe_ = settings.unsafe_html;
        ComrakConverter { options }
    }
}

impl Default for ComrakConverter {
    fn default() -> Self {
        Self::new(&MarkdownOptions::default())
    }
}

impl MarkdownConverter for ComrakConverter {
    fn to_html(&self, text: &str) -> String {
        markdown_to_html(text, &self.options)
    }
}
