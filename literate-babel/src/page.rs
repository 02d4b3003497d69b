//! Page transformation
//!
//! Pipeline: source container → segments → annotated segments → merged segments → article.
//!
//! The article is appended to `body`, the source container is hidden (not removed) and `body`
//! gets the `literate` class.

use crate::annotate::annotate;
use crate::dom::{self, Selector};
use crate::error::RenderError;
use crate::markdown::MarkdownConverter;
use crate::render::render_sections;
use crate::source::{source_nodes, DomNode};
use literate_parser::{merge_segments, segment, Document, Segment};
use markup5ever_rcdom::{Handle, RcDom};
use serde::Deserialize;
use tracing::debug;

pub const LITERATE_CLASS: &str = "literate";

/// Where the raw node stream lives and how comments are tagged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderOptions {
    pub source_selector: String,
    pub comment_class: String,
    /// Title used when the page has no `<title>`.
    pub fallback_title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            source_selector: "body > pre".to_string(),
            comment_class: "comment".to_string(),
            fallback_title: String::new(),
        }
    }
}

/// Handles into a transformed page.
#[derive(Debug, Clone)]
pub struct LiteratePage {
    pub title: String,
    pub article: Handle,
    /// The hidden source container.
    pub source: Handle,
    pub sections: usize,
}

/// Locates the source container named by `options.source_selector`.
pub fn find_source(dom: &RcDom, options: &RenderOptions) -> Result<Handle, RenderError> {
    Selector::parse(&options.source_selector)?
        .select_first(&dom.document)
        .ok_or_else(|| RenderError::MissingSource {
            selector: options.source_selector.clone(),
        })
}

/// Segments, annotates and merges the children of `container`.
pub fn build_segments(
    container: &Handle,
    options: &RenderOptions,
    converter: &dyn MarkdownConverter,
) -> Vec<Segment<DomNode>> {
    let mut segments = segment(source_nodes(container, &options.comment_class));
    annotate(&mut segments, converter);
    merge_segments(segments)
}

/// Rewrites `dom` in place into its literate rendering.
pub fn to_literate(
    dom: &RcDom,
    options: &RenderOptions,
    converter: &dyn MarkdownConverter,
) -> Result<LiteratePage, RenderError> {
    let source = find_source(dom, options)?;
    let body = dom::body(dom).ok_or_else(|| RenderError::MissingSource {
        selector: "body".to_string(),
    })?;
    let title = dom::document_title(dom).unwrap_or_else(|| options.fallback_title.clone());

    let document = Document::new(title.clone(), build_segments(&source, options, converter));
    let sections = document.segments.len();
    let article = render_sections(document);

    dom::append(&body, &article);
    dom::hide(&source);
    dom::add_class(&body, LITERATE_CLASS);

    debug!(title = %title, sections, "transformed page");
    Ok(LiteratePage {
        title,
        article,
        source,
        sections,
    })
}
