//! HTML and Markdown interop for literate renderings
//!
//!     This crate connects the segmentation in literate-parser to real markup: it reads the raw
//!     node stream out of an HTML page, renders doc comments through a Markdown converter and
//!     lays the result out as documentation/code section pairs.
//!
//!     This is a pure lib: no code here assumes a shell environment (printing, env vars, files).
//!
//!     The file structure :
//!     .
//!     ├── error.rs         RenderError
//!     ├── dom              query toolkit over rcdom (tree ops, selectors)
//!     ├── markdown.rs      MarkdownConverter trait and the comrak implementation
//!     ├── source.rs        DOM nodes as segmenter input
//!     ├── annotate.rs      segment markup
//!     ├── render.rs        section layout
//!     └── page.rs          whole-page transformation
//!
//! Implementation Principles
//!
//!     Markdown and HTML are handled by specialized crates (comrak, html5ever). The scope here is
//!     adapting between them and the segment model, never re-implementing either format.

pub mod annotate;
pub mod dom;
pub mod error;
pub mod markdown;
pub mod page;
pub mod render;
pub mod source;

pub use error::RenderError;
pub use markdown::{ComrakConverter, MarkdownConverter, MarkdownOptions};
pub use page::{to_literate, LiteratePage, RenderOptions};
pub use source::DomNode;
