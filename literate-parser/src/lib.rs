//! # literate-parser
//!
//! Turns a flat stream of annotated source nodes into ordered documentation/code segments.
//!
//! File Layout
//!
//! The crate only knows about nodes through the [`SourceNode`](literate::nodes::SourceNode)
//! capability trait, so it carries no HTML dependency. The DOM-backed node type lives in
//! literate-babel, the plain [`Token`](literate::nodes::Token) type here serves tests and
//! non-DOM callers.
//!
//! src/literate
//!   ├── ast.rs          Segment and Document
//!   ├── nodes.rs        SourceNode capability trait, Token, doc comment classification
//!   ├── comments.rs     comment delimiter stripping
//!   ├── entities.rs     named entity decoding
//!   ├── segmenting.rs   node stream -> segments
//!   ├── merging.rs      segment cleanup pass
//!   └── testing.rs      factories shared by tests
//!
//! The pipeline order is segment, annotate (in literate-babel), then merge: merging
//! concatenates already rendered markup.

pub mod literate;

pub use literate::ast::{Document, Segment};
pub use literate::comments::extract_comment_text;
pub use literate::entities::html_decode;
pub use literate::merging::merge_segments;
pub use literate::nodes::{is_doc_comment, SourceNode, Token};
pub use literate::segmenting::{segment, segment_with};
