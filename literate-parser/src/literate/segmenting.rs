//! Segmentation
//!
//!     Uses the very simple heuristic that a doc comment always precedes the code it addresses.
//!     Nodes are accumulated into the current segment until a doc comment is seen, which closes
//!     the current segment and opens a new one carrying that comment.
//!
//!     The first segment never has a comment, and the last one is pushed even when empty. The
//!     merge pass cleans both up.

use super::ast::Segment;
use super::nodes::{is_doc_comment, SourceNode};
use tracing::trace;

/// Segments `nodes` using the default doc comment classification.
pub fn segment<N, I>(nodes: I) -> Vec<Segment<N>>
where
    N: SourceNode,
    I: IntoIterator<Item = N>,
{
    segment_with(nodes, |node: &N| is_doc_comment(node))
}

/// Segments `nodes`, treating a node as a doc comment when `is_doc_comment` says so.
pub fn segment_with<N, I, F>(nodes: I, is_doc_comment: F) -> Vec<Segment<N>>
where
    N: SourceNode,
    I: IntoIterator<Item = N>,
    F: Fn(&N) -> bool,
{
    let mut segments = Vec::new();
    let mut current = Segment::default();

    for node in nodes {
        if is_doc_comment(&node) {
            let comment = node.comment_source().into_owned();
            segments.push(std::mem::replace(&mut current, Segment::new(comment)));
        } else {
            current.code.push(node);
        }
    }

    segments.push(current);
    trace!(segments = segments.len(), "segmented node stream");
    segments
}
