//! Segment and Document
//!
//!     A Segment is one documentation comment plus the code nodes that follow it. The node type
//!     is opaque to this crate: segments only move nodes around, they never inspect code.
//!
//!     Invariant: every top-level node of the source stream lands in exactly one segment, in
//!     source order, and a segment's code list keeps that order.

use serde::Serialize;

/// One documentation comment grouped with the code it precedes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<N> {
    /// Raw comment including its delimiters, empty when the segment has no comment.
    pub comment: String,
    /// Code nodes in source order.
    pub code: Vec<N>,
    /// Rendered documentation, `None` until the segment has been annotated.
    pub markup: Option<String>,
}

impl<N> Segment<N> {
    pub fn new(comment: impl Into<String>) -> Self {
        Segment {
            comment: comment.into(),
            code: Vec::new(),
            markup: None,
        }
    }

    /// A segment with neither comment nor code contributes nothing to the rendering.
    pub fn is_vacuous(&self) -> bool {
        self.code.is_empty() && self.comment.is_empty()
    }

    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }

    /// The rendered markup, or the empty string when not yet annotated.
    pub fn markup_str(&self) -> &str {
        self.markup.as_deref().unwrap_or("")
    }

    /// Folds `other` into `self`: code lists, comments and markup are concatenated in order.
    pub fn absorb(&mut self, other: Segment<N>) {
        self.code.extend(other.code);
        self.comment.push_str(&other.comment);
        self.markup = match (self.markup.take(), other.markup) {
            (None, None) => None,
            (left, right) => {
                let mut joined = left.unwrap_or_default();
                joined.push_str(&right.unwrap_or_default());
                Some(joined)
            }
        };
    }
}

impl<N> Default for Segment<N> {
    fn default() -> Self {
        Segment::new("")
    }
}

/// A titled, ordered sequence of segments. Built once per page; only `markup` changes after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document<N> {
    pub title: String,
    pub segments: Vec<Segment<N>>,
}

impl<N> Document<N> {
    pub fn new(title: impl Into<String>, segments: Vec<Segment<N>>) -> Self {
        Document {
            title: title.into(),
            segments,
        }
    }
}
