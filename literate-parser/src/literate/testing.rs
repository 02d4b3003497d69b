//! Factories for building node streams in tests.
//!
//! These live outside `#[cfg(test)]` so integration tests and downstream crates can share them.

use super::ast::Segment;
use super::nodes::Token;

pub fn comment(text: &str) -> Token {
    Token::Comment(text.to_string())
}

pub fn code(text: &str) -> Token {
    Token::Code(text.to_string())
}

/// Builds a segment directly, bypassing segmentation.
pub fn segment_of(comment: &str, code: &[&str]) -> Segment<Token> {
    let mut segment = Segment::new(comment);
    segment.code = code.iter().map(|text| Token::Code(text.to_string())).collect();
    segment
}

/// Every code node across `segments`, in order.
pub fn flatten_code<N: Clone>(segments: &[Segment<N>]) -> Vec<N> {
    segments.iter().flat_map(|s| s.code.iter().cloned()).collect()
}

/// Every comment across `segments`, concatenated in order.
pub fn flatten_comments<N>(segments: &[Segment<N>]) -> String {
    segments.iter().map(|s| s.comment.as_str()).collect()
}
