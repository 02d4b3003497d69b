//! Source nodes
//!
//!     The segmenter sees each top-level node through two capabilities: whether the producer
//!     tagged it as a comment, and its text. Classification of doc comments is a plain predicate
//!     over those capabilities so callers can swap heuristics without touching segmentation.

use serde::Serialize;
use std::borrow::Cow;

/// Capabilities the segmenter needs from a top-level node.
pub trait SourceNode {
    /// Whether the producer tagged this node as a comment.
    fn is_comment(&self) -> bool;

    /// The node's plain text content.
    fn text(&self) -> Cow<'_, str>;

    /// The comment as stored in a segment. For markup-backed nodes this is the escaped
    /// source form, which is why annotation decodes entities before conversion.
    fn comment_source(&self) -> Cow<'_, str> {
        self.text()
    }
}

impl<N: SourceNode + ?Sized> SourceNode for &N {
    fn is_comment(&self) -> bool {
        (**self).is_comment()
    }

    fn text(&self) -> Cow<'_, str> {
        (**self).text()
    }

    fn comment_source(&self) -> Cow<'_, str> {
        (**self).comment_source()
    }
}

/// A doc comment is a comment-tagged node whose text opens a block comment. Line comments and
/// other comment forms are treated as code.
pub fn is_doc_comment<N: SourceNode + ?Sized>(node: &N) -> bool {
    node.is_comment() && node.text().starts_with("/*")
}

/// A pre-tokenized node that is not backed by a markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Token {
    Comment(String),
    Code(String),
}

impl SourceNode for Token {
    fn is_comment(&self) -> bool {
        matches!(self, Token::Comment(_))
    }

    fn text(&self) -> Cow<'_, str> {
        match self {
            Token::Comment(text) | Token::Code(text) => Cow::Borrowed(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Token::Comment("/** doc */".into()), true)]
    #[case(Token::Comment("/* plain block */".into()), true)]
    #[case(Token::Comment("// line comment".into()), false)]
    #[case(Token::Comment(" /** indented */".into()), false)]
    #[case(Token::Code("/* looks like one */".into()), false)]
    fn classifies_doc_comments(#[case] node: Token, #[case] expected: bool) {
        assert_eq!(is_doc_comment(&node), expected);
    }

    #[test]
    fn references_delegate() {
        let node = Token::Comment("/** x */".into());
        let by_ref = &node;
        assert!(is_doc_comment(&by_ref));
        assert_eq!(by_ref.comment_source(), "/** x */");
    }
}
