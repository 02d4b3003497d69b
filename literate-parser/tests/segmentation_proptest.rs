//! Property-based tests for segmentation and merging
//!
//! Node streams are generated from a small alphabet of doc comments, line comments and code so
//! that runs of consecutive comments and empty streams come up often.

use literate_parser::literate::testing::{flatten_code, flatten_comments};
use literate_parser::{is_doc_comment, merge_segments, segment, Token};
use proptest::prelude::*;

fn node_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        "[a-z]{0,6}".prop_map(|word| Token::Comment(format!("/** {} */", word))),
        "[a-z]{1,6}".prop_map(|word| Token::Comment(format!("// {}", word))),
        "[a-z(){};]{1,8}".prop_map(Token::Code),
    ]
}

fn stream_strategy() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(node_strategy(), 0..40)
}

proptest! {
    #[test]
    fn segmentation_covers_every_node_in_order(nodes in stream_strategy()) {
        let expected_code: Vec<Token> =
            nodes.iter().filter(|n| !is_doc_comment(*n)).cloned().collect();
        let expected_comments: String = nodes
            .iter()
            .filter(|n| is_doc_comment(*n))
            .map(|n| match n {
                Token::Comment(text) | Token::Code(text) => text.as_str(),
            })
            .collect();

        let segments = segment(nodes);

        prop_assert_eq!(flatten_code(&segments), expected_code);
        prop_assert_eq!(flatten_comments(&segments), expected_comments);
        prop_assert_eq!(segments[0].comment.as_str(), "");
    }

    #[test]
    fn merging_preserves_order_and_content(nodes in stream_strategy()) {
        let segments = segment(nodes);
        let code = flatten_code(&segments);
        let comments = flatten_comments(&segments);

        let merged = merge_segments(segments);

        prop_assert_eq!(flatten_code(&merged), code);
        prop_assert_eq!(flatten_comments(&merged), comments);
    }

    #[test]
    fn merged_segments_are_never_vacuous(nodes in stream_strategy()) {
        let merged = merge_segments(segment(nodes));

        for (i, segment) in merged.iter().enumerate() {
            prop_assert!(!segment.is_vacuous(), "segment {} is vacuous", i);
            if i > 0 {
                prop_assert!(segment.has_code(), "segment {} has no code", i);
            }
        }
    }
}
