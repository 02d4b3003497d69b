//! Markup annotation
//!
//! Fills in each segment's `markup` with the rendered documentation:
//!
//!     input:   [{ comment: "/** foo *bar* */", code: [..], markup: None }, ...]
//!     output:  [{ comment: "/** foo *bar* */", code: [..], markup: Some("<p>foo <em>bar</em></p>") }, ...]
//!
//! Runs before merging, since merging concatenates markup.

use crate::markdown::MarkdownConverter;
use literate_parser::{extract_comment_text, html_decode, Segment};

/// Rendered documentation for one raw comment. Empty comments render to nothing.
pub fn render_comment(comment: &str, converter: &dyn MarkdownConverter) -> String {
    if comment.is_empty() {
        return String::new();
    }
    converter.to_html(&html_decode(&extract_comment_text(comment)))
}

/// Annotates every segment with the rendered form of its comment.
pub fn annotate<N>(segments: &mut [Segment<N>], converter: &dyn MarkdownConverter) {
    for segment in segments.iter_mut() {
        segment.markup = Some(render_comment(&segment.comment, converter));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::ComrakConverter;
    use literate_parser::literate::testing::{code, comment};
    use literate_parser::{merge_segments, segment};

    /// Converter that wraps the text in a paragraph and trims surrounding whitespace.
    fn paragraphs(text: &str) -> String {
        format!("<p>{}</p>", text.trim())
    }

    #[test]
    fn simple_doc_code_pair() {
        let mut segments = segment(vec![comment("/** Hello */"), code("A"), code("B")]);
        annotate(&mut segments, &paragraphs);
        let merged = merge_segments(segments);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].comment, "/** Hello */");
        assert_eq!(merged[0].code, vec![code("A"), code("B")]);
        assert_eq!(merged[0].markup.as_deref(), Some("<p>Hello</p>"));
    }

    #[test]
    fn empty_comment_yields_empty_markup() {
        let mut segments = segment(vec![code("A")]);
        annotate(&mut segments, &paragraphs);
        assert_eq!(segments[0].markup.as_deref(), Some(""));
    }

    #[test]
    fn entities_are_decoded_before_conversion() {
        let seen = std::cell::RefCell::new(Vec::new());
        let recorder = |text: &str| {
            seen.borrow_mut().push(text.to_string());
            String::new()
        };
        let mut segments = segment(vec![comment("/** a &lt;b&gt; &amp; c */"), code("A")]);
        annotate(&mut segments, &recorder);
        assert_eq!(seen.borrow().as_slice(), ["a <b> & c ".to_string()]);
    }

    #[test]
    fn merged_markup_follows_comment_order() {
        let mut segments = segment(vec![
            comment("/** first */"),
            comment("/** second */"),
            code("C"),
        ]);
        annotate(&mut segments, &ComrakConverter::default());
        let merged = merge_segments(segments);

        assert_eq!(
            merged[0].markup.as_deref(),
            Some("<p>first</p>\n<p>second</p>\n")
        );
    }
}
