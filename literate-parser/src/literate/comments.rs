//! Comment text extraction
//!
//! Strips block comment syntax so the remaining text can be handed to a markup converter:
//!
//! - first line: the opening delimiter (`/**`, any number of stars) and one following space
//! - last line: the closing delimiter, then the per-line marker
//! - every other line: the per-line marker (`*` with optional leading blanks and one
//!   trailing space)
//!
//! This is a heuristic, not a validator. Input without delimiters passes through with whatever
//! happens to match stripped.

use once_cell::sync::Lazy;
use regex::Regex;

static OPENING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/\*+ ?").unwrap());
static LINE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*\* ?").unwrap());
static CLOSING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*+/").unwrap());

/// Removes comment delimiters and per-line markers from a raw block comment.
pub fn extract_comment_text(raw: &str) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();
    let last = lines.len() - 1;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let mut line = if i == 0 {
                OPENING.replace(line, "").into_owned()
            } else {
                (*line).to_string()
            };
            if i == last {
                line = CLOSING.replace(&line, "").into_owned();
            }
            LINE_MARKER.replace(&line, "").into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::single_line("/** foo */", "foo ")]
    #[case::many_stars("/***** foo **/", "foo ")]
    #[case::plain_block("/* foo */", "foo ")]
    #[case::no_delimiters("just text", "just text")]
    #[case::empty("", "")]
    #[case::star_bullet_on_first_line("/** * item */", "item ")]
    fn strips_single_lines(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(extract_comment_text(raw), expected);
    }

    #[test]
    fn strips_markers_on_every_line() {
        let raw = "/**\n * Adds two numbers.\n *\n * Returns the *sum*.\n */";
        assert_eq!(
            extract_comment_text(raw),
            "\nAdds two numbers.\n\nReturns the *sum*.\n "
        );
    }

    #[test]
    fn keeps_indentation_beyond_the_marker() {
        let raw = "/**\n *     indented code\n\t* tab marker\n */";
        assert_eq!(
            extract_comment_text(raw),
            "\n    indented code\ntab marker\n "
        );
    }

    #[test]
    fn unmarked_interior_lines_are_untouched() {
        let raw = "/** first\n  second\n  third */";
        assert_eq!(extract_comment_text(raw), "first\n  second\n  third ");
    }

    #[test]
    fn closing_marker_on_its_own_line_leaves_blank() {
        let raw = "/** text\n **/";
        assert_eq!(extract_comment_text(raw), "text\n ");
    }
}
