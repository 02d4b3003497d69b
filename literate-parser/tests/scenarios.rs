//! End-to-end segmentation scenarios over plain token streams.

use literate_parser::literate::testing::{code, comment};
use literate_parser::{extract_comment_text, html_decode, merge_segments, segment, Document};

#[test]
fn leading_comments_fold_into_first_code() {
    let merged = merge_segments(segment(vec![
        comment("/** a */"),
        comment("/** b */"),
        code("C"),
    ]));

    insta::assert_json_snapshot!(merged, @r#"
    [
      {
        "comment": "/** a *//** b */",
        "code": [
          {
            "kind": "code",
            "text": "C"
          }
        ],
        "markup": null
      }
    ]
    "#);
}

#[test]
fn documented_functions_become_one_segment_each() {
    let nodes = vec![
        code("package demo"),
        comment("/** Adds. */"),
        code("def add(a: Int, b: Int) = a + b"),
        comment("// trailing note"),
        comment("/**\n * Subtracts.\n */"),
        code("def sub(a: Int, b: Int) = a - b"),
    ];

    let document = Document::new("demo", merge_segments(segment(nodes)));

    assert_eq!(document.segments.len(), 3);
    assert_eq!(document.segments[0].comment, "");
    assert_eq!(document.segments[0].code, vec![code("package demo")]);
    assert_eq!(
        document.segments[1].code,
        vec![
            code("def add(a: Int, b: Int) = a + b"),
            comment("// trailing note")
        ]
    );
    assert_eq!(
        extract_comment_text(&document.segments[2].comment),
        "\nSubtracts.\n "
    );
}

#[test]
fn escaped_comment_text_decodes_before_conversion() {
    let raw = "/** Returns `a &lt; b` &amp;&amp; more */";
    assert_eq!(
        html_decode(&extract_comment_text(raw)),
        "Returns `a < b` && more "
    );
}
