//! DOM-backed source nodes
//!
//! The raw node stream is the child list of the source container (`body > pre` by default):
//! comment spans, other spans and bare text. A node counts as a comment when it carries the
//! configured comment class.

use crate::dom;
use literate_parser::SourceNode;
use markup5ever_rcdom::Handle;
use std::borrow::Cow;
use std::fmt;

/// A top-level child of the source container.
#[derive(Clone)]
pub struct DomNode {
    handle: Handle,
    is_comment: bool,
}

impl DomNode {
    pub fn new(handle: Handle, comment_class: &str) -> Self {
        let is_comment = dom::has_class(&handle, comment_class);
        DomNode { handle, is_comment }
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl SourceNode for DomNode {
    fn is_comment(&self) -> bool {
        self.is_comment
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Owned(dom::text_content(&self.handle))
    }

    /// The escaped inner markup, as the page author wrote it.
    fn comment_source(&self) -> Cow<'_, str> {
        match dom::inner_html(&self.handle) {
            Ok(html) => Cow::Owned(html),
            Err(_) => self.text(),
        }
    }
}

impl PartialEq for DomNode {
    fn eq(&self, other: &Self) -> bool {
        dom::same_node(&self.handle, &other.handle)
    }
}

impl fmt::Debug for DomNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = dom::tag_name(&self.handle).unwrap_or_else(|| "#text".to_string());
        f.debug_struct("DomNode")
            .field("tag", &tag)
            .field("is_comment", &self.is_comment)
            .field("text", &dom::text_content(&self.handle))
            .finish()
    }
}

/// The children of `container`, in order, as source nodes.
pub fn source_nodes(container: &Handle, comment_class: &str) -> Vec<DomNode> {
    container
        .children
        .borrow()
        .iter()
        .map(|child| DomNode::new(child.clone(), comment_class))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use literate_parser::is_doc_comment;

    fn container() -> Handle {
        let dom = dom::parse_html(
            r#"<body><pre><span class="comment">/** it&apos;s &lt;b&gt; */</span>val x<span class="comment">// line</span></pre></body>"#,
        );
        dom::find_first(&dom.document, |n| dom::is_element(n, "pre")).unwrap()
    }

    #[test]
    fn classifies_children() {
        let nodes = source_nodes(&container(), "comment");
        let flags: Vec<bool> = nodes.iter().map(is_doc_comment).collect();
        assert_eq!(flags, vec![true, false, false]);
    }

    #[test]
    fn comment_source_is_escaped_markup() {
        let nodes = source_nodes(&container(), "comment");
        assert_eq!(nodes[0].text(), "/** it's <b> */");
        assert_eq!(nodes[0].comment_source(), "/** it's &lt;b&gt; */");
    }

    #[test]
    fn equality_is_node_identity() {
        let pre = container();
        let a = source_nodes(&pre, "comment");
        let b = source_nodes(&pre, "comment");
        assert_eq!(a, b);
        assert_ne!(a[0], a[1]);
    }
}
