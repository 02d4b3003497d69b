//! Cross-reference index
//!
//!     An identifier is an element carrying an `id`. Its references are the anchors whose `href`
//!     ends in `#<id>`; the definition of an anchor is the element whose id is the anchor's
//!     target. Both lookups run against the live tree on every call, nothing is cached, so
//!     content added after rendering is found too.
//!
//!     `definition` is total: an anchor whose target is missing resolves to itself, which makes
//!     highlighting it a harmless no-op on an unrelated node.

use literate_babel::dom::{self, Selector};
use literate_babel::RenderError;
use markup5ever_rcdom::Handle;
use serde::Serialize;

pub const HIGHLIGHT_CLASS: &str = "highlighted";

/// Every anchor below `root` whose link target names `identifier`'s id.
pub fn references(root: &Handle, identifier: &Handle) -> Vec<Handle> {
    let Some(id) = dom::id(identifier) else {
        return Vec::new();
    };
    let suffix = format!("#{}", id);
    dom::find_all(root, |node| {
        dom::is_element(node, "a") && dom::attr(node, "href").is_some_and(|h| h.ends_with(&suffix))
    })
}

/// The element below `root` that `anchor` links to, or `anchor` itself when there is none.
pub fn definition(root: &Handle, anchor: &Handle) -> Handle {
    dom::attr(anchor, "href")
        .and_then(|href| {
            let target = href.strip_prefix('#').unwrap_or(&href).to_string();
            dom::find_by_id(root, &target)
        })
        .unwrap_or_else(|| anchor.clone())
}

pub fn highlight(node: &Handle) {
    dom::add_class(node, HIGHLIGHT_CLASS);
}

pub fn unhighlight(node: &Handle) {
    dom::remove_class(node, HIGHLIGHT_CLASS);
}

pub fn is_highlighted(node: &Handle) -> bool {
    dom::has_class(node, HIGHLIGHT_CLASS)
}

/// One identifier and how often it is referenced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierEntry {
    pub id: String,
    pub references: usize,
    /// The identifier's label attribute, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Summarizes every identifier matched by `selector` below `root`, in document order.
pub fn index(root: &Handle, selector: &str) -> Result<Vec<IdentifierEntry>, RenderError> {
    let selector = Selector::parse(selector)?;
    Ok(selector
        .select(root)
        .iter()
        .filter_map(|node| {
            let id = dom::id(node)?;
            Some(IdentifierEntry {
                references: references(root, node).len(),
                title: dom::attr(node, "title"),
                id,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use literate_babel::dom::{find_by_id, parse_html};
    use markup5ever_rcdom::RcDom;

    fn page() -> RcDom {
        parse_html(
            r##"<body><code>
            <span id="Foo" title="class Foo">Foo</span>
            <a id="use1" href="#Foo">Foo</a>
            <a id="use2" href="other.html#Foo">Foo</a>
            <a id="dangling" href="#Missing">Missing</a>
            <a id="bare">bare</a>
            <span id="Bar">Bar</span>
            </code></body>"##,
        )
    }

    fn ids(nodes: &[Handle]) -> Vec<String> {
        nodes.iter().filter_map(dom::id).collect()
    }

    #[test]
    fn references_match_href_suffix() {
        let dom = page();
        let foo = find_by_id(&dom.document, "Foo").unwrap();
        assert_eq!(ids(&references(&dom.document, &foo)), vec!["use1", "use2"]);
    }

    #[test]
    fn unreferenced_identifier_has_no_references() {
        let dom = page();
        let bar = find_by_id(&dom.document, "Bar").unwrap();
        assert!(references(&dom.document, &bar).is_empty());
    }

    #[test]
    fn definition_resolves_and_is_symmetric() {
        let dom = page();
        let anchor = find_by_id(&dom.document, "use1").unwrap();
        let def = definition(&dom.document, &anchor);

        assert_eq!(dom::id(&def).as_deref(), Some("Foo"));
        assert!(references(&dom.document, &def)
            .iter()
            .any(|r| dom::same_node(r, &anchor)));
    }

    #[test]
    fn unresolvable_definition_falls_back_to_anchor() {
        let dom = page();
        let dangling = find_by_id(&dom.document, "dangling").unwrap();
        assert!(dom::same_node(&definition(&dom.document, &dangling), &dangling));

        let bare = find_by_id(&dom.document, "bare").unwrap();
        assert!(dom::same_node(&definition(&dom.document, &bare), &bare));
    }

    #[test]
    fn highlight_toggles_class() {
        let dom = page();
        let foo = find_by_id(&dom.document, "Foo").unwrap();
        highlight(&foo);
        assert!(is_highlighted(&foo));
        unhighlight(&foo);
        assert!(!is_highlighted(&foo));
    }

    #[test]
    fn index_counts_references() {
        let dom = page();
        let entries = index(&dom.document, "code span[id]").unwrap();
        assert_eq!(
            entries,
            vec![
                IdentifierEntry {
                    id: "Foo".into(),
                    references: 2,
                    title: Some("class Foo".into()),
                },
                IdentifierEntry {
                    id: "Bar".into(),
                    references: 0,
                    title: None,
                },
            ]
        );
    }
}
