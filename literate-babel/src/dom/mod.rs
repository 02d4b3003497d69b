//! Query toolkit over an rcdom tree
//!
//! Small set of tree operations the literate pipeline needs: element construction, attribute
//! and class access, selection, and moving nodes between parents. Moving always detaches the
//! node from its previous parent first, so nodes are re-parented and never copied.

pub mod selector;

pub use selector::Selector;

use crate::error::RenderError;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{ns, parse_document, Attribute, LocalName, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Create an HTML element with attributes
pub fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
pub fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Parse a complete HTML page.
pub fn parse_html(source: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(source)
}

/// Parse an HTML snippet into detached top-level nodes.
pub fn parse_fragment(markup: &str) -> Vec<Handle> {
    let dom = parse_html(&format!(
        "<!DOCTYPE html><html><head></head><body>{}</body></html>",
        markup
    ));
    let Some(body) = find_first(&dom.document, |node| is_element(node, "body")) else {
        return Vec::new();
    };
    let children: Vec<Handle> = body.children.borrow().clone();
    for child in &children {
        detach(child);
    }
    children
}

/// Serialize a whole document, doctype included.
pub fn serialize_document(dom: &RcDom) -> Result<String, RenderError> {
    let mut output = Vec::new();
    let document: SerializableHandle = dom.document.clone().into();
    serialize(&mut output, &document, SerializeOpts::default())?;
    Ok(String::from_utf8(output)?)
}

/// Serialize a node including its own tag.
pub fn outer_html(node: &Handle) -> Result<String, RenderError> {
    serialize_with_scope(node, TraversalScope::IncludeNode)
}

/// Serialize the children of a node, in escaped source form.
pub fn inner_html(node: &Handle) -> Result<String, RenderError> {
    serialize_with_scope(node, TraversalScope::ChildrenOnly(None))
}

fn serialize_with_scope(node: &Handle, scope: TraversalScope) -> Result<String, RenderError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: scope,
        ..Default::default()
    };
    let serializable: SerializableHandle = node.clone().into();
    serialize(&mut output, &serializable, opts)?;
    Ok(String::from_utf8(output)?)
}

pub fn is_element(node: &Handle, tag: &str) -> bool {
    matches!(&node.data, NodeData::Element { name, .. } if &*name.local == tag)
}

pub fn tag_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

pub fn attr(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

pub fn has_attr(node: &Handle, name: &str) -> bool {
    attr(node, name).is_some()
}

/// Set an attribute, replacing any previous value. No-op on non-elements.
pub fn set_attr(node: &Handle, name: &str, value: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let mut attrs = attrs.borrow_mut();
        match attrs.iter_mut().find(|attr| &*attr.name.local == name) {
            Some(existing) => existing.value = value.to_string().into(),
            None => attrs.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(name)),
                value: value.to_string().into(),
            }),
        }
    }
}

pub fn remove_attr(node: &Handle, name: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        attrs.borrow_mut().retain(|attr| &*attr.name.local != name);
    }
}

/// The element's id, if it has one.
pub fn id(node: &Handle) -> Option<String> {
    attr(node, "id")
}

pub fn classes(node: &Handle) -> Vec<String> {
    attr(node, "class")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn has_class(node: &Handle, class: &str) -> bool {
    classes(node).iter().any(|c| c == class)
}

pub fn add_class(node: &Handle, class: &str) {
    let mut current = classes(node);
    if !current.iter().any(|c| c == class) {
        current.push(class.to_string());
        set_attr(node, "class", &current.join(" "));
    }
}

pub fn remove_class(node: &Handle, class: &str) {
    let current = classes(node);
    if current.iter().any(|c| c == class) {
        let remaining: Vec<String> = current.into_iter().filter(|c| c != class).collect();
        if remaining.is_empty() {
            remove_attr(node, "class");
        } else {
            set_attr(node, "class", &remaining.join(" "));
        }
    }
}

const HIDDEN_STYLE: &str = "display: none";

/// Hide an element without removing it from the tree.
pub fn hide(node: &Handle) {
    set_attr(node, "style", HIDDEN_STYLE);
}

pub fn show(node: &Handle) {
    if is_hidden(node) {
        remove_attr(node, "style");
    }
}

pub fn is_hidden(node: &Handle) -> bool {
    attr(node, "style").as_deref() == Some(HIDDEN_STYLE)
}

pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(|weak| weak.upgrade());
    node.parent.set(weak);
    parent
}

/// Ancestors from the closest outward, excluding the node itself.
pub fn ancestors(node: &Handle) -> Vec<Handle> {
    let mut result = Vec::new();
    let mut current = parent(node);
    while let Some(node) = current {
        current = parent(&node);
        result.push(node);
    }
    result
}

/// Remove a node from its parent. The node itself stays intact.
pub fn detach(node: &Handle) {
    if let Some(parent) = parent(node) {
        parent
            .children
            .borrow_mut()
            .retain(|child| !Rc::ptr_eq(child, node));
    }
    node.parent.set(None);
}

/// Move `child` to the end of `parent`'s children.
pub fn append(parent: &Handle, child: &Handle) {
    detach(child);
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child.clone());
}

pub fn append_text(parent: &Handle, text: &str) {
    append(parent, &create_text(text));
}

/// Replace all children of `node` with a single text node.
pub fn set_text(node: &Handle, text: &str) {
    let children: Vec<Handle> = node.children.borrow().clone();
    for child in &children {
        detach(child);
    }
    append_text(node, text);
}

pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// All descendants in document order, excluding `root`.
pub fn descendants(root: &Handle) -> Vec<Handle> {
    let mut result = Vec::new();
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();
    while let Some(node) = stack.pop() {
        stack.extend(node.children.borrow().iter().rev().cloned());
        result.push(node);
    }
    result
}

pub fn find_all<P>(root: &Handle, predicate: P) -> Vec<Handle>
where
    P: Fn(&Handle) -> bool,
{
    descendants(root)
        .into_iter()
        .filter(|node| predicate(node))
        .collect()
}

pub fn find_first<P>(root: &Handle, predicate: P) -> Option<Handle>
where
    P: Fn(&Handle) -> bool,
{
    descendants(root).into_iter().find(|node| predicate(node))
}

/// Element whose id equals `id`, searching below `root`.
pub fn find_by_id(root: &Handle, id: &str) -> Option<Handle> {
    find_first(root, |node| attr(node, "id").as_deref() == Some(id))
}

/// The `body` element of a parsed page.
pub fn body(dom: &RcDom) -> Option<Handle> {
    find_first(&dom.document, |node| is_element(node, "body"))
}

/// The page title as a browser reports it: `<title>` text with whitespace collapsed.
pub fn document_title(dom: &RcDom) -> Option<String> {
    let title = find_first(&dom.document, |node| is_element(node, "title"))?;
    let text = text_content(&title);
    Some(text.split_whitespace().collect::<Vec<_>>().join(" "))
}

pub fn same_node(a: &Handle, b: &Handle) -> bool {
    Rc::ptr_eq(a, b)
}
