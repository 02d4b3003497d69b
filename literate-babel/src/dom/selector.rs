//! CSS-like selectors
//!
//! Supports the subset the literate pipeline uses:
//!
//! | Syntax        | Matches                                   |
//! |---------------|-------------------------------------------|
//! | `tag`, `*`    | element name                              |
//! | `#id`         | id attribute                              |
//! | `.class`      | class list membership                     |
//! | `[attr]`      | attribute present                         |
//! | `[attr=v]`    | attribute equals (`^=` prefix, `$=` suffix, `*=` substring) |
//! | `a b`         | `b` with an `a` ancestor                  |
//! | `a > b`       | `b` whose parent is `a`                   |
//!
//! Attribute values may be quoted with `'` or `"`.

use super::{ancestors, attr, descendants, has_class, parent, tag_name};
use crate::error::RenderError;
use markup5ever_rcdom::{Handle, NodeData};

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
    Suffix(String),
    Contains(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrCondition {
    name: String,
    op: AttrOp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrCondition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

/// A parsed selector, matched right to left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// First compound, then (combinator, compound) pairs left to right.
    head: Compound,
    tail: Vec<(Combinator, Compound)>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, RenderError> {
        let invalid = |reason: &str| RenderError::InvalidSelector {
            selector: source.to_string(),
            reason: reason.to_string(),
        };

        let mut parser = Parser {
            chars: source.trim().chars().collect(),
            pos: 0,
        };
        let head = parser.compound().map_err(|r| invalid(&r))?;
        let mut tail = Vec::new();

        loop {
            let had_space = parser.skip_whitespace();
            let Some(c) = parser.peek() else { break };
            let combinator = if c == '>' {
                parser.pos += 1;
                parser.skip_whitespace();
                Combinator::Child
            } else if had_space {
                Combinator::Descendant
            } else {
                return Err(invalid(&format!("unexpected `{}`", c)));
            };
            tail.push((combinator, parser.compound().map_err(|r| invalid(&r))?));
        }

        Ok(Selector {
            head,
            tail,
        })
    }

    /// Whether `node` matches the whole selector.
    pub fn matches(&self, node: &Handle) -> bool {
        let mut compounds: Vec<&Compound> = vec![&self.head];
        let mut combinators = Vec::new();
        for (combinator, compound) in &self.tail {
            combinators.push(*combinator);
            compounds.push(compound);
        }
        matches_from(node, &compounds, &combinators)
    }

    /// Matching descendants of `root` in document order.
    pub fn select(&self, root: &Handle) -> Vec<Handle> {
        descendants(root)
            .into_iter()
            .filter(|node| self.matches(node))
            .collect()
    }

    pub fn select_first(&self, root: &Handle) -> Option<Handle> {
        descendants(root).into_iter().find(|node| self.matches(node))
    }
}

/// Matches `compounds[..=last]` ending at `node`.
fn matches_from(node: &Handle, compounds: &[&Compound], combinators: &[Combinator]) -> bool {
    let (last, rest) = match compounds.split_last() {
        Some(split) => split,
        None => return true,
    };
    if !last.matches(node) {
        return false;
    }
    let Some((combinator, rest_combinators)) = combinators.split_last() else {
        return true;
    };
    match combinator {
        Combinator::Child => parent(node)
            .map(|p| matches_from(&p, rest, rest_combinators))
            .unwrap_or(false),
        Combinator::Descendant => ancestors(node)
            .iter()
            .any(|a| matches_from(a, rest, rest_combinators)),
    }
}

impl Compound {
    fn matches(&self, node: &Handle) -> bool {
        if !matches!(node.data, NodeData::Element { .. }) {
            return false;
        }
        if let Some(tag) = &self.tag {
            if tag_name(node).as_deref() != Some(tag.as_str()) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if attr(node, "id").as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| has_class(node, class)) {
            return false;
        }
        self.attrs.iter().all(|cond| {
            let Some(value) = attr(node, &cond.name) else {
                return false;
            };
            match &cond.op {
                AttrOp::Exists => true,
                AttrOp::Equals(expected) => &value == expected,
                AttrOp::Prefix(prefix) => value.starts_with(prefix.as_str()),
                AttrOp::Suffix(suffix) => value.ends_with(suffix.as_str()),
                AttrOp::Contains(needle) => value.contains(needle.as_str()),
            }
        })
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn ident(&mut self) -> String {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn compound(&mut self) -> Result<Compound, String> {
        let mut compound = Compound::default();
        let start = self.pos;

        if self.peek() == Some('*') {
            self.pos += 1;
        } else {
            let tag = self.ident();
            if !tag.is_empty() {
                compound.tag = Some(tag.to_ascii_lowercase());
            }
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.pos += 1;
                    compound.id = Some(self.non_empty_ident("id")?);
                }
                Some('.') => {
                    self.pos += 1;
                    let class = self.non_empty_ident("class")?;
                    compound.classes.push(class);
                }
                Some('[') => {
                    self.pos += 1;
                    compound.attrs.push(self.attr_condition()?);
                }
                _ => break,
            }
        }

        if self.pos == start {
            return Err("expected a selector".to_string());
        }
        Ok(compound)
    }

    fn non_empty_ident(&mut self, what: &str) -> Result<String, String> {
        let ident = self.ident();
        if ident.is_empty() {
            Err(format!("empty {} name", what))
        } else {
            Ok(ident)
        }
    }

    fn attr_condition(&mut self) -> Result<AttrCondition, String> {
        self.skip_whitespace();
        let name = self.non_empty_ident("attribute")?;
        self.skip_whitespace();

        let op_char = match self.peek() {
            Some(']') => {
                self.pos += 1;
                return Ok(AttrCondition {
                    name,
                    op: AttrOp::Exists,
                });
            }
            Some(c @ ('^' | '$' | '*')) => {
                self.pos += 1;
                Some(c)
            }
            Some('=') => None,
            _ => return Err(format!("malformed attribute condition on `{}`", name)),
        };
        if self.peek() != Some('=') {
            return Err(format!("expected `=` in attribute condition on `{}`", name));
        }
        self.pos += 1;
        self.skip_whitespace();
        let value = self.attr_value()?;
        self.skip_whitespace();
        if self.peek() != Some(']') {
            return Err("unterminated attribute condition".to_string());
        }
        self.pos += 1;

        let op = match op_char {
            None => AttrOp::Equals(value),
            Some('^') => AttrOp::Prefix(value),
            Some('$') => AttrOp::Suffix(value),
            Some(_) => AttrOp::Contains(value),
        };
        Ok(AttrCondition { name, op })
    }

    fn attr_value(&mut self) -> Result<String, String> {
        match self.peek() {
            Some(quote @ ('\'' | '"')) => {
                self.pos += 1;
                let start = self.pos;
                while self.peek().is_some_and(|c| c != quote) {
                    self.pos += 1;
                }
                if self.peek().is_none() {
                    return Err("unterminated quoted value".to_string());
                }
                let value = self.chars[start..self.pos].iter().collect();
                self.pos += 1;
                Ok(value)
            }
            _ => {
                let start = self.pos;
                while self.peek().is_some_and(|c| c != ']' && !c.is_whitespace()) {
                    self.pos += 1;
                }
                Ok(self.chars[start..self.pos].iter().collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{find_by_id, parse_html};
    use rstest::rstest;

    fn page() -> markup5ever_rcdom::RcDom {
        parse_html(
            r##"<html><body>
            <pre id="src"><span class="comment">/** c */</span><a id="ref" href="#def">Foo</a></pre>
            <div class="code"><code><span id="def" title="class Foo">Foo</span></code></div>
            </body></html>"##,
        )
    }

    #[rstest]
    #[case("body > pre", "src")]
    #[case("pre#src", "src")]
    #[case("code [id]", "def")]
    #[case(".code code [title]", "def")]
    #[case("a[href^='#']", "ref")]
    #[case("a[href$=\"#def\"]", "ref")]
    #[case("[href*=de]", "ref")]
    #[case("*[id=def]", "def")]
    fn selects_expected_element(#[case] selector: &str, #[case] expected_id: &str) {
        let dom = page();
        let selector = Selector::parse(selector).unwrap();
        let found = selector.select_first(&dom.document).expect("a match");
        assert_eq!(attr(&found, "id").as_deref(), Some(expected_id));
    }

    #[test]
    fn child_combinator_requires_direct_parent() {
        let dom = page();
        let selector = Selector::parse("body > code").unwrap();
        assert!(selector.select(&dom.document).is_empty());
    }

    #[test]
    fn matches_single_nodes() {
        let dom = page();
        let def = find_by_id(&dom.document, "def").unwrap();
        assert!(Selector::parse("code [id]").unwrap().matches(&def));
        assert!(!Selector::parse("pre [id]").unwrap().matches(&def));
    }

    #[rstest]
    #[case("")]
    #[case("a[href")]
    #[case("a[href^]")]
    #[case("#")]
    #[case("a >")]
    #[case("a,b")]
    fn rejects_malformed(#[case] selector: &str) {
        assert!(matches!(
            Selector::parse(selector),
            Err(RenderError::InvalidSelector { .. })
        ));
    }
}
