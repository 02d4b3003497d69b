//! Section rendering
//!
//! Lays out merged, annotated segments as a two-column article:
//!
//! ```text
//! <article id="documentation">
//!   <section>                                   title row
//!     <div class="docs"><h1>title</h1></div>
//!     <div class="code"></div>
//!   </section>
//!   <section>                                   one per segment
//!     <div class="docs">markup</div>
//!     <div class="code"><code>nodes…</code></div>
//!   </section>
//! </article>
//! ```
//!
//! The title row's code pane is empty and exists for layout symmetry only. Code nodes are moved
//! out of the source container into the new code panes, never copied, so ids and any state
//! attached to them survive.

use crate::dom::{self, append, create_element, parse_fragment};
use crate::source::DomNode;
use literate_parser::Document;
use markup5ever_rcdom::Handle;
use tracing::debug;

pub const ARTICLE_ID: &str = "documentation";
pub const DOCS_CLASS: &str = "docs";
pub const CODE_CLASS: &str = "code";

/// Builds the literate article for `document`, consuming its code nodes.
pub fn render_sections(document: Document<DomNode>) -> Handle {
    let article = create_element("article", vec![("id", ARTICLE_ID)]);

    let heading = create_element("h1", vec![]);
    dom::append_text(&heading, &document.title);
    let head = row();
    append(&docs_pane(&head), &heading);
    append(&article, &head);

    let count = document.segments.len();
    for segment in document.segments {
        let section = row();

        let docs = docs_pane(&section);
        for node in parse_fragment(segment.markup_str()) {
            append(&docs, &node);
        }

        let code = create_element("code", vec![]);
        for node in segment.code {
            append(&code, node.handle());
        }
        append(&code_pane(&section), &code);

        append(&article, &section);
    }

    debug!(sections = count, "rendered literate sections");
    article
}

/// A section holding an empty docs pane followed by an empty code pane.
fn row() -> Handle {
    let section = create_element("section", vec![]);
    append(&section, &create_element("div", vec![("class", DOCS_CLASS)]));
    append(&section, &create_element("div", vec![("class", CODE_CLASS)]));
    section
}

fn docs_pane(section: &Handle) -> Handle {
    section.children.borrow()[0].clone()
}

fn code_pane(section: &Handle) -> Handle {
    section.children.borrow()[1].clone()
}
