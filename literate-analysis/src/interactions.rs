//! Live interaction bindings
//!
//!     A binding pairs a selector with an event and an action. Nothing is attached to individual
//!     elements: when an event fires, the target and each of its ancestors are matched against
//!     every binding at that moment. Content added to the tree after the bindings were declared
//!     therefore takes part like anything else.
//!
//!     Dispatch only decides *what* should happen. Performing the actions (highlighting,
//!     scrolling, tooltips) is up to the caller, see [`crate::view::LiterateView`].

use literate_babel::dom;
use literate_babel::dom::Selector;
use literate_babel::RenderError;
use markup5ever_rcdom::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PointerEnter,
    PointerLeave,
    Activate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    HighlightReferences,
    UnhighlightReferences,
    /// Scroll to the identifier the event matched.
    ScrollToIdentifier,
    HighlightDefinition,
    UnhighlightDefinition,
    ScrollToDefinition,
    AttachTooltip,
}

/// Whether the event's default behavior (following a link) still applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Default,
    Prevented,
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub selector: Selector,
    pub event: EventKind,
    pub action: Action,
}

#[derive(Debug, Clone, Default)]
pub struct Interactions {
    bindings: Vec<Binding>,
}

impl Interactions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(
        &mut self,
        selector: &str,
        event: EventKind,
        action: Action,
    ) -> Result<&mut Self, RenderError> {
        self.bindings.push(Binding {
            selector: Selector::parse(selector)?,
            event,
            action,
        });
        Ok(self)
    }

    /// The reference/definition/tooltip bindings, restricted to elements below `scope`.
    pub fn standard(scope: &str) -> Result<Self, RenderError> {
        let identifiers = format!("{} code [id]", scope);
        let anchors = format!("{} a[href^='#']", scope);
        let labelled = format!("{} [title]", scope);

        let mut interactions = Interactions::new();
        interactions
            .on(&identifiers, EventKind::PointerEnter, Action::HighlightReferences)?
            .on(&identifiers, EventKind::PointerLeave, Action::UnhighlightReferences)?
            .on(&identifiers, EventKind::Activate, Action::ScrollToIdentifier)?
            .on(&anchors, EventKind::PointerEnter, Action::HighlightDefinition)?
            .on(&anchors, EventKind::PointerLeave, Action::UnhighlightDefinition)?
            .on(&anchors, EventKind::Activate, Action::ScrollToDefinition)?
            .on(&labelled, EventKind::PointerEnter, Action::AttachTooltip)?;
        Ok(interactions)
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// The actions `event` on `target` triggers, paired with the element each binding matched.
    /// Innermost elements come first; per element, bindings keep declaration order.
    ///
    /// Activation is consumed by the innermost element with any binding: its ancestors never
    /// see it. Pointer events reach every matching ancestor.
    pub fn dispatch(&self, event: EventKind, target: &Handle) -> Vec<(Handle, Action)> {
        let mut path = vec![target.clone()];
        path.extend(dom::ancestors(target));

        let mut actions = Vec::new();
        for element in &path {
            let before = actions.len();
            for binding in self.bindings.iter().filter(|b| b.event == event) {
                if binding.selector.matches(element) {
                    actions.push((element.clone(), binding.action));
                }
            }
            if event == EventKind::Activate && actions.len() > before {
                break;
            }
        }
        actions
    }
}
