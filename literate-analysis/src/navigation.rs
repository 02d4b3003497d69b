//! Deep-link navigation
//!
//! # State machine
//!
//! ```text
//!            scroll_to(target)                    scroll_finished(current ticket)
//!   Idle ───────────────────────▶ Transitioning ───────────────────────────────▶ Idle
//!                                   │      ▲
//!                                   └──────┘ scroll_to(other): supersedes, new ticket
//! ```
//!
//! Completing a transition depends on how the page was addressed:
//!
//! - query form (`?id=`): the tracked definition is unhighlighted, the target highlighted and
//!   tracked. The unhighlight always happens first, so at most one definition is highlighted.
//! - fragment form: the host navigates to `#<id>` instead of highlighting.
//!
//! Either way the export URI is recomputed, and only then. A completion carrying a stale
//! ticket is ignored.
//!
//! # Initial load
//!
//! Framed views scroll to a requested `?id=` anchor and get a pop-out bar. Top-level views
//! redirect `?id=<a>` to `#<a>`, so top-level deep links always use fragments.
//!
//! The navigation state belongs to one controller, which belongs to one document.

use crate::error::NavigationError;
use crate::location::{Location, UriForm};
use crate::xref;
use literate_babel::dom::{self, Selector};
use markup5ever_rcdom::Handle;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, trace};

/// The environment a literate document is displayed in.
pub trait Host {
    /// The current absolute location.
    fn location(&self) -> String;

    /// Whether the document is embedded in another page.
    fn is_framed(&self) -> bool;

    /// Start (or restart) the scroll animation toward `target`. The host reports completion
    /// through [`NavigationController::scroll_finished`] with `ticket`.
    fn scroll_to(&mut self, target: &Handle, animation: &ScrollAnimation, ticket: ScrollTicket);

    /// Replace the document location.
    fn navigate(&mut self, uri: &str);

    /// Open `uri` in a new top-level browsing context.
    fn open_top_level(&mut self, uri: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAnimation {
    pub duration: Duration,
    pub axis: Axis,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavigationOptions {
    pub scroll_duration_ms: u64,
    pub axis: Axis,
    /// Text shown next to the pop-out button in framed views.
    pub pop_out_label: String,
}

impl NavigationOptions {
    pub fn animation(&self) -> ScrollAnimation {
        ScrollAnimation {
            duration: Duration::from_millis(self.scroll_duration_ms),
            axis: self.axis,
        }
    }
}

impl Default for NavigationOptions {
    fn default() -> Self {
        NavigationOptions {
            scroll_duration_ms: 300,
            axis: Axis::Y,
            pop_out_label: "Source published by literate".to_string(),
        }
    }
}

/// Identifies one scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollTicket(u64);

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Transitioning { target: Handle, ticket: ScrollTicket },
}

/// Per-document navigation state.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    /// The definition the last completed transition landed on.
    pub last_highlighted: Option<Handle>,
    pub is_framed: bool,
}

/// What the initial load decided to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing requested, or the requested anchor does not exist.
    Idle,
    /// Framed view scrolling to the requested anchor.
    Scrolling(ScrollTicket),
    /// Top-level view redirected to the fragment form.
    Redirected(String),
}

#[derive(Debug)]
pub struct NavigationController {
    state: NavigationState,
    phase: Phase,
    location: Location,
    animation: ScrollAnimation,
    next_ticket: u64,
    requested: Option<Handle>,
    export_uri: Option<String>,
}

impl NavigationController {
    /// A controller for a document shown by `host`. The location is read once; deep-link form
    /// does not change over a page's lifetime.
    pub fn new(host: &dyn Host, options: &NavigationOptions) -> Result<Self, NavigationError> {
        Ok(NavigationController {
            state: NavigationState {
                last_highlighted: None,
                is_framed: host.is_framed(),
            },
            phase: Phase::Idle,
            location: Location::parse(&host.location())?,
            animation: options.animation(),
            next_ticket: 0,
            requested: None,
            export_uri: None,
        })
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// The shareable URI of the tracked definition, set by completed transitions.
    pub fn export_uri(&self) -> Option<&str> {
        self.export_uri.as_deref()
    }

    /// Resolves the requested deep link against `root`.
    pub fn initial_load(&mut self, root: &Handle, host: &mut dyn Host) -> LoadOutcome {
        let Some(id) = self.location.requested_id() else {
            return LoadOutcome::Idle;
        };
        let Some(target) = dom::find_by_id(root, &id) else {
            debug!(id = %id, "requested anchor not found");
            return LoadOutcome::Idle;
        };

        if self.state.is_framed {
            self.requested = Some(target.clone());
            LoadOutcome::Scrolling(self.scroll_to(host, &target))
        } else {
            let uri = self.location.full_uri(Some(&id), UriForm::Fragment);
            debug!(uri = %uri, "redirecting deep link to fragment form");
            host.navigate(&uri);
            LoadOutcome::Redirected(uri)
        }
    }

    /// Starts a transition toward `target`, superseding any transition in flight.
    pub fn scroll_to(&mut self, host: &mut dyn Host, target: &Handle) -> ScrollTicket {
        if let Phase::Transitioning { ticket, .. } = &self.phase {
            trace!(superseded = ticket.0, "restarting scroll");
        }
        self.next_ticket += 1;
        let ticket = ScrollTicket(self.next_ticket);
        self.phase = Phase::Transitioning {
            target: target.clone(),
            ticket,
        };
        host.scroll_to(target, &self.animation, ticket);
        ticket
    }

    /// Completes the transition identified by `ticket`. Returns false for stale tickets.
    pub fn scroll_finished(
        &mut self,
        root: &Handle,
        host: &mut dyn Host,
        ticket: ScrollTicket,
    ) -> bool {
        let target = match &self.phase {
            Phase::Transitioning {
                target,
                ticket: current,
            } if *current == ticket => target.clone(),
            _ => {
                trace!(ticket = ticket.0, "ignoring stale scroll completion");
                return false;
            }
        };
        self.phase = Phase::Idle;

        let id = dom::id(&target);
        if self.location.is_query_mode() {
            if let Some(previous) = self.state.last_highlighted.take() {
                xref::unhighlight(&previous);
            }
            xref::highlight(&target);
        } else if let Some(id) = &id {
            host.navigate(&self.location.full_uri(Some(id), UriForm::Fragment));
        }
        self.state.last_highlighted = Some(target);

        let export = self.location.full_uri(id.as_deref(), self.location.form());
        update_export_element(root, &export);
        debug!(export = %export, "completed transition");
        self.export_uri = Some(export);
        true
    }

    /// The URI the pop-out opens: the tracked (or requested) definition in fragment form.
    pub fn pop_out_uri(&self) -> String {
        let id = self
            .state
            .last_highlighted
            .as_ref()
            .or(self.requested.as_ref())
            .and_then(dom::id);
        self.location.full_uri(id.as_deref(), UriForm::Fragment)
    }
}

/// Writes the export URI into `#export span.src` when the page has one.
fn update_export_element(root: &Handle, uri: &str) {
    let Ok(selector) = Selector::parse("#export span.src") else {
        return;
    };
    if let Some(element) = selector.select_first(root) {
        dom::set_text(&element, uri);
    }
}

pub const POP_OUT_ID: &str = "pop-out";

/// The bar offered in framed views to reopen the document at top level.
#[derive(Debug, Clone)]
pub struct PopOut {
    element: Handle,
}

impl PopOut {
    /// Appends the (hidden) bar to `body`.
    pub fn install(body: &Handle, label: &str) -> Self {
        let element = dom::create_element("div", vec![("class", "tool"), ("id", POP_OUT_ID)]);
        let button = dom::create_element("input", vec![("type", "submit"), ("value", "Pop Out")]);
        dom::append(&element, &button);
        dom::append_text(&element, label);
        dom::hide(&element);
        dom::append(body, &element);
        PopOut { element }
    }

    pub fn element(&self) -> &Handle {
        &self.element
    }

    pub fn pointer_entered(&self) {
        dom::show(&self.element);
    }

    pub fn pointer_left(&self) {
        dom::hide(&self.element);
    }

    pub fn is_visible(&self) -> bool {
        !dom::is_hidden(&self.element)
    }

    /// Opens the controller's pop-out URI at top level.
    pub fn activate(&self, controller: &NavigationController, host: &mut dyn Host) -> String {
        let uri = controller.pop_out_uri();
        host.open_top_level(&uri);
        uri
    }
}
