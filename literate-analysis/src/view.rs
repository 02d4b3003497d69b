//! One literate document in one host
//!
//! [`LiterateView`] owns everything that is per-document: the navigation controller (and with
//! it the tracked definition), the tooltip registry, the interaction bindings and the pop-out.
//! Two views never share state.

use crate::error::ViewError;
use crate::interactions::{Action, EventKind, Interactions, Propagation};
use crate::navigation::{
    Host, LoadOutcome, NavigationController, NavigationOptions, PopOut, ScrollTicket,
};
use crate::tooltip::{TooltipOptions, TooltipWidget, Tooltips};
use crate::xref;
use literate_babel::dom;
use literate_babel::render::CODE_CLASS;
use literate_babel::{to_literate, LiteratePage, MarkdownConverter, RenderOptions};
use markup5ever_rcdom::{Handle, RcDom};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ViewOptions {
    pub render: RenderOptions,
    pub navigation: NavigationOptions,
    pub tooltip: TooltipOptions,
}

pub struct LiterateView<'a, H: Host, T: TooltipWidget> {
    dom: &'a RcDom,
    host: H,
    widget: T,
    page: LiteratePage,
    navigation: NavigationController,
    interactions: Interactions,
    tooltips: Tooltips,
    tooltip_options: TooltipOptions,
    pop_out: Option<PopOut>,
    load: LoadOutcome,
}

impl<'a, H: Host, T: TooltipWidget> LiterateView<'a, H, T> {
    /// Resolves the requested deep link, then transforms `dom` into its literate rendering.
    pub fn load(
        dom: &'a RcDom,
        mut host: H,
        widget: T,
        options: &ViewOptions,
        converter: &dyn MarkdownConverter,
    ) -> Result<Self, ViewError> {
        let mut navigation = NavigationController::new(&host, &options.navigation)?;
        let load = navigation.initial_load(&dom.document, &mut host);

        let pop_out = if navigation.state().is_framed {
            dom::body(dom).map(|body| PopOut::install(&body, &options.navigation.pop_out_label))
        } else {
            None
        };

        let page = to_literate(dom, &options.render, converter)?;
        let interactions = Interactions::standard(&format!(".{}", CODE_CLASS))?;
        debug!(?load, framed = navigation.state().is_framed, "loaded view");

        Ok(LiterateView {
            dom,
            host,
            widget,
            page,
            navigation,
            interactions,
            tooltips: Tooltips::new(),
            tooltip_options: options.tooltip.clone(),
            pop_out,
            load,
        })
    }

    pub fn pointer_enter(&mut self, target: &Handle) {
        self.fire(EventKind::PointerEnter, target);
    }

    pub fn pointer_leave(&mut self, target: &Handle) {
        self.fire(EventKind::PointerLeave, target);
    }

    /// Activates (clicks) `target`. Any matched binding replaces the default link behavior.
    pub fn activate(&mut self, target: &Handle) -> Propagation {
        if self.fire(EventKind::Activate, target) {
            Propagation::Prevented
        } else {
            Propagation::Default
        }
    }

    fn fire(&mut self, event: EventKind, target: &Handle) -> bool {
        let matched = self.interactions.dispatch(event, target);
        for (element, action) in &matched {
            self.perform(element, *action);
        }
        !matched.is_empty()
    }

    fn perform(&mut self, element: &Handle, action: Action) {
        let page = self.dom;
        let root = &page.document;
        match action {
            Action::HighlightReferences => {
                xref::references(root, element).iter().for_each(xref::highlight)
            }
            Action::UnhighlightReferences => {
                xref::references(root, element).iter().for_each(xref::unhighlight)
            }
            Action::HighlightDefinition => xref::highlight(&xref::definition(root, element)),
            Action::UnhighlightDefinition => xref::unhighlight(&xref::definition(root, element)),
            Action::ScrollToIdentifier => {
                // identifiers that are links themselves keep only the default suppressed
                if !dom::has_attr(element, "href") {
                    self.navigation.scroll_to(&mut self.host, element);
                }
            }
            Action::ScrollToDefinition => {
                let target = xref::definition(root, element);
                self.navigation.scroll_to(&mut self.host, &target);
            }
            Action::AttachTooltip => {
                self.tooltips
                    .ensure(&mut self.widget, element, &self.tooltip_options);
            }
        }
    }

    /// Delivers the host's scroll completion. Returns false for superseded scrolls.
    pub fn scroll_finished(&mut self, ticket: ScrollTicket) -> bool {
        self.navigation
            .scroll_finished(&self.dom.document, &mut self.host, ticket)
    }

    pub fn frame_pointer_enter(&self) {
        if let Some(pop_out) = &self.pop_out {
            pop_out.pointer_entered();
        }
    }

    pub fn frame_pointer_leave(&self) {
        if let Some(pop_out) = &self.pop_out {
            pop_out.pointer_left();
        }
    }

    /// Opens the tracked definition at top level. `None` outside frames.
    pub fn activate_pop_out(&mut self) -> Option<String> {
        let pop_out = self.pop_out.as_ref()?;
        Some(pop_out.activate(&self.navigation, &mut self.host))
    }

    pub fn page(&self) -> &LiteratePage {
        &self.page
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load
    }

    pub fn pop_out(&self) -> Option<&PopOut> {
        self.pop_out.as_ref()
    }

    pub fn tooltips(&self) -> &Tooltips {
        &self.tooltips
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn widget(&self) -> &T {
        &self.widget
    }

    pub fn export_uri(&self) -> Option<&str> {
        self.navigation.export_uri()
    }
}
