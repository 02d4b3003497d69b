//! Tooltips
//!
//! Elements with a `title` get a tooltip the first time the pointer enters them. The widget
//! itself is external; [`Tooltips`] only guarantees each element is initialized once.

use literate_babel::dom;
use markup5ever_rcdom::Handle;
use serde::Deserialize;
use std::time::Duration;
use tracing::trace;

/// Anchor points used to pair a tooltip corner with a target corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopMiddle,
    TopRight,
    LeftMiddle,
    Center,
    RightMiddle,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Positioning {
    /// Corner of the tooltip that is placed...
    pub tooltip: Corner,
    /// ...on this corner of the target.
    pub target: Corner,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TooltipOptions {
    /// Visual theme name.
    pub style: String,
    pub prerendered: bool,
    pub show_delay_ms: u64,
    pub position: Positioning,
}

impl TooltipOptions {
    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(self.show_delay_ms)
    }
}

impl Default for TooltipOptions {
    fn default() -> Self {
        TooltipOptions {
            style: "dark".to_string(),
            prerendered: true,
            show_delay_ms: 0,
            position: Positioning {
                tooltip: Corner::BottomLeft,
                target: Corner::TopMiddle,
            },
        }
    }
}

/// An attach-once, show-on-hover tooltip implementation.
pub trait TooltipWidget {
    fn attach(&mut self, element: &Handle, content: &str, options: &TooltipOptions);

    /// Show the tooltip right away. Later hovers are the widget's own business.
    fn show(&mut self, element: &Handle);
}

/// Tracks which elements already carry a tooltip.
#[derive(Debug, Default)]
pub struct Tooltips {
    attached: Vec<Handle>,
}

impl Tooltips {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches and shows a tooltip on `element` unless it already has one. Returns whether a
    /// tooltip was attached by this call.
    pub fn ensure(
        &mut self,
        widget: &mut dyn TooltipWidget,
        element: &Handle,
        options: &TooltipOptions,
    ) -> bool {
        if self.is_attached(element) {
            return false;
        }
        let Some(content) = dom::attr(element, "title") else {
            return false;
        };
        widget.attach(element, &content, options);
        widget.show(element);
        self.attached.push(element.clone());
        trace!(content = %content, "attached tooltip");
        true
    }

    pub fn is_attached(&self, element: &Handle) -> bool {
        self.attached.iter().any(|e| dom::same_node(e, element))
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

/// A widget that only records what it was asked to do. Serves headless hosts and tests.
#[derive(Debug, Default)]
pub struct RecordingWidget {
    pub attached: Vec<(String, TooltipOptions)>,
    pub shown: usize,
}

impl TooltipWidget for RecordingWidget {
    fn attach(&mut self, _element: &Handle, content: &str, options: &TooltipOptions) {
        self.attached.push((content.to_string(), options.clone()));
    }

    fn show(&mut self, _element: &Handle) {
        self.shown += 1;
    }
}
