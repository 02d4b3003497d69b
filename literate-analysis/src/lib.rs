//! # literate-analysis
//!
//! Behavior layered over a rendered literate page: cross-references between identifiers and the
//! anchors that use them, interaction bindings, tooltips and deep-link navigation.
//!
//! Layout
//!
//!     .
//!     ├── xref.rs           references/definition lookups, highlighting, identifier index
//!     ├── interactions.rs   live selector → event → action bindings
//!     ├── tooltip.rs        tooltip widget seam and the attach-once registry
//!     ├── location.rs       query (`?id=`) and fragment (`#`) deep links
//!     ├── navigation.rs     Host seam, NavigationController state machine, pop-out bar
//!     ├── host.rs           HeadlessHost
//!     └── view.rs           LiterateView, the per-document session
//!
//! Everything here runs on a single event loop. The host reports scroll completion by handing
//! back the ticket it was given; nothing blocks while an animation runs.

pub mod error;
pub mod host;
pub mod interactions;
pub mod location;
pub mod navigation;
pub mod tooltip;
pub mod view;
pub mod xref;

pub use error::{NavigationError, ViewError};
pub use host::HeadlessHost;
pub use location::{Location, UriForm};
pub use navigation::{
    Axis, Host, LoadOutcome, NavigationController, NavigationOptions, NavigationState, PopOut,
    ScrollAnimation, ScrollTicket,
};
pub use tooltip::{RecordingWidget, TooltipOptions, TooltipWidget};
pub use view::{LiterateView, ViewOptions};
