//! A host without a display
//!
//! Records every request instead of acting on it. Scrolls complete only when the caller says
//! so, which lets tests (and batch tools) drive transitions deterministically.

use crate::navigation::{Host, ScrollAnimation, ScrollTicket};
use markup5ever_rcdom::Handle;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub enum HostCall {
    ScrollTo {
        target: Handle,
        animation: ScrollAnimation,
        ticket: ScrollTicket,
    },
    Navigate(String),
    OpenTopLevel(String),
}

impl PartialEq for HostCall {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                HostCall::ScrollTo {
                    target: a,
                    animation: x,
                    ticket: s,
                },
                HostCall::ScrollTo {
                    target: b,
                    animation: y,
                    ticket: t,
                },
            ) => Rc::ptr_eq(a, b) && x == y && s == t,
            (HostCall::Navigate(a), HostCall::Navigate(b)) => a == b,
            (HostCall::OpenTopLevel(a), HostCall::OpenTopLevel(b)) => a == b,
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessHost {
    location: String,
    framed: bool,
    calls: Vec<HostCall>,
}

impl HeadlessHost {
    pub fn new(location: impl Into<String>, framed: bool) -> Self {
        HeadlessHost {
            location: location.into(),
            framed,
            calls: Vec::new(),
        }
    }

    pub fn framed(location: impl Into<String>) -> Self {
        Self::new(location, true)
    }

    pub fn top_level(location: impl Into<String>) -> Self {
        Self::new(location, false)
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// The ticket of the most recent scroll request, if any.
    pub fn last_scroll(&self) -> Option<ScrollTicket> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::ScrollTo { ticket, .. } => Some(*ticket),
            _ => None,
        })
    }

    /// Every location passed to [`Host::navigate`], oldest first.
    pub fn navigations(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Navigate(uri) => Some(uri.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Host for HeadlessHost {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn is_framed(&self) -> bool {
        self.framed
    }

    fn scroll_to(&mut self, target: &Handle, animation: &ScrollAnimation, ticket: ScrollTicket) {
        self.calls.push(HostCall::ScrollTo {
            target: target.clone(),
            animation: *animation,
            ticket,
        });
    }

    fn navigate(&mut self, uri: &str) {
        self.location = uri.to_string();
        self.calls.push(HostCall::Navigate(uri.to_string()));
    }

    fn open_top_level(&mut self, uri: &str) {
        self.calls.push(HostCall::OpenTopLevel(uri.to_string()));
    }
}
