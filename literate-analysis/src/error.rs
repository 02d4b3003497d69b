//! Error types for navigation and view setup

use literate_babel::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("location `{href}` is not an absolute URI: {source}")]
    InvalidLocation {
        href: String,
        #[source]
        source: url::ParseError,
    },
}

/// Failures while loading a [`LiterateView`](crate::view::LiterateView).
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}
