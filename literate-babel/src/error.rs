//! Error types for page transformation

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// No element matched the selector naming the raw node container.
    #[error("no element matches source selector `{selector}`")]
    MissingSource { selector: String },

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("HTML serialization failed: {0}")]
    Serialization(#[from] std::io::Error),

    #[error("serialized HTML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
