//! Typed errors surfaced by the REST clients.
//!
//! `Display` output is user-facing: pages render these messages inline next
//! to the form or list that triggered the call.

use thiserror::Error;

/// Failures produced by the resource clients in [`crate::app::api`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// A response arrived with a non-2xx status. The message is the
    /// endpoint's generic failure text; the original body is discarded.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// HTTP 409 from appointment creation; the backend's body is surfaced
    /// verbatim so the user sees the actual conflict.
    #[error("{0}")]
    Conflict(String),

    /// The backend accepted the request but reported a failure in its body.
    #[error("{0}")]
    Rejected(String),

    /// A 2xx response body could not be decoded as the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The caller cancelled the request, usually because the view unmounted.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}
