//! Error types for the stream consumer

use thiserror::Error;

/// A body stream failed after some text had already been accumulated.
///
/// The partial text is carried along so the caller can decide whether to
/// keep it visible next to a synthesized error message; it is never
/// silently presented as a complete answer.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct StreamAborted {
    /// Text accumulated before the failure.
    pub partial: String,
    pub reason: String,
}
