//! Error types shared across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An identifier was empty or only whitespace.
    #[error("{kind} must not be empty")]
    EmptyId {
        /// Kind of identifier (e.g. `"command id"`).
        kind: &'static str,
    },
    /// A sensor id does not extend past the fixed element prefix.
    #[error("sensor id {id:?} must be longer than its {prefix_len}-character prefix")]
    SensorIdTooShort {
        /// The offending id.
        id: String,
        /// Length of the prefix that gets stripped.
        prefix_len: usize,
    },
}

/// Failure to interpret a backend reply body.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body is not valid JSON.
    #[error("reply is not valid JSON")]
    Json(#[source] serde_json::Error),
    /// The body is JSON but does not match the expected payload.
    #[error("reply does not match the expected payload")]
    Payload(#[source] serde_json::Error),
}
