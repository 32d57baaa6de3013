//! Application-layer errors.

use ammcon_domain::error::DecodeError;

/// Transport-level failure reported by a [`Backend`](crate::ports::Backend).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The request never produced a response (network down, CORS, …).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("backend answered HTTP {0}")]
    Status(u16),
}

/// Failure reported by a [`View`](crate::ports::View).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// No element with this id is present in the page.
    #[error("element #{0} not found")]
    MissingElement(String),
    /// The layout asset could not be loaded.
    #[error("failed to load layout: {0}")]
    Layout(String),
}

/// Failure to obtain a usable reply for a request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure.
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// The body could not be interpreted.
    #[error("malformed reply")]
    Decode(#[from] DecodeError),
}

/// Failure of a controller use-case that cannot be reported inline.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// The layout could not be loaded; nothing was bound.
    #[error("layout unavailable")]
    Layout(#[from] ViewError),
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure (includes invalid identifiers).
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
