//! Backend port — asynchronous GET against the dashboard backend.

use std::future::Future;

use crate::error::BackendError;

/// Issues HTTP GET requests to the backend.
///
/// Implementations return the body of a successful (2xx) reply. Interpreting
/// the body is left to the caller.
pub trait Backend {
    /// Fetch `url` and return the reply body.
    fn get(&self, url: &str) -> impl Future<Output = Result<String, BackendError>>;
}
