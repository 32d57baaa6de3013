//! HTTP access wrapping `gloo-net` for calls to the dashboard backend.

use ammcon_app::error::BackendError;
use ammcon_app::ports::Backend;
use gloo_net::http::{Request, Response};

/// [`Backend`] issuing real browser requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooBackend;

impl Backend for GlooBackend {
    async fn get(&self, url: &str) -> Result<String, BackendError> {
        let resp = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport)?;
        read_body(check_response(resp)?).await
    }
}

/// Fetch a static asset as text.
///
/// # Errors
///
/// Returns a [`BackendError`] if the request fails or the reply is not 2xx.
pub async fn fetch_text(url: &str) -> Result<String, BackendError> {
    let resp = Request::get(url).send().await.map_err(transport)?;
    read_body(check_response(resp)?).await
}

/// Check the HTTP response status and extract an error if non-2xx.
fn check_response(resp: Response) -> Result<Response, BackendError> {
    if resp.ok() {
        return Ok(resp);
    }
    Err(BackendError::Status(resp.status()))
}

async fn read_body(resp: Response) -> Result<String, BackendError> {
    resp.text().await.map_err(transport)
}

#[allow(clippy::needless_pass_by_value)]
fn transport(err: gloo_net::Error) -> BackendError {
    BackendError::Transport(err.to_string())
}
