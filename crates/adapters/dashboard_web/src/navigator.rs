//! Browser location handling.

use ammcon_app::ports::Navigator;

/// [`Navigator`] driving `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn replace(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            tracing::error!(%url, "no window to navigate");
            return;
        };
        if let Err(err) = window.location().replace(url) {
            tracing::error!(%url, ?err, "navigation refused");
        }
    }
}
