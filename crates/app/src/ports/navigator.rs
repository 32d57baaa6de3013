//! Navigator port — hard navigation of the browser.

/// Moves the browser to another page.
pub trait Navigator {
    /// Replace the current location with `url` without adding a history entry.
    fn replace(&self, url: &str);
}
