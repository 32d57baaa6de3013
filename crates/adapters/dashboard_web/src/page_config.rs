//! Reads the controller configuration from the hosting page.
//!
//! The page may embed a TOML document in
//! `<script type="application/toml" id="ammcon-config">` and force values
//! through attributes on `<body>`:
//! - `data-script-root` — base path of the backend;
//! - `data-log` — log filter.

use ammcon_app::config::{ControllerConfig, Overrides};
use ammcon_app::error::ConfigError;
use web_sys::Document;

const CONFIG_ELEMENT: &str = "ammcon-config";

/// Build the configuration from `document`.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the embedded document is malformed or
/// invalid.
pub fn load(document: &Document) -> Result<ControllerConfig, ConfigError> {
    let embedded = document
        .get_element_by_id(CONFIG_ELEMENT)
        .and_then(|element| element.text_content());
    let body = document.body();
    let body_attr = |name: &str| body.as_ref().and_then(|body| body.get_attribute(name));
    let overrides = Overrides {
        script_root: body_attr("data-script-root"),
        log_filter: body_attr("data-log"),
    };
    ControllerConfig::load(embedded.as_deref(), overrides)
}
