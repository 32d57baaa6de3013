//! # ammcon-dashboard-web
//!
//! Browser composition root for the ammcon dashboard.
//!
//! ## Responsibilities
//! - Install panic and `tracing` hooks writing to the browser console
//! - Read the controller configuration from the page
//! - Construct the browser adapters (`gloo-net` backend, DOM view, toasts,
//!   location navigator) and inject them into the [`ViewController`]
//! - Initialize the page, then run every bound activation on its own task
//!
//! ## Dependency rule
//! This is the **only** crate that knows about the browser.
//! It is the wiring layer — no dashboard logic belongs here.

use std::rc::Rc;

use ammcon_app::config::{ControllerConfig, LoggingConfig};
use ammcon_app::ports::UiAction;
use ammcon_app::services::view_controller::ViewController;
use futures::StreamExt;
use futures::channel::mpsc::{self, UnboundedReceiver};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub mod api;
pub mod dom;
pub mod logging;
pub mod navigator;
pub mod page_config;
pub mod toast;

use api::GlooBackend;
use dom::WebView;
use navigator::LocationNavigator;
use toast::ToastNotifier;

/// The controller as wired for the browser.
pub type Dashboard = ViewController<GlooBackend, WebView, ToastNotifier, LocationNavigator>;

/// Entry point, run once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        web_sys::console::error_1(&JsValue::from_str("ammcon: no document to attach to"));
        return;
    };

    let config = match page_config::load(&document) {
        Ok(config) => {
            logging::init(&config.logging.filter);
            config
        }
        Err(err) => {
            logging::init(&LoggingConfig::default().filter);
            tracing::error!(error = %err, "invalid dashboard configuration, using defaults");
            ControllerConfig::default()
        }
    };

    let (actions, receiver) = mpsc::unbounded();
    let dashboard = Rc::new(ViewController::new(
        config,
        GlooBackend,
        WebView::new(document.clone(), actions),
        ToastNotifier::new(document),
        LocationNavigator,
    ));

    spawn_local(run(dashboard, receiver));
}

/// Initialize the page, then dispatch activations as they arrive.
///
/// Each action runs on its own task so a slow request never delays the
/// next click.
async fn run(dashboard: Rc<Dashboard>, mut actions: UnboundedReceiver<UiAction>) {
    if let Err(err) = dashboard.initialize().await {
        tracing::error!(error = %err, "dashboard initialization failed");
        return;
    }
    while let Some(action) = actions.next().await {
        let dashboard = Rc::clone(&dashboard);
        spawn_local(async move { dashboard.dispatch(action).await });
    }
}
