//! # ammcon-app
//!
//! Application layer — the view-update controller and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Backend` — GET a URL and return the reply body
//!   - `View` — load the layout, write text/titles, open/close panels, bind triggers
//!   - `Notifier` — show transient toast notifications
//!   - `Navigator` — replace the browser location
//! - Define the **driving/inbound** use-case object:
//!   - `ViewController` — send commands, refresh sensors, wire menus, initialize the page
//! - Load and validate the controller configuration
//!
//! ## Dependency rule
//! Depends on `ammcon-domain` only (plus `futures` for joining requests).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod error;
pub mod ports;
pub mod services;
