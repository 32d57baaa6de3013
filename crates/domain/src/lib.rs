//! # ammcon-domain
//!
//! Pure value types for the ammcon home-automation dashboard.
//!
//! ## Responsibilities
//! - Typed identifiers for sensors, commands, panels and trigger elements
//! - The reply envelope shared by every backend endpoint (payload or redirect)
//! - Backend payloads: [`CommandResult`](command::CommandResult) and
//!   [`SensorReading`](reading::SensorReading)
//! - Endpoint description and URL rendering
//! - Display formatting for status lines, sensor values and timestamps
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod command;
pub mod endpoint;
pub mod reading;
pub mod reply;
