//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Returned futures are not `Send`: everything runs on the browser's
//! single-threaded event loop.

pub mod backend;
pub mod navigator;
pub mod notifier;
pub mod view;

pub use backend::Backend;
pub use navigator::Navigator;
pub use notifier::{Notification, Notifier, Severity};
pub use view::{CommandControl, ControlMarkup, UiAction, View};
