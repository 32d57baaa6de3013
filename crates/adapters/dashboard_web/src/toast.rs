//! Toast notification system for showing transient messages.

use ammcon_app::ports::{Notification, Notifier, Severity};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

const CONTAINER_CLASS: &str = "toast-container";

/// [`Notifier`] appending toasts to a `.toast-container` element.
///
/// Each toast removes itself after its TTL or when its dismiss button is
/// clicked.
pub struct ToastNotifier {
    document: Document,
}

impl ToastNotifier {
    /// Render toasts into `document`.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The toast container, created at the end of `<body>` when missing.
    fn container(&self) -> Result<Element, JsValue> {
        if let Some(existing) = self
            .document
            .query_selector(&format!(".{CONTAINER_CLASS}"))?
        {
            return Ok(existing);
        }
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let container = self.document.create_element("div")?;
        container.set_class_name(CONTAINER_CLASS);
        body.append_child(&container)?;
        Ok(container)
    }

    fn render(&self, notification: &Notification) -> Result<Element, JsValue> {
        let toast = self.document.create_element("div")?;
        toast.set_class_name(&format!("toast {}", severity_class(notification.severity)));

        let dismiss = self.document.create_element("button")?;
        dismiss.set_class_name("toast-dismiss");
        dismiss.set_text_content(Some("\u{00D7}"));
        let target = toast.clone();
        let on_click = Closure::once_into_js(move || target.remove());
        dismiss.add_event_listener_with_callback("click", on_click.unchecked_ref())?;

        let text = self.document.create_element("span")?;
        text.set_text_content(Some(&notification.message));

        toast.append_child(&dismiss)?;
        toast.append_child(&text)?;
        self.container()?.append_child(&toast)?;
        Ok(toast)
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let toast = match self.render(&notification) {
            Ok(toast) => toast,
            Err(err) => {
                tracing::warn!(message = %notification.message, ?err, "cannot show toast");
                return;
            }
        };
        let ttl_ms = u32::try_from(notification.ttl.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ttl_ms).await;
            toast.remove();
        });
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "toast-info",
        Severity::Warning => "toast-warning",
        Severity::Error => "toast-error",
    }
}
