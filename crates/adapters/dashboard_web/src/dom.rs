//! DOM-backed [`View`] over the server-rendered page and the loaded floor plan.
//!
//! Markup contract:
//! - `#layout_main` receives the SVG floor plan;
//! - `#response` is the status area;
//! - panels carry `data-role="panel"` and are shown with the `panel-open` class;
//! - command controls carry `data-ammcon` and `data-ammcon_cmd`, or are legacy
//!   `.commands` elements holding the command in `value` and the popup to
//!   close in `yip`.

use std::cell::RefCell;

use ammcon_app::error::ViewError;
use ammcon_app::ports::{CommandControl, ControlMarkup, UiAction, View};
use ammcon_domain::id::{ElementId, PanelId};
use futures::channel::mpsc::UnboundedSender;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use crate::api;

const LAYOUT_CONTAINER: &str = "layout_main";
const STATUS_AREA: &str = "response";
const PANEL_SELECTOR: &str = "[data-role=panel]";
const OPEN_PANEL_CLASS: &str = "panel-open";
const COMMAND_SELECTOR: &str = "[data-ammcon], .commands[value]";
const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Page accessor. Activations of bound elements are sent down `actions`.
pub struct WebView {
    document: Document,
    actions: UnboundedSender<UiAction>,
    listeners: RefCell<Vec<Closure<dyn FnMut(Event)>>>,
}

impl WebView {
    /// Wrap `document`, reporting bound activations on `actions`.
    pub fn new(document: Document, actions: UnboundedSender<UiAction>) -> Self {
        Self {
            document,
            actions,
            listeners: RefCell::new(Vec::new()),
        }
    }

    fn element(&self, id: &str) -> Result<Element, ViewError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| ViewError::MissingElement(id.to_string()))
    }

    fn listen(&self, target: &Element, action: UiAction) {
        let actions = self.actions.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            event.stop_propagation();
            if actions.unbounded_send(action.clone()).is_err() {
                tracing::warn!("dispatcher stopped, activation dropped");
            }
        });
        if let Err(err) =
            target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "cannot attach click listener");
            return;
        }
        self.listeners.borrow_mut().push(closure);
    }

    fn replace_svg_title(&self, element: &Element, text: &str) -> Result<(), JsValue> {
        if let Some(old) = element.query_selector("title")? {
            old.remove();
        }
        let title = self.document.create_element_ns(Some(SVG_NS), "title")?;
        title.set_text_content(Some(text));
        element.append_child(&title)?;
        Ok(())
    }

    fn discover_control(element: Element) -> Option<CommandControl<Element>> {
        let markup = ControlMarkup {
            command_attr: element.get_attribute("data-ammcon_cmd"),
            value: element.get_attribute("value"),
            yip: element.get_attribute("yip"),
            enclosing_panel: element
                .closest(PANEL_SELECTOR)
                .ok()
                .flatten()
                .map(|panel| panel.id()),
        };
        match CommandControl::from_markup(element, markup) {
            Ok(control) => Some(control),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring command control");
                None
            }
        }
    }
}

impl View for WebView {
    type Control = Element;

    async fn load_layout(&self, url: &str) -> Result<(), ViewError> {
        let container = self
            .element(LAYOUT_CONTAINER)
            .map_err(|err| ViewError::Layout(err.to_string()))?;
        let svg = api::fetch_text(url)
            .await
            .map_err(|err| ViewError::Layout(err.to_string()))?;
        container.set_inner_html(&svg);
        tracing::debug!(%url, "layout loaded");
        Ok(())
    }

    fn set_text(&self, element: &ElementId, text: &str) -> Result<(), ViewError> {
        self.element(element.as_str())?.set_text_content(Some(text));
        Ok(())
    }

    fn set_title(&self, element: &ElementId, text: &str) -> Result<(), ViewError> {
        let target = self.element(element.as_str())?;
        if target.namespace_uri().as_deref() == Some(SVG_NS) {
            // SVG shows tooltips from a <title> child, not the attribute
            if let Err(err) = self.replace_svg_title(&target, text) {
                tracing::debug!(%element, ?err, "cannot set svg title");
            }
        }
        if let Err(err) = target.set_attribute("title", text) {
            tracing::debug!(%element, ?err, "cannot set title attribute");
        }
        Ok(())
    }

    fn set_status(&self, text: &str) {
        match self.element(STATUS_AREA) {
            Ok(area) => area.set_text_content(Some(text)),
            Err(err) => tracing::debug!(error = %err, "no status area"),
        }
    }

    fn open_panel(&self, panel: &PanelId) -> Result<(), ViewError> {
        let element = self.element(panel.as_str())?;
        if let Err(err) = element.class_list().add_1(OPEN_PANEL_CLASS) {
            tracing::warn!(%panel, ?err, "cannot open panel");
        }
        Ok(())
    }

    fn close_panels(&self, origin: Option<&PanelId>) {
        let panels = match origin {
            Some(panel) => match self.element(panel.as_str()) {
                Ok(element) => vec![element],
                Err(err) => {
                    tracing::debug!(error = %err, "origin panel gone");
                    return;
                }
            },
            None => {
                let selector = format!("{PANEL_SELECTOR}.{OPEN_PANEL_CLASS}");
                match self.document.query_selector_all(&selector) {
                    Ok(list) => (0..list.length())
                        .filter_map(|idx| list.item(idx))
                        .filter_map(|node| node.dyn_into::<Element>().ok())
                        .collect(),
                    Err(err) => {
                        tracing::warn!(?err, "cannot query open panels");
                        return;
                    }
                }
            }
        };
        for panel in panels {
            if let Err(err) = panel.class_list().remove_1(OPEN_PANEL_CLASS) {
                tracing::warn!(?err, "cannot close panel");
            }
        }
    }

    fn command_controls(&self) -> Vec<CommandControl<Element>> {
        let list = match self.document.query_selector_all(COMMAND_SELECTOR) {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(?err, "cannot query command controls");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|idx| list.item(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(Self::discover_control)
            .collect()
    }

    fn bind_element(&self, element: &ElementId, action: UiAction) -> Result<(), ViewError> {
        let target = self.element(element.as_str())?;
        self.listen(&target, action);
        Ok(())
    }

    fn bind_control(&self, handle: &Element, action: UiAction) {
        self.listen(handle, action);
    }
}
