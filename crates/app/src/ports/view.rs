//! View port — everything the controller needs from the page.

use std::future::Future;

use ammcon_domain::error::ValidationError;
use ammcon_domain::id::{CommandId, ElementId, PanelId, SensorId};

use crate::error::ViewError;

/// What activating a bound element should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Re-fetch one sensor and report when it has no data.
    RefreshSensor(SensorId),
    /// Send a command, closing the panel the control sits in.
    SendCommand {
        /// Command to send.
        command: CommandId,
        /// Panel containing the control, if any.
        panel: Option<PanelId>,
    },
    /// Slide a panel open.
    OpenPanel(PanelId),
}

/// A command control found in the page markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandControl<C> {
    /// Adapter-specific handle to the control element.
    pub handle: C,
    /// Command the control sends.
    pub command: CommandId,
    /// Panel containing the control, if any.
    pub panel: Option<PanelId>,
}

/// Attributes of a command control, as found in the markup.
///
/// Current controls carry `data-ammcon` plus `data-ammcon_cmd="<id>"`.
/// Legacy `.commands` controls carry the command in `value` and name the
/// popup to close in `yip` (`"#tv_menu"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlMarkup {
    /// Value of `data-ammcon_cmd`.
    pub command_attr: Option<String>,
    /// Value of `value`.
    pub value: Option<String>,
    /// Value of `yip`.
    pub yip: Option<String>,
    /// Id of the enclosing `data-role="panel"` element.
    pub enclosing_panel: Option<String>,
}

impl<C> CommandControl<C> {
    /// Interpret the markup of a control.
    ///
    /// The command comes from `data-ammcon_cmd`, else `value`. The panel to
    /// close comes from `yip` (leading `#` stripped), else the enclosing panel.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] if neither attribute holds a
    /// command.
    pub fn from_markup(handle: C, markup: ControlMarkup) -> Result<Self, ValidationError> {
        let command = non_blank(markup.command_attr)
            .or_else(|| non_blank(markup.value))
            .unwrap_or_default();
        let command = CommandId::new(command)?;
        let panel = non_blank(markup.yip.map(|yip| yip.trim_start_matches('#').to_string()))
            .or_else(|| non_blank(markup.enclosing_panel))
            .and_then(|panel| PanelId::new(panel).ok());
        Ok(Self {
            handle,
            command,
            panel,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Access to the rendered page.
///
/// Bound elements report activations back to the controller as
/// [`UiAction`]s; how they get there is up to the adapter.
pub trait View {
    /// Adapter-specific handle for command controls that may lack an id.
    type Control;

    /// Load the layout asset at `url` into the page.
    fn load_layout(&self, url: &str) -> impl Future<Output = Result<(), ViewError>>;

    /// Replace the text content of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MissingElement`] if no such element exists.
    fn set_text(&self, element: &ElementId, text: &str) -> Result<(), ViewError>;

    /// Set the tooltip/title of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MissingElement`] if no such element exists.
    fn set_title(&self, element: &ElementId, text: &str) -> Result<(), ViewError>;

    /// Replace the text of the persistent status area.
    fn set_status(&self, text: &str);

    /// Slide `panel` open.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MissingElement`] if no such panel exists.
    fn open_panel(&self, panel: &PanelId) -> Result<(), ViewError>;

    /// Close `origin`, or every open panel when `origin` is `None`.
    fn close_panels(&self, origin: Option<&PanelId>);

    /// Command controls present in the markup.
    fn command_controls(&self) -> Vec<CommandControl<Self::Control>>;

    /// Run `action` whenever `element` is activated.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MissingElement`] if no such element exists.
    fn bind_element(&self, element: &ElementId, action: UiAction) -> Result<(), ViewError>;

    /// Run `action` whenever the control behind `handle` is activated.
    fn bind_control(&self, handle: &Self::Control, action: UiAction);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_command_from_data_attribute() {
        let control = CommandControl::from_markup(
            1,
            ControlMarkup {
                command_attr: Some("living light1 on".to_string()),
                enclosing_panel: Some("living1_light_menu".to_string()),
                ..ControlMarkup::default()
            },
        )
        .unwrap();
        assert_eq!(control.command.as_str(), "living light1 on");
        assert_eq!(
            control.panel.as_ref().map(PanelId::as_str),
            Some("living1_light_menu")
        );
    }

    #[test]
    fn should_fall_back_to_value_and_close_yip_popup_for_legacy_controls() {
        let control = CommandControl::from_markup(
            2,
            ControlMarkup {
                value: Some("htpc wol".to_string()),
                yip: Some("#tv_popup".to_string()),
                enclosing_panel: Some("tv_menu".to_string()),
                ..ControlMarkup::default()
            },
        )
        .unwrap();
        assert_eq!(control.command.as_str(), "htpc wol");
        assert_eq!(control.panel.as_ref().map(PanelId::as_str), Some("tv_popup"));
    }

    #[test]
    fn should_fall_back_to_value_when_data_attribute_is_blank() {
        let control = CommandControl::from_markup(
            3,
            ControlMarkup {
                command_attr: Some(" ".to_string()),
                value: Some("tv power".to_string()),
                ..ControlMarkup::default()
            },
        )
        .unwrap();
        assert_eq!(control.command.as_str(), "tv power");
        assert!(control.panel.is_none());
    }

    #[test]
    fn should_reject_control_without_command() {
        let result = CommandControl::from_markup(4, ControlMarkup::default());
        assert_eq!(
            result.map(|c| c.handle),
            Err(ValidationError::EmptyId { kind: "command id" })
        );
    }
}
