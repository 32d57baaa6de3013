//! View-update controller — turns gestures into backend calls and replies
//! into view updates.

use ammcon_domain::command::CommandResult;
use ammcon_domain::endpoint::Endpoint;
use ammcon_domain::id::{CommandId, ElementId, PanelId, SensorId};
use ammcon_domain::reading::SensorReading;
use ammcon_domain::reply::Reply;
use futures::future::join_all;
use serde::de::DeserializeOwned;

use crate::config::ControllerConfig;
use crate::error::{ControllerError, FetchError, ViewError};
use crate::ports::{Backend, Navigator, Notification, Notifier, Severity, UiAction, View};

/// Shown when a sensor reply carries no temperature.
pub const NO_DATA_MESSAGE: &str = "No data available - sensor offline?";

/// What a request ended up doing to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The reply was rendered.
    Rendered,
    /// The sensor had nothing to report.
    NoData,
    /// The session expired and the browser was sent elsewhere.
    Redirected,
    /// The request or its decoding failed.
    Failed,
}

/// Application service owning every collaborator of the dashboard page.
///
/// Constructed once at startup by the composition root.
pub struct ViewController<B, V, N, L> {
    config: ControllerConfig,
    backend: B,
    view: V,
    notifier: N,
    navigator: L,
}

impl<B, V, N, L> ViewController<B, V, N, L>
where
    B: Backend,
    V: View,
    N: Notifier,
    L: Navigator,
{
    /// Create a controller from its configuration and port implementations.
    pub fn new(config: ControllerConfig, backend: B, view: V, notifier: N, navigator: L) -> Self {
        Self {
            config,
            backend,
            view,
            notifier,
            navigator,
        }
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Send `command` to the backend and report its result.
    ///
    /// `origin` (or every open panel when `None`) is closed exactly once,
    /// before the reply is awaited, whatever the outcome.
    pub async fn send_command(&self, command: &CommandId, origin: Option<&PanelId>) -> Outcome {
        let endpoint = Endpoint::command(command);
        self.view.close_panels(origin);
        tracing::debug!(%command, "sending command");

        match self.fetch::<CommandResult>(&endpoint).await {
            Ok(Reply::Redirect(url)) => self.redirect(&url),
            Ok(Reply::Payload(result)) => {
                let line = result.status_line();
                self.view.set_status(&line);
                self.notify(line, Severity::Info);
                Outcome::Rendered
            }
            Err(err) => {
                tracing::warn!(%command, error = %err, "command request failed");
                self.notify(format!("Command failed: {err}"), Severity::Error);
                Outcome::Failed
            }
        }
    }

    /// Fetch the latest reading of `sensor` and write it into its element.
    ///
    /// With `notify_on_empty` unset, a sensor without data (or a failed
    /// request) leaves no visible trace, which keeps the initial page load
    /// quiet for sensors that are not reporting yet.
    pub async fn refresh_sensor(&self, sensor: &SensorId, notify_on_empty: bool) -> Outcome {
        let endpoint = Endpoint::sensor_data(sensor);
        tracing::debug!(%sensor, "refreshing sensor");

        let reading = match self.fetch::<SensorReading>(&endpoint).await {
            Ok(Reply::Redirect(url)) => return self.redirect(&url),
            Ok(Reply::Payload(reading)) => reading,
            Err(err) => {
                tracing::warn!(%sensor, error = %err, "sensor request failed");
                if notify_on_empty {
                    self.notify(format!("Sensor refresh failed: {err}"), Severity::Error);
                }
                return Outcome::Failed;
            }
        };

        let Some(text) = reading.display_text() else {
            tracing::debug!(%sensor, "sensor has no data");
            if notify_on_empty {
                self.notify(NO_DATA_MESSAGE.to_string(), Severity::Warning);
            }
            return Outcome::NoData;
        };

        let element = sensor.element();
        if let Err(err) = self.view.set_text(&element, &text) {
            tracing::warn!(%sensor, error = %err, "cannot render sensor reading");
            if notify_on_empty {
                self.notify(format!("Cannot show sensor {sensor}: {err}"), Severity::Error);
            }
            return Outcome::Failed;
        }
        if let Some(title) = reading.title() {
            if let Err(err) = self.view.set_title(&element, &title) {
                tracing::debug!(%sensor, error = %err, "cannot set sensor title");
            }
        }
        Outcome::Rendered
    }

    /// Make `trigger` open `panel` when activated.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MissingElement`] if `trigger` is not in the page.
    pub fn bind_menu_toggle(&self, trigger: &ElementId, panel: &PanelId) -> Result<(), ViewError> {
        self.view
            .bind_element(trigger, UiAction::OpenPanel(panel.clone()))
    }

    /// Run an action reported by a bound element.
    pub async fn dispatch(&self, action: UiAction) {
        match action {
            UiAction::RefreshSensor(sensor) => {
                self.refresh_sensor(&sensor, true).await;
            }
            UiAction::SendCommand { command, panel } => {
                self.send_command(&command, panel.as_ref()).await;
            }
            UiAction::OpenPanel(panel) => {
                if let Err(err) = self.view.open_panel(&panel) {
                    tracing::warn!(%panel, error = %err, "cannot open panel");
                }
            }
        }
    }

    /// Prepare the page: load the layout, show the current readings, then
    /// bind every sensor, command control and menu.
    ///
    /// Initial readings are fetched concurrently and without notifications.
    /// Elements that cannot be bound are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Layout`] if the layout cannot be loaded;
    /// nothing is bound in that case.
    pub async fn initialize(&self) -> Result<(), ControllerError> {
        let layout_url = self.config.layout_url();
        if let Err(err) = self.view.load_layout(&layout_url).await {
            tracing::warn!(url = %layout_url, error = %err, "cannot load layout");
            self.notify(format!("Cannot load floor plan: {err}"), Severity::Error);
            return Err(err.into());
        }

        join_all(
            self.config
                .sensors
                .iter()
                .map(|sensor| self.refresh_sensor(&sensor.id, false)),
        )
        .await;

        for sensor in &self.config.sensors {
            let action = UiAction::RefreshSensor(sensor.id.clone());
            if let Err(err) = self.view.bind_element(&sensor.id.element(), action) {
                tracing::warn!(sensor = %sensor.id, error = %err, "sensor not bound");
            }
        }

        let controls = self.view.command_controls();
        for control in &controls {
            let action = UiAction::SendCommand {
                command: control.command.clone(),
                panel: control.panel.clone(),
            };
            self.view.bind_control(&control.handle, action);
        }
        for command in &self.config.commands {
            let action = UiAction::SendCommand {
                command: command.command.clone(),
                panel: command.panel.clone(),
            };
            if let Err(err) = self.view.bind_element(&command.element, action) {
                tracing::warn!(command = %command.command, error = %err, "command not bound");
            }
        }

        for menu in &self.config.menus {
            if let Err(err) = self.bind_menu_toggle(&menu.trigger, &menu.panel) {
                tracing::warn!(panel = %menu.panel, error = %err, "menu not bound");
            }
        }

        tracing::info!(
            sensors = self.config.sensors.len(),
            commands = controls.len() + self.config.commands.len(),
            menus = self.config.menus.len(),
            "dashboard initialized"
        );
        Ok(())
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<Reply<T>, FetchError> {
        let url = endpoint.url(&self.config.script_root);
        let body = self.backend.get(&url).await?;
        Ok(Reply::from_json(&body)?)
    }

    fn redirect(&self, url: &str) -> Outcome {
        tracing::info!(%url, "session rejected, redirecting");
        self.navigator.replace(url);
        Outcome::Redirected
    }

    fn notify(&self, message: String, severity: Severity) {
        self.notifier.notify(Notification {
            message,
            severity,
            ttl: self.config.toast_ttl(),
        });
    }
}
