//! Controller configuration — TOML document with page-level overrides.
//!
//! Every field has a sensible default reproducing the stock floor plan, so
//! the document is optional. Overrides supplied by the hosting page take
//! precedence over document values.

use std::collections::HashSet;
use std::time::Duration;

use ammcon_domain::endpoint::join_root;
use ammcon_domain::id::{CommandId, ElementId, PanelId, SensorId};
use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Base path or URL the backend is mounted under (e.g. `/ammcon`).
    pub script_root: String,
    /// Layout asset path, relative to `script_root`.
    pub layout_asset: String,
    /// How long toasts stay visible, in milliseconds.
    pub toast_ttl_ms: u64,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Sensors refreshed on load and on click.
    pub sensors: Vec<SensorConfig>,
    /// Icons that slide a panel open.
    pub menus: Vec<MenuConfig>,
    /// Command controls declared here rather than discovered in the markup.
    pub commands: Vec<CommandConfig>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// One sensor text node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SensorConfig {
    /// Element id, also the source of the backend data key.
    pub id: SensorId,
}

/// An icon that opens a panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuConfig {
    /// Element the user activates.
    pub trigger: ElementId,
    /// Panel to open.
    pub panel: PanelId,
}

/// A statically declared command control.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandConfig {
    /// Element the user activates.
    pub element: ElementId,
    /// Command to send.
    pub command: CommandId,
    /// Panel to close once the command is sent.
    #[serde(default)]
    pub panel: Option<PanelId>,
}

/// Values the hosting page may force, whatever the document says.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replaces [`ControllerConfig::script_root`].
    pub script_root: Option<String>,
    /// Replaces [`LoggingConfig::filter`].
    pub log_filter: Option<String>,
}

impl ControllerConfig {
    /// Parse a TOML document (if any), apply `overrides`, then validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed, contains invalid
    /// identifiers, or fails validation.
    pub fn load(document: Option<&str>, overrides: Overrides) -> Result<Self, ConfigError> {
        let mut config = match document {
            Some(text) => Self::from_toml_str(text)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document without validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Parse)
    }

    fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(root) = overrides.script_root {
            self.script_root = root;
        }
        if let Some(filter) = overrides.log_filter {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.toast_ttl_ms == 0 {
            return Err(ConfigError::Validation(
                "toast_ttl_ms must be non-zero".to_string(),
            ));
        }
        if self.layout_asset.trim().is_empty() {
            return Err(ConfigError::Validation(
                "layout_asset must not be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for sensor in &self.sensors {
            if !seen.insert(sensor.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "sensor {} is declared twice",
                    sensor.id
                )));
            }
        }
        Ok(())
    }

    /// How long toasts stay visible.
    #[must_use]
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    /// Full URL of the layout asset.
    #[must_use]
    pub fn layout_url(&self) -> String {
        join_root(&self.script_root, &self.layout_asset)
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            script_root: String::new(),
            layout_asset: "static/layout.svg".to_string(),
            toast_ttl_ms: 3000,
            logging: LoggingConfig::default(),
            sensors: default_sensors(),
            menus: default_menus(),
            commands: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "ammcon=info".to_string(),
        }
    }
}

fn default_sensors() -> Vec<SensorConfig> {
    ["temp1", "temp2", "temp3"]
        .into_iter()
        .filter_map(|id| SensorId::new(id).ok())
        .map(|id| SensorConfig { id })
        .collect()
}

fn default_menus() -> Vec<MenuConfig> {
    [
        ("living_light1", "living1_light_menu"),
        ("living_light2", "living2_light_menu"),
        ("bedroom1_light1", "bedroom1_light_menu"),
        ("bedroom2_light1", "bedroom2_light_menu"),
        ("bedroom3_light1", "bedroom3_light_menu"),
        ("tv", "tv_menu"),
        ("living_aircon", "living_aircon_menu"),
        ("bedroom2_aircon", "bedroom2_aircon_menu"),
        ("bedroom3_aircon", "bedroom3_aircon_menu"),
    ]
    .into_iter()
    .filter_map(|(trigger, panel)| {
        Some(MenuConfig {
            trigger: ElementId::new(trigger).ok()?,
            panel: PanelId::new(panel).ok()?,
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_stock_floor_plan_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.script_root, "");
        assert_eq!(config.toast_ttl(), Duration::from_millis(3000));
        assert_eq!(config.sensors.len(), 3);
        assert_eq!(config.menus.len(), 9);
        assert!(config.commands.is_empty());
        assert_eq!(config.layout_url(), "/static/layout.svg");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config = ControllerConfig::from_toml_str("").unwrap();
        assert_eq!(config.toast_ttl_ms, 3000);
        assert_eq!(config.sensors.len(), 3);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            script_root = '/ammcon'
            layout_asset = 'static/flat.svg'
            toast_ttl_ms = 2000

            [logging]
            filter = 'debug'

            [[sensors]]
            id = 'temp7'

            [[menus]]
            trigger = 'kitchen_light'
            panel = 'kitchen_light_menu'

            [[commands]]
            element = 'all_off'
            command = 'scene off'
            panel = 'scene_menu'
        ";
        let config = ControllerConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.script_root, "/ammcon");
        assert_eq!(config.layout_url(), "/ammcon/static/flat.svg");
        assert_eq!(config.toast_ttl(), Duration::from_millis(2000));
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.sensors.len(), 1);
        assert_eq!(config.sensors[0].id.data_key(), "7");
        assert_eq!(config.menus[0].panel.as_str(), "kitchen_light_menu");
        assert_eq!(config.commands[0].command.as_str(), "scene off");
        assert_eq!(
            config.commands[0].panel.as_ref().map(PanelId::as_str),
            Some("scene_menu")
        );
    }

    #[test]
    fn should_reject_sensor_id_without_data_key() {
        let toml = "
            [[sensors]]
            id = 'temp'
        ";
        assert!(matches!(
            ControllerConfig::from_toml_str(toml),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn should_apply_overrides_over_document() {
        let config = ControllerConfig::load(
            Some("script_root = '/from-doc'"),
            Overrides {
                script_root: Some("/from-page".to_string()),
                log_filter: Some("trace".to_string()),
            },
        )
        .unwrap();
        assert_eq!(config.script_root, "/from-page");
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_use_defaults_when_no_document() {
        let config = ControllerConfig::load(None, Overrides::default()).unwrap();
        assert_eq!(config.sensors.len(), 3);
    }

    #[test]
    fn should_reject_zero_ttl() {
        let result = ControllerConfig::load(Some("toast_ttl_ms = 0"), Overrides::default());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_duplicate_sensors() {
        let toml = "
            [[sensors]]
            id = 'temp1'

            [[sensors]]
            id = 'temp1'
        ";
        let result = ControllerConfig::load(Some(toml), Overrides::default());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
