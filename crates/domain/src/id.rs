//! Typed identifier newtypes backed by the strings the markup carries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of leading characters of a sensor element id that do not belong
/// to the backend data key (`temp1` → `1`).
pub const SENSOR_PREFIX_LEN: usize = 4;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $kind:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wrap a string after checking it is not blank.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::EmptyId`] if `value` is empty or
            /// only whitespace.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::EmptyId { kind: $kind });
                }
                Ok(Self(value))
            }

            /// Borrow the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier of a backend command (e.g. `"living light1 on"`).
    CommandId,
    "command id"
);

define_id!(
    /// DOM id of a slide-out panel.
    PanelId,
    "panel id"
);

define_id!(
    /// DOM id of an element that triggers an action when activated.
    ElementId,
    "element id"
);

/// DOM id of a sensor text node, e.g. `temp1`.
///
/// The backend addresses the sensor by its *data key*: the id minus its
/// first [`SENSOR_PREFIX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SensorId(String);

impl SensorId {
    /// Wrap a sensor element id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SensorIdTooShort`] if the id has no
    /// characters left once the prefix is stripped.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.chars().count() <= SENSOR_PREFIX_LEN {
            return Err(ValidationError::SensorIdTooShort {
                id: value,
                prefix_len: SENSOR_PREFIX_LEN,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the element id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key used in `/data/{key}`.
    #[must_use]
    pub fn data_key(&self) -> &str {
        // `new` guarantees more than SENSOR_PREFIX_LEN chars
        let offset = self
            .0
            .char_indices()
            .nth(SENSOR_PREFIX_LEN)
            .map_or(self.0.len(), |(idx, _)| idx);
        &self.0[offset..]
    }

    /// The sensor's element, for view operations.
    #[must_use]
    pub fn element(&self) -> ElementId {
        ElementId(self.0.clone())
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SensorId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SensorId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SensorId> for String {
    fn from(id: SensorId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_prefix_when_computing_data_key() {
        let id = SensorId::new("temp1").unwrap();
        assert_eq!(id.data_key(), "1");

        let id = SensorId::new("temp_livingroom").unwrap();
        assert_eq!(id.data_key(), "_livingroom");
    }

    #[test]
    fn should_reject_sensor_id_when_not_longer_than_prefix() {
        assert_eq!(
            SensorId::new("temp"),
            Err(ValidationError::SensorIdTooShort {
                id: "temp".to_string(),
                prefix_len: SENSOR_PREFIX_LEN,
            })
        );
        assert!(SensorId::new("").is_err());
    }

    #[test]
    fn should_count_characters_not_bytes_when_stripping_prefix() {
        let id = SensorId::new("tëmp2").unwrap();
        assert_eq!(id.data_key(), "2");
    }

    #[test]
    fn should_reject_blank_command_id() {
        assert_eq!(
            CommandId::new("   "),
            Err(ValidationError::EmptyId { kind: "command id" })
        );
    }

    #[test]
    fn should_expose_sensor_element_with_same_id() {
        let id = SensorId::new("temp3").unwrap();
        assert_eq!(id.element().as_str(), "temp3");
    }

    #[test]
    fn should_reject_invalid_id_when_deserializing() {
        let result: Result<PanelId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());

        let panel: PanelId = serde_json::from_str("\"tv_menu\"").unwrap();
        assert_eq!(panel.as_str(), "tv_menu");
    }
}
