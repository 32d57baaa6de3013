//! Reply to a sensor-data request.

use serde::{Deserialize, Serialize};

use crate::time::{format_timestamp, parse_timestamp};

/// Latest temperature/humidity sample of one sensor.
///
/// A missing or `null` temperature means the sensor is offline or has not
/// reported yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Degrees Celsius.
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Relative humidity in percent.
    #[serde(default)]
    pub humidity: Option<f64>,
    /// When the sample was taken, as the backend serialized it.
    #[serde(default)]
    pub datetime: Option<String>,
}

impl SensorReading {
    /// Text written into the sensor's element, or `None` when there is no
    /// temperature to show.
    ///
    /// Numbers keep their shortest form: `18.25` and `37` give
    /// `"18.25°C 37%"`.
    #[must_use]
    pub fn display_text(&self) -> Option<String> {
        let temperature = self.temperature?;
        Some(match self.humidity {
            Some(humidity) => format!("{temperature}°C {humidity}%"),
            None => format!("{temperature}°C"),
        })
    }

    /// Tooltip describing when the sample was taken, if the timestamp parses.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        let ts = parse_timestamp(self.datetime.as_deref()?)?;
        Some(format!("Data from {}", format_timestamp(&ts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::Reply;

    fn reading(temperature: Option<f64>, humidity: Option<f64>) -> SensorReading {
        SensorReading {
            temperature,
            humidity,
            datetime: None,
        }
    }

    #[test]
    fn should_render_temperature_and_humidity() {
        let text = reading(Some(18.25), Some(37.0)).display_text();
        assert_eq!(text.as_deref(), Some("18.25°C 37%"));
    }

    #[test]
    fn should_render_negative_and_fractional_values() {
        let text = reading(Some(-2.5), Some(40.5)).display_text();
        assert_eq!(text.as_deref(), Some("-2.5°C 40.5%"));
    }

    #[test]
    fn should_render_nothing_when_temperature_is_missing() {
        assert!(reading(None, Some(40.0)).display_text().is_none());
    }

    #[test]
    fn should_omit_humidity_when_missing() {
        let text = reading(Some(21.0), None).display_text();
        assert_eq!(text.as_deref(), Some("21°C"));
    }

    #[test]
    fn should_build_title_from_datetime() {
        let mut r = reading(Some(21.0), Some(50.0));
        r.datetime = Some("2016-08-21T09:05:03".to_string());
        assert_eq!(r.title().as_deref(), Some("Data from 2016/08/21 09:05:03"));
    }

    #[test]
    fn should_skip_title_when_datetime_is_garbage() {
        let mut r = reading(Some(21.0), Some(50.0));
        r.datetime = Some("n/a".to_string());
        assert!(r.title().is_none());
    }

    #[test]
    fn should_decode_null_temperature_as_offline() {
        let reply: Reply<SensorReading> =
            Reply::from_json(r#"{"temperature": null, "humidity": null}"#).unwrap();
        assert_eq!(reply, Reply::Payload(SensorReading::default()));
    }

    #[test]
    fn should_decode_empty_object_as_offline() {
        let reply: Reply<SensorReading> = Reply::from_json("{}").unwrap();
        assert_eq!(reply, Reply::Payload(SensorReading::default()));
    }
}
