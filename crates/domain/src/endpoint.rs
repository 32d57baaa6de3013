//! Backend endpoints the dashboard talks to.

use std::fmt::Write as _;

use crate::id::{CommandId, SensorId};

/// A GET request target, relative to the application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Absolute path below the root, starting with `/`.
    pub path: String,
    /// Query parameters, in order.
    pub query: Vec<(String, String)>,
}

impl Endpoint {
    /// `GET /command?command=<id>`.
    #[must_use]
    pub fn command(command: &CommandId) -> Self {
        Self {
            path: "/command".to_string(),
            query: vec![("command".to_string(), command.as_str().to_string())],
        }
    }

    /// `GET /data/{key}` where `key` is the sensor id minus its prefix.
    #[must_use]
    pub fn sensor_data(sensor: &SensorId) -> Self {
        Self {
            path: format!("/data/{}", encode_path_segment(sensor.data_key())),
            query: Vec::new(),
        }
    }

    /// Render the full URL below `root`.
    ///
    /// A trailing `/` on `root` is dropped so the result never contains `//`
    /// between root and path.
    #[must_use]
    pub fn url(&self, root: &str) -> String {
        let mut url = join_root(root, &self.path);
        for (idx, (key, value)) in self.query.iter().enumerate() {
            url.push(if idx == 0 { '?' } else { '&' });
            let _ = write!(url, "{}={}", encode_query_value(key), encode_query_value(value));
        }
        url
    }
}

/// Join an application root and a path that starts with `/`.
#[must_use]
pub fn join_root(root: &str, path: &str) -> String {
    let root = root.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{root}/{path}")
}

/// Percent-encode a query parameter value (handles `+`, `&`, `=`, spaces, etc.).
fn encode_query_value(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('+', "%2B")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace('#', "%23")
        .replace(' ', "%20")
}

fn encode_path_segment(value: &str) -> String {
    encode_query_value(value)
        .replace('/', "%2F")
        .replace('?', "%3F")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_command_url_with_encoded_id() {
        let command = CommandId::new("living light1 on").unwrap();
        let url = Endpoint::command(&command).url("");
        assert_eq!(url, "/command?command=living%20light1%20on");
    }

    #[test]
    fn should_render_sensor_url_from_data_key() {
        let sensor = SensorId::new("temp2").unwrap();
        assert_eq!(Endpoint::sensor_data(&sensor).url(""), "/data/2");
    }

    #[test]
    fn should_not_double_slash_when_root_has_trailing_slash() {
        let sensor = SensorId::new("temp2").unwrap();
        let endpoint = Endpoint::sensor_data(&sensor);
        assert_eq!(endpoint.url("/ammcon/"), "/ammcon/data/2");
        assert_eq!(endpoint.url("/ammcon"), "/ammcon/data/2");
        assert_eq!(
            endpoint.url("https://home.example"),
            "https://home.example/data/2"
        );
    }

    #[test]
    fn should_escape_reserved_characters_in_query() {
        let command = CommandId::new("a&b=c+d").unwrap();
        let url = Endpoint::command(&command).url("");
        assert_eq!(url, "/command?command=a%26b%3Dc%2Bd");
    }

    #[test]
    fn should_join_layout_asset_below_root() {
        assert_eq!(join_root("", "static/layout.svg"), "/static/layout.svg");
        assert_eq!(join_root("/app/", "/static/layout.svg"), "/app/static/layout.svg");
    }
}
