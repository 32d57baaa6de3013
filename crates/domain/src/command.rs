//! Reply to a command request.

use serde::{Deserialize, Serialize};

/// Outcome of a backend command, e.g. toggling a light.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Backend verdict (`ACK`, `NAK`, `INVALID`, a formatted reading, …).
    pub response: String,
    /// When the backend handled the command, as the backend formatted it.
    pub time: String,
}

impl CommandResult {
    /// Text shown in the status area and the toast: `"<response>@<time>"`.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("{}@{}", self.response, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::Reply;

    #[test]
    fn should_join_response_and_time_with_at_sign() {
        let result = CommandResult {
            response: "ACK".to_string(),
            time: "2016-08-21 09:05:03".to_string(),
        };
        assert_eq!(result.status_line(), "ACK@2016-08-21 09:05:03");
    }

    #[test]
    fn should_decode_backend_body() {
        let reply: Reply<CommandResult> =
            Reply::from_json(r#"{"response": "NAK", "time": "2016-08-21 09:05:03"}"#).unwrap();
        let Reply::Payload(result) = reply else {
            panic!("expected payload");
        };
        assert_eq!(result.status_line(), "NAK@2016-08-21 09:05:03");
    }
}
