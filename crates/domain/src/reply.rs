//! The envelope every backend endpoint replies with.
//!
//! Any endpoint may answer `{"redirect": "<url>"}` instead of its payload
//! when the session is no longer valid. The redirect wins over every other
//! field of the body.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DecodeError;

/// A decoded backend reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// Session invalid; the client must navigate to this URL.
    Redirect(String),
    /// Regular payload.
    Payload(T),
}

impl<T: DeserializeOwned> Reply<T> {
    /// Decode a reply body.
    ///
    /// A `redirect` field that is missing, `null`, or an empty string does
    /// not count as a redirect.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] if the body is not JSON, or
    /// [`DecodeError::Payload`] if it is neither a redirect nor a `T`.
    pub fn from_json(body: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(body).map_err(DecodeError::Json)?;
        if let Some(url) = value
            .get("redirect")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
        {
            return Ok(Self::Redirect(url.to_string()));
        }
        serde_json::from_value(value)
            .map(Self::Payload)
            .map_err(DecodeError::Payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Payload {
        value: u32,
    }

    #[test]
    fn should_prefer_redirect_over_payload_fields() {
        let reply = Reply::<Payload>::from_json(r#"{"redirect": "/login", "value": 3}"#).unwrap();
        assert_eq!(reply, Reply::Redirect("/login".to_string()));
    }

    #[test]
    fn should_decode_redirect_even_when_payload_is_incomplete() {
        let reply = Reply::<Payload>::from_json(r#"{"redirect": "/login"}"#).unwrap();
        assert_eq!(reply, Reply::Redirect("/login".to_string()));
    }

    #[test]
    fn should_ignore_null_or_empty_redirect() {
        let reply = Reply::<Payload>::from_json(r#"{"redirect": null, "value": 1}"#).unwrap();
        assert_eq!(reply, Reply::Payload(Payload { value: 1 }));

        let reply = Reply::<Payload>::from_json(r#"{"redirect": "", "value": 2}"#).unwrap();
        assert_eq!(reply, Reply::Payload(Payload { value: 2 }));
    }

    #[test]
    fn should_fail_with_json_error_when_body_is_not_json() {
        let result = Reply::<Payload>::from_json("<html>502</html>");
        assert!(matches!(result, Err(DecodeError::Json(_))));
    }

    #[test]
    fn should_fail_with_payload_error_when_shape_mismatches() {
        let result = Reply::<Payload>::from_json(r#"{"other": true}"#);
        assert!(matches!(result, Err(DecodeError::Payload(_))));
    }
}
