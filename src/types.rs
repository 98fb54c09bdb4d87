//! JSON response shapes emitted by the HTTP service.
//!
//! These are the wire contract shared by the server handlers and the client.
//! Every value is built fresh per request and never mutated.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Message returned by `GET /hello`.
pub const GREETING_MESSAGE: &str = "Hello BHVR!";

/// Plain-text body returned by `GET /`.
pub const ROOT_TEXT: &str = "Hello Hono!";

/// Constant status value used by the liveness and smoke-test routes.
pub const STATUS_OK: &str = "ok";

/// A boolean that can only ever be `true` on the wire.
///
/// Deserializing `false` (or anything that is not a boolean) is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct True;

impl Serialize for True {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for True {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match bool::deserialize(deserializer)? {
            true => Ok(True),
            false => Err(de::Error::invalid_value(
                de::Unexpected::Bool(false),
                &"the literal `true`",
            )),
        }
    }
}

impl fmt::Display for True {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("true")
    }
}

/// `GET /hello` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    /// Greeting text.
    pub message: String,
    /// Always `true`.
    pub success: True,
}

impl GreetingResponse {
    /// The fixed greeting served by `/hello`.
    pub fn hello() -> Self {
        Self {
            message: GREETING_MESSAGE.to_string(),
            success: True,
        }
    }
}

/// `GET /api/hello` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /version` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResponse {
    /// Service version.
    pub version: String,
    /// Service name.
    pub name: String,
}

/// `GET /health` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK.to_string(),
        }
    }
}

/// `GET /test` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResponse {
    pub test: String,
}

impl TestResponse {
    pub fn ok() -> Self {
        Self {
            test: STATUS_OK.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn greeting_serializes_success_as_literal_true() {
        let value = serde_json::to_value(GreetingResponse::hello()).unwrap();
        assert_eq!(value, json!({ "message": "Hello BHVR!", "success": true }));
    }

    #[test]
    fn greeting_rejects_false_success() {
        let result: Result<GreetingResponse, _> =
            serde_json::from_str(r#"{"message":"hi","success":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn greeting_accepts_true_success() {
        let parsed: GreetingResponse =
            serde_json::from_str(r#"{"message":"hi","success":true}"#).unwrap();
        assert_eq!(parsed.message, "hi");
        assert_eq!(parsed.success.to_string(), "true");
    }

    #[test]
    fn status_shapes_match_wire_contract() {
        assert_eq!(
            serde_json::to_value(HealthResponse::ok()).unwrap(),
            json!({ "status": "ok" })
        );
        assert_eq!(
            serde_json::to_value(TestResponse::ok()).unwrap(),
            json!({ "test": "ok" })
        );
    }
}
