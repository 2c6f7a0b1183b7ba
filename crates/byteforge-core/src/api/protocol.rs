//! Wire format of the contact endpoint
//!
//! Requests are a JSON [`ContactRequest`](crate::contact::ContactRequest).
//! Responses are `{"ok": true}` on success or `{"error": "..."}` with a
//! non-2xx status.

use serde::{Deserialize, Serialize};

pub const CONTACT_PATH: &str = "/api/contact";
pub const HEALTH_PATH: &str = "/health";

/// JSON body returned by the contact endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactReply {
    pub fn ok() -> Self {
        Self {
            ok: Some(true),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: None,
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.ok == Some(true) && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_shape() {
        let json = serde_json::to_string(&ContactReply::ok()).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }

    #[test]
    fn test_error_shape() {
        let json = serde_json::to_string(&ContactReply::error("Missing required fields: name")).unwrap();
        assert_eq!(json, r#"{"error":"Missing required fields: name"}"#);
        assert!(!ContactReply::error("x").is_success());
    }
}
