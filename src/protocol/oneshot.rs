//! HTTP one-shot request/response shapes.
//!
//! The bridge also exposes a single HTTP POST at a `serial-port` resource
//! for fire-and-forget commands outside any WebSocket session. The HTTP
//! client itself is the host application's concern; this module only defines
//! the documented body shapes so callers can build and parse them.
//!
//! # Wire Format
//!
//! Request body: `{"port":"/dev/ttyUSB0","baudrate":9600,"command":"ping"}`
//!
//! Reply body: `{"response":"pong"}` on success, `{"error":"..."}` on failure.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

// ============================================================================
// OneShotRequest
// ============================================================================

/// Body of a one-shot serial command POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneShotRequest {
    /// Serial device path.
    pub port: String,

    /// Baudrate.
    pub baudrate: u32,

    /// Command text to write to the device.
    pub command: String,
}

impl OneShotRequest {
    /// Creates a new one-shot request.
    #[inline]
    #[must_use]
    pub fn new(port: impl Into<String>, baudrate: u32, command: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            baudrate,
            command: command.into(),
        }
    }
}

// ============================================================================
// OneShotReply
// ============================================================================

/// Body of a one-shot serial command reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneShotReply {
    /// Successful reply with the device response text.
    Response {
        /// Text read back from the device.
        response: String,
    },

    /// Failed reply with the error description.
    Error {
        /// Error text.
        error: String,
    },
}

impl OneShotReply {
    /// Returns `true` if this is a successful reply.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Response { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = OneShotRequest::new("/dev/ttyUSB0", 9600, "ping");
        let json = serde_json::to_string(&request).expect("serialize");
        assert_eq!(
            json,
            r#"{"port":"/dev/ttyUSB0","baudrate":9600,"command":"ping"}"#
        );
    }

    #[test]
    fn test_reply_success() {
        let reply: OneShotReply =
            serde_json::from_str(r#"{"response":"pong"}"#).expect("parse");
        assert!(reply.is_success());
        assert_eq!(
            reply,
            OneShotReply::Response {
                response: "pong".to_string()
            }
        );
    }

    #[test]
    fn test_reply_error() {
        let reply: OneShotReply =
            serde_json::from_str(r#"{"error":"could not open port"}"#).expect("parse");
        assert!(!reply.is_success());
    }
}
