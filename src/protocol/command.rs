//! Outbound command encoding.
//!
//! Commands are produced by session operations and serialized into single
//! JSON text frames. See the [module docs](crate::protocol) for the envelope.

// ============================================================================
// Imports
// ============================================================================

use serde_json::json;

use crate::config::SessionConfig;
use crate::error::Result;

// ============================================================================
// Command
// ============================================================================

/// An outbound command from the client to the bridge.
///
/// Structured verbs carry fixed uppercase names on the wire; [`Command::Raw`]
/// carries free device text in the same `command` field.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Open the serial port described by the config.
    Connect(SessionConfig),

    /// Close the serial port.
    Disconnect,

    /// Begin periodic sample acquisition.
    Start,

    /// End periodic sample acquisition.
    Stop,

    /// Free-text command passed through to the device.
    Raw {
        /// Command text, already validated non-empty.
        text: String,
    },
}

impl Command {
    /// Returns the wire verb for logging purposes.
    ///
    /// For [`Command::Raw`] this is the command text itself.
    #[inline]
    #[must_use]
    pub fn verb(&self) -> &str {
        match self {
            Self::Connect(_) => "CONNECT",
            Self::Disconnect => "DISCONNECT",
            Self::Start => "START",
            Self::Stop => "STOP",
            Self::Raw { text } => text,
        }
    }

    /// Encodes this command into one JSON text frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
    pub fn encode(&self) -> Result<String> {
        let value = match self {
            Self::Connect(config) => json!({
                "command": "CONNECT",
                "port": config.port,
                "baudrate": config.baudrate,
                "databits": config.data_bits,
                "parity": config.parity,
            }),
            Self::Disconnect => json!({ "command": "DISCONNECT" }),
            Self::Start => json!({ "command": "START" }),
            Self::Stop => json!({ "command": "STOP" }),
            Self::Raw { text } => json!({ "command": text }),
        };

        Ok(serde_json::to_string(&value)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DataBits, Parity};

    #[test]
    fn test_encode_connect() {
        let config = SessionConfig::new("/dev/ttyUSB0", 9600)
            .with_data_bits(DataBits::Eight)
            .with_parity(Parity::None);
        let frame = Command::Connect(config).encode().expect("encode");
        let value: serde_json::Value = serde_json::from_str(&frame).expect("valid json");

        assert_eq!(value["command"], "CONNECT");
        assert_eq!(value["port"], "/dev/ttyUSB0");
        assert_eq!(value["baudrate"], 9600);
        assert_eq!(value["databits"], "8");
        assert_eq!(value["parity"], "none");
    }

    #[test]
    fn test_encode_connect_round_trip() {
        let config = SessionConfig::new("/dev/ttyUSB0", 9600);
        let frame = Command::Connect(config.clone()).encode().expect("encode");

        // A peer decoding by the documented convention reconstructs the
        // same four fields.
        let decoded: SessionConfig = serde_json::from_str(&frame).expect("decode");
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_encode_bare_verbs() {
        assert_eq!(
            Command::Disconnect.encode().expect("encode"),
            r#"{"command":"DISCONNECT"}"#
        );
        assert_eq!(
            Command::Start.encode().expect("encode"),
            r#"{"command":"START"}"#
        );
        assert_eq!(
            Command::Stop.encode().expect("encode"),
            r#"{"command":"STOP"}"#
        );
    }

    #[test]
    fn test_encode_raw_shares_command_field() {
        let cmd = Command::Raw {
            text: "AT+VERSION?".to_string(),
        };
        assert_eq!(
            cmd.encode().expect("encode"),
            r#"{"command":"AT+VERSION?"}"#
        );
    }

    #[test]
    fn test_verb() {
        assert_eq!(Command::Connect(SessionConfig::default()).verb(), "CONNECT");
        assert_eq!(Command::Stop.verb(), "STOP");
        let raw = Command::Raw {
            text: "reset".to_string(),
        };
        assert_eq!(raw.verb(), "reset");
    }
}
