//! Session and bridge configuration.
//!
//! [`SessionConfig`] is the immutable serial-port snapshot captured when a
//! session connects; changing any field requires a new connection.
//! [`BridgeOptions`] configures how the bridge endpoint itself is reached.
//!
//! # Example
//!
//! ```ignore
//! use serial_bridge::{DataBits, Parity, SessionConfig};
//!
//! let config = SessionConfig::new("/dev/ttyUSB0", 9600)
//!     .with_data_bits(DataBits::Eight)
//!     .with_parity(Parity::None);
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

// ============================================================================
// Constants
// ============================================================================

/// Default serial port when none is supplied.
pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";

/// Default baudrate when none is supplied.
pub const DEFAULT_BAUDRATE: u32 = 9600;

/// Canonical WebSocket endpoint path on the serving host.
pub const DEFAULT_ENDPOINT_PATH: &str = "/serial-terminal/ws";

/// Default timeout for opening the transport.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// DataBits
// ============================================================================

/// Number of data bits per serial character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataBits {
    /// Seven data bits.
    #[serde(rename = "7")]
    Seven,
    /// Eight data bits (default).
    #[default]
    #[serde(rename = "8")]
    Eight,
}

impl DataBits {
    /// Returns the numeric wire value.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Seven => 7,
            Self::Eight => 8,
        }
    }
}

// ============================================================================
// Parity
// ============================================================================

/// Serial parity mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    /// No parity bit (default).
    #[default]
    None,
    /// Even parity.
    Even,
    /// Odd parity.
    Odd,
}

impl Parity {
    /// Returns the wire value.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

// ============================================================================
// SessionConfig
// ============================================================================

/// Serial-port parameters for one session.
///
/// Captured as an immutable snapshot at connect time; the controller never
/// mutates it mid-session. To change any field, disconnect and connect again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Serial device path, e.g. `/dev/ttyUSB0`.
    pub port: String,

    /// Baudrate, e.g. `9600`.
    pub baudrate: u32,

    /// Data bits per character.
    #[serde(rename = "databits", default)]
    pub data_bits: DataBits,

    /// Parity mode.
    #[serde(default)]
    pub parity: Parity,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PORT, DEFAULT_BAUDRATE)
    }
}

impl SessionConfig {
    /// Creates a config with the given port and baudrate.
    ///
    /// Data bits default to eight, parity to none.
    #[inline]
    #[must_use]
    pub fn new(port: impl Into<String>, baudrate: u32) -> Self {
        Self {
            port: port.into(),
            baudrate,
            data_bits: DataBits::default(),
            parity: Parity::default(),
        }
    }

    /// Sets the data bits.
    #[inline]
    #[must_use]
    pub fn with_data_bits(mut self, data_bits: DataBits) -> Self {
        self.data_bits = data_bits;
        self
    }

    /// Sets the parity mode.
    #[inline]
    #[must_use]
    pub fn with_parity(mut self, parity: Parity) -> Self {
        self.parity = parity;
        self
    }
}

// ============================================================================
// BridgeOptions
// ============================================================================

/// Options for reaching the bridge endpoint.
///
/// The endpoint is a full WebSocket URL; the serving host and path vary by
/// deployment, so both are configurable. [`DEFAULT_ENDPOINT_PATH`] is the
/// canonical path.
#[derive(Debug, Clone)]
pub struct BridgeOptions {
    /// Full WebSocket endpoint URL, e.g. `ws://localhost:8888/serial-terminal/ws`.
    pub endpoint: Url,

    /// Maximum time to wait for the transport to open.
    pub connect_timeout: Duration,
}

impl BridgeOptions {
    /// Creates options for the given endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Endpoint`](crate::Error::Endpoint) if the URL is
    /// not parseable.
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            endpoint: Url::parse(endpoint.as_ref())?,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        })
    }

    /// Creates options pointing at the canonical path on the given host.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Endpoint`](crate::Error::Endpoint) if the host does
    /// not form a valid URL.
    pub fn for_host(host: impl AsRef<str>) -> Result<Self> {
        Self::new(format!("ws://{}{}", host.as_ref(), DEFAULT_ENDPOINT_PATH))
    }

    /// Sets the connect timeout.
    #[inline]
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.port, "/dev/ttyUSB0");
        assert_eq!(config.baudrate, 9600);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
    }

    #[test]
    fn test_config_builder() {
        let config = SessionConfig::new("/dev/ttyACM1", 115_200)
            .with_data_bits(DataBits::Seven)
            .with_parity(Parity::Even);

        assert_eq!(config.port, "/dev/ttyACM1");
        assert_eq!(config.baudrate, 115_200);
        assert_eq!(config.data_bits, DataBits::Seven);
        assert_eq!(config.parity, Parity::Even);
    }

    #[test]
    fn test_data_bits_values() {
        assert_eq!(DataBits::Seven.as_u8(), 7);
        assert_eq!(DataBits::Eight.as_u8(), 8);
    }

    #[test]
    fn test_parity_values() {
        assert_eq!(Parity::None.as_str(), "none");
        assert_eq!(Parity::Even.as_str(), "even");
        assert_eq!(Parity::Odd.as_str(), "odd");
    }

    #[test]
    fn test_options_for_host() {
        let options = BridgeOptions::for_host("localhost:8888").expect("valid host");
        assert_eq!(
            options.endpoint.as_str(),
            "ws://localhost:8888/serial-terminal/ws"
        );
        assert_eq!(options.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
    }

    #[test]
    fn test_options_with_timeout() {
        let options = BridgeOptions::new("ws://127.0.0.1:9000/debug-terminal/ws")
            .expect("valid url")
            .with_connect_timeout(Duration::from_secs(3));
        assert_eq!(options.connect_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_options_invalid_endpoint() {
        let result = BridgeOptions::new("not a url");
        assert!(result.is_err());
    }
}
