//! Error types for the serial bridge client.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use serial_bridge::{Result, SessionController};
//!
//! fn example(session: &SessionController) -> Result<()> {
//!     session.send_command("AT+VERSION?")?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Transport | [`Error::Transport`], [`Error::ConnectTimeout`], [`Error::ConnectionClosed`] |
//! | Caller | [`Error::Precondition`], [`Error::Validation`] |
//! | External | [`Error::Json`], [`Error::WebSocket`], [`Error::Endpoint`] |
//!
//! # Propagation Policy
//!
//! Transport and protocol failures that occur after a session is live are
//! absorbed by the [`SessionController`](crate::SessionController) and routed
//! to sinks as [`InboundEvent::Error`](crate::InboundEvent) or
//! [`InboundEvent::Malformed`](crate::InboundEvent) — they never cross the
//! controller boundary. Precondition and validation failures are returned
//! synchronously to the caller and never touch the transport.

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;
use tokio_tungstenite::tungstenite::Error as WsError;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes relevant context for debugging.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// Transport open, send or receive failure.
    ///
    /// Returned when the WebSocket connection cannot be established or used.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport error.
        message: String,
    },

    /// Timeout while opening the transport.
    ///
    /// Returned when the bridge endpoint does not accept within the
    /// configured connect timeout.
    #[error("Connect timeout after {timeout_ms}ms")]
    ConnectTimeout {
        /// Milliseconds waited before timeout.
        timeout_ms: u64,
    },

    /// Transport closed while an operation was in flight.
    #[error("Connection closed")]
    ConnectionClosed,

    // ========================================================================
    // Caller Errors
    // ========================================================================
    /// Operation invoked in an invalid session state.
    ///
    /// Returned synchronously, e.g. for `start()` while disconnected.
    #[error("Precondition failed: {message}")]
    Precondition {
        /// Description of the violated precondition.
        message: String,
    },

    /// Invalid caller-supplied input.
    ///
    /// Returned synchronously, e.g. for an empty command string.
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the invalid input.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// WebSocket error.
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] WsError),

    /// Invalid bridge endpoint URL.
    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a transport error.
    #[inline]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a connect timeout error.
    #[inline]
    pub fn connect_timeout(timeout_ms: u64) -> Self {
        Self::ConnectTimeout { timeout_ms }
    }

    /// Creates a precondition error.
    #[inline]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    #[inline]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a transport-level error.
    #[inline]
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. }
                | Self::ConnectTimeout { .. }
                | Self::ConnectionClosed
                | Self::WebSocket(_)
        )
    }

    /// Returns `true` if this is a precondition failure.
    #[inline]
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition { .. })
    }

    /// Returns `true` if this is a validation failure.
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns `true` if the caller can fix this error without a new session.
    ///
    /// Precondition and validation failures are caller mistakes; the session
    /// itself remains usable.
    #[inline]
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        self.is_precondition() || self.is_validation()
    }
}

// ============================================================================
// Tests
// ============================================================================
