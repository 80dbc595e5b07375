//! Wire protocol message types.
//!
//! This module defines the message format for communication between the
//! client (this crate) and the serial bridge service.
//!
//! # Protocol Overview
//!
//! | Message Type | Direction | Purpose |
//! |--------------|-----------|---------|
//! | [`Command`] | Client → Bridge | Session and device commands |
//! | [`InboundEvent`] | Bridge → Client | Device output, errors, samples |
//!
//! Every message is one JSON object per WebSocket text frame.
//!
//! # Command Envelope
//!
//! All outbound frames share a single `command` field. Structured verbs use
//! fixed uppercase names; free-text device commands are sent verbatim in the
//! same field:
//!
//! - `{"command":"CONNECT","port":"/dev/ttyUSB0","baudrate":9600,"databits":"8","parity":"none"}`
//! - `{"command":"DISCONNECT"}` / `{"command":"START"}` / `{"command":"STOP"}`
//! - `{"command":"AT+VERSION?"}`
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `command` | Outbound command encoding |
//! | `event` | Inbound event decoding |
//! | `oneshot` | HTTP one-shot request/response shapes |

// ============================================================================
// Submodules
// ============================================================================

/// Outbound command encoding.
pub mod command;

/// Inbound event decoding.
pub mod event;

/// HTTP one-shot request/response shapes.
pub mod oneshot;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::Command;
pub use event::{InboundEvent, decode_frame};
pub use oneshot::{OneShotReply, OneShotRequest};
