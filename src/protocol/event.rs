//! Inbound event decoding.
//!
//! Every inbound text frame is decoded into exactly one [`InboundEvent`].
//! Decoding never fails outward: unrecognized or unparseable payloads become
//! [`InboundEvent::Malformed`], which is logged but otherwise non-fatal.
//!
//! # Recognized Shapes
//!
//! In priority order:
//!
//! | Shape | Event |
//! |-------|-------|
//! | `data` string present | [`InboundEvent::Log`], or [`InboundEvent::Error`] if `error` is also present |
//! | `voltage` and `timestamp` both numeric | [`InboundEvent::Sample`] |
//! | `error` string alone | [`InboundEvent::Error`] |
//! | anything else | [`InboundEvent::Malformed`] |

// ============================================================================
// Imports
// ============================================================================

use serde_json::Value;

// ============================================================================
// InboundEvent
// ============================================================================

/// A decoded event from the bridge, immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    /// A line of device or session output.
    Log {
        /// Line text.
        text: String,
    },

    /// A reported failure (session-level or device-level).
    Error {
        /// Error text.
        text: String,
    },

    /// One acquired voltage sample.
    Sample {
        /// Measured voltage.
        voltage: f64,
        /// Sample timestamp as delivered by the peer (milliseconds).
        timestamp: f64,
    },

    /// A frame that did not match any recognized shape.
    Malformed {
        /// The raw frame text.
        raw: String,
    },
}

impl InboundEvent {
    /// Creates a log event.
    #[inline]
    #[must_use]
    pub fn log(text: impl Into<String>) -> Self {
        Self::Log { text: text.into() }
    }

    /// Creates an error event.
    #[inline]
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::Error { text: text.into() }
    }

    /// Creates a sample event.
    #[inline]
    #[must_use]
    pub const fn sample(voltage: f64, timestamp: f64) -> Self {
        Self::Sample { voltage, timestamp }
    }

    /// Returns `true` if this is a sample event.
    #[inline]
    #[must_use]
    pub fn is_sample(&self) -> bool {
        matches!(self, Self::Sample { .. })
    }

    /// Returns `true` if this is a malformed-frame event.
    #[inline]
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Decodes one raw inbound frame into an [`InboundEvent`].
///
/// Never fails: anything that does not match a recognized shape is returned
/// as [`InboundEvent::Malformed`] carrying the raw text.
#[must_use]
pub fn decode_frame(raw: &str) -> InboundEvent {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return InboundEvent::Malformed {
            raw: raw.to_string(),
        };
    };

    let error = value.get("error").and_then(Value::as_str);

    if let Some(data) = value.get("data").and_then(Value::as_str) {
        return match error {
            Some(text) => InboundEvent::error(text),
            None => InboundEvent::log(data),
        };
    }

    let voltage = value.get("voltage").and_then(Value::as_f64);
    let timestamp = value.get("timestamp").and_then(Value::as_f64);
    if let (Some(voltage), Some(timestamp)) = (voltage, timestamp) {
        return InboundEvent::sample(voltage, timestamp);
    }

    if let Some(text) = error {
        return InboundEvent::error(text);
    }

    InboundEvent::Malformed {
        raw: raw.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
