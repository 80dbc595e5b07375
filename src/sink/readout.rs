//! Latest-value readout sink.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use parking_lot::Mutex;

use crate::protocol::InboundEvent;

use super::EventSink;

// ============================================================================
// ReadoutSink
// ============================================================================

/// A single "latest voltage" cell.
///
/// Overwrites its value on every `Sample` event; ignores every other kind.
#[derive(Debug, Default)]
pub struct ReadoutSink {
    /// Most recent voltage, if any sample has arrived.
    latest: Option<f64>,
}

impl ReadoutSink {
    /// Creates an empty readout sink.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty readout sink behind a shared handle.
    #[inline]
    #[must_use]
    pub fn shared() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Returns the latest voltage, if any sample has arrived.
    #[inline]
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.latest
    }

    /// Returns the latest voltage formatted to two decimal places.
    #[inline]
    #[must_use]
    pub fn formatted(&self) -> Option<String> {
        self.latest.map(|v| format!("{v:.2}"))
    }
}

impl EventSink for ReadoutSink {
    fn handle(&mut self, event: &InboundEvent) {
        if let InboundEvent::Sample { voltage, .. } = event {
            self.latest = Some(*voltage);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
