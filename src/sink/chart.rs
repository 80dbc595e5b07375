//! Time-series chart sink.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use parking_lot::Mutex;

use crate::protocol::InboundEvent;

use super::EventSink;

// ============================================================================
// ChartSink
// ============================================================================

/// An ordered `(timestamp, voltage)` time series.
///
/// Appends one point per `Sample` event; ignores every other kind. The
/// series is unbounded; hosts that need an eviction policy can call
/// [`clear`](Self::clear) on their own schedule.
#[derive(Debug, Default)]
pub struct ChartSink {
    /// Points in arrival order.
    points: Vec<(f64, f64)>,
}

impl ChartSink {
    /// Creates an empty chart sink.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty chart sink behind a shared handle.
    #[inline]
    #[must_use]
    pub fn shared() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Returns the accumulated points in arrival order.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Returns the number of accumulated points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drops all accumulated points.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl EventSink for ChartSink {
    fn handle(&mut self, event: &InboundEvent) {
        if let InboundEvent::Sample { voltage, timestamp } = event {
            self.points.push((*timestamp, *voltage));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
