//! Display sinks for decoded inbound events.
//!
//! A sink is a presentation-state consumer: it accepts zero or more
//! [`InboundEvent`] kinds and updates its own state, nothing else. Sinks
//! never touch the transport and never mutate session state.
//!
//! Events are fanned out: every attached sink sees every event, in
//! transport-delivery order. A sample event delivered while both a chart and
//! a readout are attached updates both.
//!
//! # Sinks
//!
//! | Sink | Consumes | State |
//! |------|----------|-------|
//! | [`LogSink`] | `Log`, `Error`, `Malformed` | append-only line buffer |
//! | [`ChartSink`] | `Sample` | ordered `(timestamp, voltage)` series |
//! | [`ReadoutSink`] | `Sample` | single latest-voltage cell |
//!
//! # Example
//!
//! ```ignore
//! use serial_bridge::{LogSink, SessionController};
//!
//! let session = SessionController::new(options);
//! let log = LogSink::shared();
//! session.attach_sink(log.clone());
//! // ... later, from the UI layer:
//! for line in log.lock().lines() {
//!     println!("{line}");
//! }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use parking_lot::Mutex;

use crate::protocol::InboundEvent;

// ============================================================================
// Submodules
// ============================================================================

/// Scrolling log sink.
pub mod log;

/// Time-series chart sink.
pub mod chart;

/// Latest-value readout sink.
pub mod readout;

// ============================================================================
// Re-exports
// ============================================================================

pub use chart::ChartSink;
pub use log::LogSink;
pub use readout::ReadoutSink;

// ============================================================================
// EventSink
// ============================================================================

/// A consumer of decoded inbound events.
///
/// Implementations update their own presentation state and must not have
/// side effects beyond it.
pub trait EventSink: Send {
    /// Handles one decoded event.
    ///
    /// Called once per inbound frame, in delivery order. Events the sink
    /// does not care about are simply ignored.
    fn handle(&mut self, event: &InboundEvent);
}

/// A sink handle shared between the session controller and the host UI.
///
/// The controller holds one clone for dispatch; the host keeps another to
/// read the sink's presentation state.
pub type SharedSink = Arc<Mutex<dyn EventSink>>;

// ============================================================================
// Tests
// ============================================================================
