//! Serial Bridge - async client for a WebSocket-backed serial port bridge.
//!
//! This library manages a single serial monitor session against a bridge
//! service: connect/disconnect lifecycle, acquisition start/stop, raw device
//! commands, and decoding of inbound frames fanned out to display sinks.
//!
//! # Architecture
//!
//! The client follows a session model:
//!
//! - **Session Controller**: owns the WebSocket transport and all session
//!   state; the only component that opens, writes to, or closes it
//! - **Protocol**: one JSON object per text frame, single `command` envelope
//!   outbound, tagged event union inbound
//! - **Display Sinks**: presentation-state consumers (log, chart, readout)
//!   that see every decoded event, in delivery order
//!
//! Key design principles:
//!
//! - At most one live transport per controller; concurrent connects are
//!   rejected, not raced
//! - Inbound frames are processed one to completion before the next
//! - Transport failures surface as sink events, never as panics or
//!   cross-boundary errors; malformed frames are logged and non-fatal
//!
//! # Quick Start
//!
//! ```no_run
//! use serial_bridge::{
//!     BridgeOptions, ChartSink, LogSink, SessionConfig, SessionController,
//! };
//!
//! #[tokio::main]
//! async fn main() -> serial_bridge::Result<()> {
//!     let options = BridgeOptions::for_host("localhost:8888")?;
//!     let session = SessionController::new(options);
//!
//!     let log = LogSink::shared();
//!     let chart = ChartSink::shared();
//!     session.attach_sink(log.clone());
//!     session.attach_sink(chart.clone());
//!
//!     session.connect(SessionConfig::new("/dev/ttyUSB0", 9600)).await?;
//!     session.start()?;
//!     // ... samples accumulate in the chart sink ...
//!     session.stop()?;
//!     session.disconnect()?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Session snapshot and bridge endpoint options |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`protocol`] | Wire frame types (internal) |
//! | [`session`] | Session state machine |
//! | [`sink`] | Display sinks: [`LogSink`], [`ChartSink`], [`ReadoutSink`] |
//! | [`transport`] | WebSocket transport layer (internal) |

// ============================================================================
// Modules
// ============================================================================

/// Session snapshot and bridge endpoint options.
pub mod config;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Wire frame types.
///
/// Internal module defining command encoding and event decoding.
pub mod protocol;

/// Session state machine.
///
/// Use [`SessionController::new`] to create a session.
pub mod session;

/// Display sinks for decoded inbound events.
pub mod sink;

/// WebSocket transport layer.
///
/// Internal module handling the connection event loop.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Configuration types
pub use config::{BridgeOptions, DataBits, Parity, SessionConfig};

// Error types
pub use error::{Error, Result};

// Protocol types
pub use protocol::{Command, InboundEvent, OneShotReply, OneShotRequest};

// Session types
pub use session::{AcquisitionState, ConnectionState, SessionController};

// Sink types
pub use sink::{ChartSink, EventSink, LogSink, ReadoutSink, SharedSink};
