//! Session layer: connection lifecycle and event routing.
//!
//! One [`SessionController`] manages one logical connect-to-disconnect
//! lifetime of the serial bridge, with exactly one transport handle.
//!
//! # Control Flow
//!
//! ```text
//! UI action ──► SessionController ──► Command::encode ──► transport send
//! transport receive ──► decode_frame ──► SessionController ──► sinks
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `state` | Connection and acquisition state |
//! | `controller` | The session state machine |

// ============================================================================
// Submodules
// ============================================================================

/// Connection and acquisition state.
pub mod state;

/// The session state machine.
pub mod controller;

// ============================================================================
// Re-exports
// ============================================================================

pub use controller::SessionController;
pub use state::{AcquisitionState, ConnectionState};
