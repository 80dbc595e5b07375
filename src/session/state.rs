//! Connection and acquisition state.
//!
//! # State Machine
//!
//! ```text
//!                connect()          transport-open
//! Disconnected ────────────► Connecting ────────────► Connected
//!      ▲                         │                        │
//!      │    transport-error      │                        │ disconnect()
//!      ◄─────────────────────────┘                        ▼
//!      │                 transport-close               Closing
//!      ◄──────────────────────────────────────────────────┘
//! ```
//!
//! Acquisition runs inside `Connected` only: `start()` flips Idle to
//! Acquiring, `stop()` flips it back. Every transition into `Disconnected`
//! forces acquisition back to Idle and releases the transport handle.

// ============================================================================
// Imports
// ============================================================================

use crate::config::SessionConfig;
use crate::transport::Connection;

// ============================================================================
// ConnectionState
// ============================================================================

/// Where the session is in its transport lifecycle.
///
/// Exactly one value at a time; transitions happen only through
/// [`SessionController`](crate::SessionController) operations and transport
/// callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// No transport; the session can be connected.
    #[default]
    Disconnected,
    /// Transport dial in flight.
    Connecting,
    /// Transport open; commands can be sent.
    Connected,
    /// Local disconnect requested; waiting for transport close.
    Closing,
}

// ============================================================================
// AcquisitionState
// ============================================================================

/// Whether the bridge is producing periodic samples.
///
/// Only meaningful while the session is [`ConnectionState::Connected`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AcquisitionState {
    /// No sample production.
    #[default]
    Idle,
    /// The bridge is streaming samples.
    Acquiring,
}

// ============================================================================
// SessionState
// ============================================================================

/// Mutable session state, guarded by one mutex in the controller.
///
/// That single lock is the per-session serialization point: no two
/// operations or transport callbacks mutate the session concurrently.
#[derive(Default)]
pub(crate) struct SessionState {
    /// Transport lifecycle position.
    pub connection: ConnectionState,

    /// Sample production state.
    pub acquisition: AcquisitionState,

    /// Config snapshot captured at connect time.
    pub config: Option<SessionConfig>,

    /// The single live transport handle, present while Connected/Closing.
    pub transport: Option<Connection>,
}

impl SessionState {
    /// Transitions into `Disconnected`, enforcing the reset invariant.
    ///
    /// Acquisition returns to Idle, the config snapshot is dropped, and the
    /// transport handle is released to the caller.
    pub fn reset_to_disconnected(&mut self) -> Option<Connection> {
        self.connection = ConnectionState::Disconnected;
        self.acquisition = AcquisitionState::Idle;
        self.config = None;
        self.transport.take()
    }

    /// Returns `true` if a transport is live or being established.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.connection != ConnectionState::Disconnected
    }
}

// ============================================================================
// Tests
// ============================================================================
