//! WebSocket transport layer.
//!
//! This module handles the full-duplex text-frame connection between the
//! client and the serial bridge endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┐                         ┌─────────────────┐
//! │ SessionController  │        WebSocket        │  Serial Bridge  │
//! │                    │◄───────────────────────►│  (server side)  │
//! │  Connection        │   ws://host/.../ws      │                 │
//! └────────────────────┘                         └─────────────────┘
//! ```
//!
//! # Connection Lifecycle
//!
//! 1. [`Connection::open`] - Dial the endpoint with a bounded timeout
//! 2. Event loop task forwards inbound text frames to the frame callback
//! 3. [`Connection::send`] - Fire-and-forget outbound frames
//! 4. [`Connection::shutdown`] - Close frame sent, loop terminated
//! 5. Close callback fires exactly once when the loop ends, for any reason
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `connection` | WebSocket connection and event loop |

// ============================================================================
// Submodules
// ============================================================================

/// WebSocket connection and event loop.
pub mod connection;

// ============================================================================
// Re-exports
// ============================================================================

pub use connection::{CloseHandler, Connection, FrameHandler};
