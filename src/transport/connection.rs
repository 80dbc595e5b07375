//! WebSocket connection and event loop.
//!
//! This module dials the bridge endpoint and runs the event loop that
//! shuttles text frames in both directions. The session layer owns exactly
//! one [`Connection`] at a time; sinks never touch it.
//!
//! # Event Loop
//!
//! The connection spawns a tokio task that handles:
//!
//! - Inbound text frames from the bridge (forwarded to the frame callback)
//! - Outbound frames queued by [`Connection::send`]
//! - Close / error / end-of-stream, all funneled into one close callback

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, error, trace, warn};
use url::Url;

use crate::error::{Error, Result};

// ============================================================================
// Types
// ============================================================================

/// Callback invoked for each inbound text frame.
pub type FrameHandler = Box<dyn Fn(&str) + Send + Sync>;

/// Callback invoked exactly once when the transport closes, for any reason.
pub type CloseHandler = Box<dyn FnOnce() + Send>;

/// The WebSocket stream type used by this crate.
type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

// ============================================================================
// TransportCommand
// ============================================================================

/// Internal commands for the event loop.
enum TransportCommand {
    /// Send a text frame, fire-and-forget.
    Send(String),
    /// Close the connection and stop the loop.
    Shutdown,
}

// ============================================================================
// Connection
// ============================================================================

/// A live WebSocket connection to the bridge endpoint.
///
/// Exclusively owned by the session controller. Outbound sends are
/// fire-and-forget over an unbounded channel; there is no acknowledgement
/// channel and no backpressure signal in the protocol.
///
/// # Thread Safety
///
/// `Connection` is `Send + Sync`; all operations are non-blocking.
pub struct Connection {
    /// Channel into the event loop.
    command_tx: mpsc::UnboundedSender<TransportCommand>,
}

impl Clone for Connection {
    fn clone(&self) -> Self {
        Self {
            command_tx: self.command_tx.clone(),
        }
    }
}

impl Connection {
    /// Dials the endpoint and spawns the event loop.
    ///
    /// `on_frame` is invoked for every inbound text frame, in delivery
    /// order, one frame to completion before the next. `on_close` is invoked
    /// exactly once when the loop ends — remote close, stream error, stream
    /// end, or local [`shutdown`](Self::shutdown).
    ///
    /// # Errors
    ///
    /// - [`Error::ConnectTimeout`] if the endpoint does not accept in time
    /// - [`Error::Transport`] if the dial or WebSocket upgrade fails
    pub async fn open(
        endpoint: &Url,
        connect_timeout: Duration,
        on_frame: FrameHandler,
        on_close: CloseHandler,
    ) -> Result<Self> {
        let dial = connect_async(endpoint.as_str());

        let (ws_stream, _response) = timeout(connect_timeout, dial)
            .await
            .map_err(|_| Error::connect_timeout(connect_timeout.as_millis() as u64))?
            .map_err(|e| Error::transport(e.to_string()))?;

        debug!(endpoint = %endpoint, "WebSocket connection established");

        let (command_tx, command_rx) = mpsc::unbounded_channel();

        tokio::spawn(Self::run_event_loop(
            ws_stream, command_rx, on_frame, on_close,
        ));

        Ok(Self { command_tx })
    }

    /// Queues a text frame for sending, fire-and-forget.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConnectionClosed`] if the event loop has ended.
    pub fn send(&self, frame: String) -> Result<()> {
        self.command_tx
            .send(TransportCommand::Send(frame))
            .map_err(|_| Error::ConnectionClosed)
    }

    /// Asks the event loop to close the connection and stop.
    ///
    /// The close callback fires once the loop has terminated.
    pub fn shutdown(&self) {
        let _ = self.command_tx.send(TransportCommand::Shutdown);
    }

    /// Event loop that handles WebSocket I/O.
    async fn run_event_loop(
        ws_stream: WsStream,
        mut command_rx: mpsc::UnboundedReceiver<TransportCommand>,
        on_frame: FrameHandler,
        on_close: CloseHandler,
    ) {
        let (mut ws_write, mut ws_read) = ws_stream.split();

        loop {
            tokio::select! {
                // Inbound frames from the bridge
                message = ws_read.next() => {
                    match message {
                        Some(Ok(Message::Text(text))) => {
                            trace!(len = text.len(), "Frame received");
                            on_frame(text.as_str());
                        }

                        Some(Ok(Message::Close(_))) => {
                            debug!("WebSocket closed by remote");
                            break;
                        }

                        Some(Err(e)) => {
                            error!(error = %e, "WebSocket error");
                            break;
                        }

                        None => {
                            debug!("WebSocket stream ended");
                            break;
                        }

                        // Ignore Binary, Ping, Pong
                        _ => {}
                    }
                }

                // Outbound frames from the session layer
                command = command_rx.recv() => {
                    match command {
                        Some(TransportCommand::Send(frame)) => {
                            trace!(len = frame.len(), "Frame sent");
                            if let Err(e) = ws_write.send(Message::Text(frame.into())).await {
                                warn!(error = %e, "Failed to send frame");
                                break;
                            }
                        }

                        Some(TransportCommand::Shutdown) => {
                            debug!("Shutdown command received");
                            let _ = ws_write.close().await;
                            break;
                        }

                        None => {
                            debug!("Command channel closed");
                            break;
                        }
                    }
                }
            }
        }

        on_close();
        debug!("Event loop terminated");
    }
}

// ============================================================================
// Tests
// ============================================================================
