//! The session state machine.
//!
//! [`SessionController`] owns the WebSocket transport, the connection and
//! acquisition state, and the sink registry. It is the only component that
//! opens, writes to, or closes the transport.
//!
//! # Operations
//!
//! | Operation | Precondition | Effect |
//! |-----------|--------------|--------|
//! | [`connect`](SessionController::connect) | Disconnected | dial, send `CONNECT`, log |
//! | [`disconnect`](SessionController::disconnect) | Connected | send `DISCONNECT`, close |
//! | [`start`](SessionController::start) | Connected + Idle | send `START` |
//! | [`stop`](SessionController::stop) | Connected + Acquiring | send `STOP` |
//! | [`send_command`](SessionController::send_command) | Connected, non-empty text | send raw, local echo |
//!
//! Precondition and validation failures return synchronously with zero side
//! effects: no frame is sent, no state changes, no event is emitted.
//! Transport failures never cross the controller boundary; they surface to
//! sinks as [`InboundEvent::Error`] events.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::{BridgeOptions, SessionConfig};
use crate::error::{Error, Result};
use crate::protocol::{Command, InboundEvent, decode_frame};
use crate::sink::SharedSink;
use crate::transport::Connection;

use super::state::{AcquisitionState, ConnectionState, SessionState};

// ============================================================================
// ControllerInner
// ============================================================================

/// Shared state between the controller handle and transport callbacks.
struct ControllerInner {
    /// Session state behind the per-session serialization point.
    state: Mutex<SessionState>,

    /// Registered sinks, fan-out targets for every decoded event.
    sinks: Mutex<Vec<SharedSink>>,
}

impl ControllerInner {
    /// Dispatches one decoded event to every registered sink, in order.
    ///
    /// The state lock is never held here; sinks only see their own state.
    fn dispatch(&self, event: &InboundEvent) {
        if let InboundEvent::Malformed { raw } = event {
            warn!(raw = %raw, "Malformed inbound frame");
        }

        let sinks = self.sinks.lock().clone();
        for sink in &sinks {
            sink.lock().handle(event);
        }
    }

    /// Transport frame callback: decode and fan out, in delivery order.
    fn handle_frame(&self, raw: &str) {
        let event = decode_frame(raw);
        self.dispatch(&event);
    }

    /// Transport close callback, fired exactly once per connection.
    ///
    /// Completes `Closing → Disconnected` for a local disconnect and handles
    /// an unexpected remote close the same way. A close out of `Connecting`
    /// means the session was never established, so it surfaces as an error
    /// event rather than a disconnect log.
    fn handle_close(&self) {
        let prior = {
            let mut state = self.state.lock();
            let prior = state.connection;
            if state.is_live() {
                state.reset_to_disconnected();
            }
            prior
        };

        match prior {
            ConnectionState::Disconnected => {}
            ConnectionState::Connecting => {
                warn!("Transport closed before session was established");
                self.dispatch(&InboundEvent::error(
                    "WebSocket error: connection closed before session was established",
                ));
            }
            ConnectionState::Connected | ConnectionState::Closing => {
                debug!("Session transport closed");
                self.dispatch(&InboundEvent::log("Disconnected from serial terminal."));
            }
        }
    }
}

// ============================================================================
// SessionController
// ============================================================================

/// Manages one WebSocket-backed serial session.
///
/// Cheap to clone; all clones share the same session. Sinks hold no
/// reference to the controller — command sending stays the caller's job.
///
/// # Example
///
/// ```ignore
/// use serial_bridge::{BridgeOptions, LogSink, SessionConfig, SessionController};
///
/// # async fn example() -> serial_bridge::Result<()> {
/// let options = BridgeOptions::for_host("localhost:8888")?;
/// let session = SessionController::new(options);
///
/// let log = LogSink::shared();
/// session.attach_sink(log.clone());
///
/// session.connect(SessionConfig::new("/dev/ttyUSB0", 9600)).await?;
/// session.start()?;
/// session.send_command("AT+VERSION?")?;
/// session.stop()?;
/// session.disconnect()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SessionController {
    /// Endpoint and timeout configuration.
    options: BridgeOptions,

    /// Shared session state and sink registry.
    inner: Arc<ControllerInner>,
}

impl SessionController {
    /// Creates a disconnected session controller for the given bridge.
    #[must_use]
    pub fn new(options: BridgeOptions) -> Self {
        Self {
            options,
            inner: Arc::new(ControllerInner {
                state: Mutex::new(SessionState::default()),
                sinks: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Registers a sink for decoded inbound events.
    ///
    /// Every registered sink sees every event; delivery order across sinks
    /// follows registration order.
    pub fn attach_sink(&self, sink: SharedSink) {
        self.inner.sinks.lock().push(sink);
    }

    /// Returns the current connection state.
    #[inline]
    #[must_use]
    pub fn connection_state(&self) -> ConnectionState {
        self.inner.state.lock().connection
    }

    /// Returns the current acquisition state.
    #[inline]
    #[must_use]
    pub fn acquisition_state(&self) -> AcquisitionState {
        self.inner.state.lock().acquisition
    }

    /// Connects the session with the given config snapshot.
    ///
    /// Dials the bridge endpoint, then sends the initial `CONNECT` frame and
    /// emits `Log("Connected to {port} at {baudrate} baudrate.")` to sinks.
    /// A transport failure or connect timeout transitions back to
    /// `Disconnected` and surfaces as an [`InboundEvent::Error`] sink event;
    /// it is not returned to the caller and no retry is attempted.
    ///
    /// # Errors
    ///
    /// - [`Error::Precondition`] if the session is not `Disconnected`
    ///   (a second `connect` while one is in flight is rejected, not raced)
    /// - [`Error::Json`] if the `CONNECT` frame cannot be encoded
    pub async fn connect(&self, config: SessionConfig) -> Result<()> {
        {
            let mut state = self.inner.state.lock();
            if state.connection != ConnectionState::Disconnected {
                return Err(Error::precondition("session is not disconnected"));
            }
            state.connection = ConnectionState::Connecting;
            state.config = Some(config.clone());
        }

        let frame_inner = Arc::clone(&self.inner);
        let close_inner = Arc::clone(&self.inner);

        let opened = Connection::open(
            &self.options.endpoint,
            self.options.connect_timeout,
            Box::new(move |raw| frame_inner.handle_frame(raw)),
            Box::new(move || close_inner.handle_close()),
        )
        .await;

        let connection = match opened {
            Ok(connection) => connection,
            Err(e) => {
                {
                    let mut state = self.inner.state.lock();
                    state.reset_to_disconnected();
                }
                warn!(error = %e, "Failed to open session transport");
                self.inner
                    .dispatch(&InboundEvent::error(format!("WebSocket error: {e}")));
                return Ok(());
            }
        };

        let frame = Command::Connect(config.clone()).encode()?;

        {
            let mut state = self.inner.state.lock();
            if state.connection != ConnectionState::Connecting {
                // The transport closed underneath us before the handshake
                // frame went out; the close callback already reset state.
                return Ok(());
            }
            state.connection = ConnectionState::Connected;
            state.transport = Some(connection.clone());
        }

        if connection.send(frame).is_err() {
            // Loop already dead; the close callback owns the transition.
            warn!("Transport closed before CONNECT frame was sent");
            return Ok(());
        }

        info!(port = %config.port, baudrate = config.baudrate, "Session connected");
        self.inner.dispatch(&InboundEvent::log(format!(
            "Connected to {} at {} baudrate.",
            config.port, config.baudrate
        )));

        Ok(())
    }

    /// Disconnects the session.
    ///
    /// Sends `DISCONNECT` and closes the transport. The transition to
    /// `Disconnected` — acquisition reset, transport release, and the
    /// `Log("Disconnected from serial terminal.")` event — completes when
    /// the transport close callback fires.
    ///
    /// # Errors
    ///
    /// - [`Error::Precondition`] if the session is not `Connected`
    /// - [`Error::Json`] if the `DISCONNECT` frame cannot be encoded
    pub fn disconnect(&self) -> Result<()> {
        // Check and transition under one lock so a concurrent transport
        // close cannot leave the session stuck in Closing.
        let connection = {
            let mut state = self.inner.state.lock();
            if state.connection != ConnectionState::Connected {
                return Err(Error::precondition("session is not connected"));
            }
            let Some(connection) = state.transport.clone() else {
                return Err(Error::ConnectionClosed);
            };
            state.connection = ConnectionState::Closing;
            connection
        };

        let frame = Command::Disconnect.encode()?;
        if connection.send(frame).is_err() {
            debug!("Transport already closed during disconnect");
        }
        connection.shutdown();

        Ok(())
    }

    /// Begins sample acquisition.
    ///
    /// # Errors
    ///
    /// - [`Error::Precondition`] unless the session is `Connected` with
    ///   acquisition `Idle`; on failure nothing is sent and nothing changes
    /// - [`Error::Json`] if the `START` frame cannot be encoded
    pub fn start(&self) -> Result<()> {
        let connection = {
            let mut state = self.inner.state.lock();
            if state.connection != ConnectionState::Connected {
                return Err(Error::precondition("session is not connected"));
            }
            if state.acquisition != AcquisitionState::Idle {
                return Err(Error::precondition("acquisition already running"));
            }
            let Some(connection) = state.transport.clone() else {
                return Err(Error::ConnectionClosed);
            };
            state.acquisition = AcquisitionState::Acquiring;
            connection
        };

        debug!("Acquisition started");
        self.absorb_send(&connection, Command::Start)
    }

    /// Ends sample acquisition.
    ///
    /// # Errors
    ///
    /// - [`Error::Precondition`] unless the session is `Connected` with
    ///   acquisition `Acquiring`; on failure nothing is sent and nothing
    ///   changes
    /// - [`Error::Json`] if the `STOP` frame cannot be encoded
    pub fn stop(&self) -> Result<()> {
        let connection = {
            let mut state = self.inner.state.lock();
            if state.connection != ConnectionState::Connected {
                return Err(Error::precondition("session is not connected"));
            }
            if state.acquisition != AcquisitionState::Acquiring {
                return Err(Error::precondition("acquisition is not running"));
            }
            let Some(connection) = state.transport.clone() else {
                return Err(Error::ConnectionClosed);
            };
            state.acquisition = AcquisitionState::Idle;
            connection
        };

        debug!("Acquisition stopped");
        self.absorb_send(&connection, Command::Stop)
    }

    /// Sends a free-text command to the device.
    ///
    /// Emits a local `Log(">> {text}")` echo to sinks before any peer
    /// acknowledgement arrives.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if `text` is empty after trimming; nothing is
    ///   sent and no event is emitted
    /// - [`Error::Precondition`] if the session is not `Connected`
    /// - [`Error::Json`] if the frame cannot be encoded
    pub fn send_command(&self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::validation("empty command"));
        }

        let connection = self.live_transport()?;

        let frame = Command::Raw {
            text: text.to_string(),
        }
        .encode()?;

        if connection.send(frame).is_err() {
            warn!("Transport closed before command was sent");
            return Ok(());
        }

        self.inner.dispatch(&InboundEvent::log(format!(">> {text}")));
        Ok(())
    }

    /// Returns the transport handle if the session is `Connected`.
    fn live_transport(&self) -> Result<Connection> {
        let state = self.inner.state.lock();
        if state.connection != ConnectionState::Connected {
            return Err(Error::precondition("session is not connected"));
        }
        state.transport.clone().ok_or(Error::ConnectionClosed)
    }

    /// Encodes and sends a frame, absorbing transport failure.
    ///
    /// A dead transport is handled by the close callback; the caller only
    /// sees encoding errors.
    fn absorb_send(&self, connection: &Connection, command: Command) -> Result<()> {
        let frame = command.encode()?;
        if connection.send(frame).is_err() {
            warn!(verb = command.verb(), "Transport closed before frame was sent");
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use futures_util::{SinkExt, StreamExt};
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;
    use tokio::time::timeout;
    use tokio_tungstenite::tungstenite::Message;
    use url::Url;

    use crate::config::{BridgeOptions, SessionConfig};
    use crate::sink::{ChartSink, EventSink, LogSink, ReadoutSink};

    /// Waiting period for asynchronous assertions.
    const WAIT: Duration = Duration::from_secs(5);

    /// Installs the test tracing subscriber, once per process.
    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("serial_bridge=debug"))
            .with_test_writer()
            .try_init();
    }

    /// A one-connection in-process bridge peer.
    ///
    /// `received` yields frames the client sent; `push` injects frames the
    /// client will receive. Dropping `push` closes the peer side.
    struct MockBridge {
        url: Url,
        received: mpsc::UnboundedReceiver<String>,
        push: Option<mpsc::UnboundedSender<String>>,
    }

    impl MockBridge {
        async fn spawn() -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
            let port = listener.local_addr().expect("addr").port();
            let url = Url::parse(&format!("ws://127.0.0.1:{port}/serial-terminal/ws"))
                .expect("valid url");

            let (received_tx, received) = mpsc::unbounded_channel::<String>();
            let (push_tx, mut push_rx) = mpsc::unbounded_channel::<String>();

            tokio::spawn(async move {
                let (stream, _) = listener.accept().await.expect("accept");
                let ws = tokio_tungstenite::accept_async(stream)
                    .await
                    .expect("upgrade");
                let (mut write, mut read) = ws.split();

                loop {
                    tokio::select! {
                        message = read.next() => {
                            match message {
                                Some(Ok(Message::Text(text))) => {
                                    let _ = received_tx.send(text.to_string());
                                }
                                Some(Ok(Message::Close(_))) | None => break,
                                Some(Err(_)) => break,
                                _ => {}
                            }
                        }
                        frame = push_rx.recv() => {
                            match frame {
                                Some(frame) => {
                                    if write.send(Message::Text(frame.into())).await.is_err() {
                                        break;
                                    }
                                }
                                None => {
                                    // Peer-initiated close.
                                    let _ = write.close().await;
                                    break;
                                }
                            }
                        }
                    }
                }
            });

            Self {
                url,
                received,
                push: Some(push_tx),
            }
        }

        fn options(&self) -> BridgeOptions {
            BridgeOptions::new(self.url.as_str())
                .expect("valid url")
                .with_connect_timeout(WAIT)
        }

        async fn next_frame(&mut self) -> serde_json::Value {
            let frame = timeout(WAIT, self.received.recv())
                .await
                .expect("frame within deadline")
                .expect("peer alive");
            serde_json::from_str(&frame).expect("valid json frame")
        }

        fn push(&self, frame: &str) {
            self.push
                .as_ref()
                .expect("peer open")
                .send(frame.to_string())
                .expect("peer alive");
        }

        fn close(&mut self) {
            self.push.take();
        }
    }

    /// Forwards every dispatched event into a channel for await-style tests.
    struct ChannelSink {
        tx: mpsc::UnboundedSender<InboundEvent>,
    }

    impl ChannelSink {
        fn shared() -> (SharedSink, mpsc::UnboundedReceiver<InboundEvent>) {
            let (tx, rx) = mpsc::unbounded_channel();
            (Arc::new(Mutex::new(Self { tx })), rx)
        }
    }

    impl EventSink for ChannelSink {
        fn handle(&mut self, event: &InboundEvent) {
            let _ = self.tx.send(event.clone());
        }
    }

    async fn next_event(rx: &mut mpsc::UnboundedReceiver<InboundEvent>) -> InboundEvent {
        timeout(WAIT, rx.recv())
            .await
            .expect("event within deadline")
            .expect("dispatcher alive")
    }

    #[tokio::test]
    async fn test_connect_sends_frame_and_logs_once() {
        init_tracing();
        let mut bridge = MockBridge::spawn().await;
        let session = SessionController::new(bridge.options());
        let log = LogSink::shared();
        session.attach_sink(log.clone());

        session
            .connect(SessionConfig::new("/dev/ttyUSB0", 9600))
            .await
            .expect("connect");

        let frame = bridge.next_frame().await;
        assert_eq!(frame["command"], "CONNECT");
        assert_eq!(frame["port"], "/dev/ttyUSB0");
        assert_eq!(frame["baudrate"], 9600);

        assert_eq!(session.connection_state(), ConnectionState::Connected);

        let expected = "Connected to /dev/ttyUSB0 at 9600 baudrate.";
        let count = log
            .lock()
            .lines()
            .iter()
            .filter(|line| line.as_str() == expected)
            .count();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_second_connect_is_rejected() {
        init_tracing();
        let bridge = MockBridge::spawn().await;
        let session = SessionController::new(bridge.options());

        session
            .connect(SessionConfig::default())
            .await
            .expect("connect");

        let result = session.connect(SessionConfig::default()).await;
        assert!(matches!(result, Err(Error::Precondition { .. })));
        assert_eq!(session.connection_state(), ConnectionState::Connected);
    }

    #[tokio::test]
    async fn test_connect_refused_surfaces_as_error_event() {
        init_tracing();
        // Nothing is listening once the listener is dropped.
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let port = listener.local_addr().expect("addr").port();
        drop(listener);

        let options = BridgeOptions::new(format!("ws://127.0.0.1:{port}/serial-terminal/ws"))
            .expect("valid url");
        let session = SessionController::new(options);
        let (sink, mut events) = ChannelSink::shared();
        session.attach_sink(sink);

        session
            .connect(SessionConfig::default())
            .await
            .expect("transport errors are absorbed");

        assert_eq!(session.connection_state(), ConnectionState::Disconnected);
        assert!(matches!(
            next_event(&mut events).await,
            InboundEvent::Error { .. }
        ));
    }

    #[tokio::test]
    async fn test_start_while_disconnected_is_inert() {
        init_tracing();
        let bridge = MockBridge::spawn().await;
        let session = SessionController::new(bridge.options());

        let result = session.start();

        assert!(matches!(result, Err(Error::Precondition { .. })));
        assert_eq!(session.connection_state(), ConnectionState::Disconnected);
        assert_eq!(session.acquisition_state(), AcquisitionState::Idle);
        // Zero outbound frames: the peer never even saw a connection.
    }

    #[tokio::test]
    async fn test_start_stop_lifecycle() {
        init_tracing();
        let mut bridge = MockBridge::spawn().await;
        let session = SessionController::new(bridge.options());

        session
            .connect(SessionConfig::default())
            .await
            .expect("connect");
        assert_eq!(bridge.next_frame().await["command"], "CONNECT");

        session.start().expect("start");
        assert_eq!(session.acquisition_state(), AcquisitionState::Acquiring);
        assert_eq!(bridge.next_frame().await["command"], "START");

        // start() while already acquiring is rejected with no frame sent.
        assert!(matches!(
            session.start(),
            Err(Error::Precondition { .. })
        ));

        session.stop().expect("stop");
        assert_eq!(session.acquisition_state(), AcquisitionState::Idle);
        assert_eq!(bridge.next_frame().await["command"], "STOP");

        assert!(matches!(session.stop(), Err(Error::Precondition { .. })));
    }

    #[tokio::test]
    async fn test_send_command_echoes_locally() {
        init_tracing();
        let mut bridge = MockBridge::spawn().await;
        let session = SessionController::new(bridge.options());
        let log = LogSink::shared();
        session.attach_sink(log.clone());

        session
            .connect(SessionConfig::default())
            .await
            .expect("connect");
        assert_eq!(bridge.next_frame().await["command"], "CONNECT");

        session.send_command("AT+VERSION?").expect("send");

        assert_eq!(bridge.next_frame().await["command"], "AT+VERSION?");
        assert!(
            log.lock()
                .lines()
                .iter()
                .any(|line| line == ">> AT+VERSION?")
        );
    }

    #[tokio::test]
    async fn test_empty_command_is_rejected_without_side_effects() {
        init_tracing();
        let bridge = MockBridge::spawn().await;
        let session = SessionController::new(bridge.options());
        let log = LogSink::shared();
        session.attach_sink(log.clone());

        session
            .connect(SessionConfig::default())
            .await
            .expect("connect");

        let result = session.send_command("   ");

        assert!(matches!(result, Err(Error::Validation { .. })));
        // No echo line beyond the connect log.
        assert_eq!(log.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_inbound_events_fan_out_to_all_sinks() {
        init_tracing();
        let bridge = MockBridge::spawn().await;
        let session = SessionController::new(bridge.options());

        let log = LogSink::shared();
        let chart = ChartSink::shared();
        let readout = ReadoutSink::shared();
        let (probe, mut events) = ChannelSink::shared();
        session.attach_sink(log.clone());
        session.attach_sink(chart.clone());
        session.attach_sink(readout.clone());
        session.attach_sink(probe);

        session
            .connect(SessionConfig::default())
            .await
            .expect("connect");
        // Drain the connect log event.
        assert!(matches!(
            next_event(&mut events).await,
            InboundEvent::Log { .. }
        ));

        bridge.push(r#"{"data":"hello"}"#);
        assert_eq!(next_event(&mut events).await, InboundEvent::log("hello"));

        bridge.push(r#"{"voltage":3.3,"timestamp":1000}"#);
        assert!(next_event(&mut events).await.is_sample());

        bridge.push(r#"{"foo":1}"#);
        assert!(next_event(&mut events).await.is_malformed());

        assert!(log.lock().lines().contains(&"hello".to_string()));
        assert_eq!(chart.lock().len(), 1);
        assert_eq!(readout.lock().formatted(), Some("3.30".to_string()));
    }

    #[tokio::test]
    async fn test_disconnect_completes_through_close() {
        init_tracing();
        let mut bridge = MockBridge::spawn().await;
        let session = SessionController::new(bridge.options());
        let log = LogSink::shared();
        let (probe, mut events) = ChannelSink::shared();
        session.attach_sink(log.clone());
        session.attach_sink(probe);

        session
            .connect(SessionConfig::default())
            .await
            .expect("connect");
        assert!(matches!(
            next_event(&mut events).await,
            InboundEvent::Log { .. }
        ));
        session.start().expect("start");

        session.disconnect().expect("disconnect");
        assert_eq!(bridge.next_frame().await["command"], "CONNECT");
        assert_eq!(bridge.next_frame().await["command"], "START");
        assert_eq!(bridge.next_frame().await["command"], "DISCONNECT");

        assert_eq!(
            next_event(&mut events).await,
            InboundEvent::log("Disconnected from serial terminal.")
        );
        assert_eq!(session.connection_state(), ConnectionState::Disconnected);
        assert_eq!(session.acquisition_state(), AcquisitionState::Idle);
        assert!(
            log.lock()
                .lines()
                .contains(&"Disconnected from serial terminal.".to_string())
        );
    }

    #[tokio::test]
    async fn test_remote_close_resets_session() {
        init_tracing();
        let mut bridge = MockBridge::spawn().await;
        let session = SessionController::new(bridge.options());
        let (probe, mut events) = ChannelSink::shared();
        session.attach_sink(probe);

        session
            .connect(SessionConfig::default())
            .await
            .expect("connect");
        assert!(matches!(
            next_event(&mut events).await,
            InboundEvent::Log { .. }
        ));
        session.start().expect("start");

        bridge.close();

        assert_eq!(
            next_event(&mut events).await,
            InboundEvent::log("Disconnected from serial terminal.")
        );
        assert_eq!(session.connection_state(), ConnectionState::Disconnected);
        assert_eq!(session.acquisition_state(), AcquisitionState::Idle);

        // The session is reusable after a manual reconnect attempt.
        assert!(matches!(
            session.start(),
            Err(Error::Precondition { .. })
        ));
    }

    #[test]
    fn test_close_while_connecting_emits_error_event() {
        init_tracing();
        let (sink, mut events) = ChannelSink::shared();
        let inner = ControllerInner {
            state: Mutex::new(SessionState::default()),
            sinks: Mutex::new(vec![sink]),
        };
        inner.state.lock().connection = ConnectionState::Connecting;

        inner.handle_close();

        // The session never reported connecting, so no disconnect log.
        assert!(matches!(events.try_recv(), Ok(InboundEvent::Error { .. })));
        assert!(events.try_recv().is_err());
        assert_eq!(inner.state.lock().connection, ConnectionState::Disconnected);
        assert_eq!(inner.state.lock().acquisition, AcquisitionState::Idle);
    }

    #[tokio::test]
    async fn test_disconnect_while_disconnected_is_rejected() {
        init_tracing();
        let bridge = MockBridge::spawn().await;
        let session = SessionController::new(bridge.options());

        let result = session.disconnect();
        assert!(matches!(result, Err(Error::Precondition { .. })));
    }
}
