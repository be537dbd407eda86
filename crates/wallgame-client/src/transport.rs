//! WebSocket transport session.
//!
//! [`TransportSession`] spawns one task that owns the socket for the whole
//! session and reconnects after every abnormal closure. The handle exposes an
//! ordered stream of [`SessionEvent`]s and a non-blocking [`TransportSession::send`].
//!
//! # Connections and generations
//!
//! ```text
//!            connect ok              abnormal close
//! Connecting ─────────> Open(gen n) ─────────────────> Reconnecting ──┐
//!     ^                     │                          (backoff)      │
//!     │                     │ close code 1000                         │
//!     │                     v                                         │
//!     │                 Terminated                                    │
//!     └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every physical connection gets a fresh generation number and a fresh
//! outbound queue. Nothing queued for a dead connection is carried over, and
//! events tagged with a generation older than the latest `Open` are discarded
//! before they reach the caller.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt, stream::SplitSink};
use thiserror::Error;
use tokio::{
    net::TcpStream,
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream,
    tungstenite::{
        Message,
        protocol::{CloseFrame, frame::coding::CloseCode},
    },
};
use url::Url;
use wallgame_proto::{ClientMessage, ProtocolError, ServerMessage};

use crate::{Backoff, ReconnectConfig};

/// Close code of a normal closure. The only code that ends a session.
pub const NORMAL_CLOSURE: u16 = 1000;

/// Buffered session events before the task waits for the consumer.
const EVENT_CAPACITY: usize = 64;

/// How long [`TransportSession::close`] waits for the closing handshake.
const CLOSE_TIMEOUT: Duration = Duration::from_secs(2);

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The URL cannot be used for a socket.
    #[error("invalid socket URL: {0}")]
    InvalidUrl(String),

    /// No connection is open right now.
    #[error("not connected")]
    NotConnected,

    /// Outbound message could not be encoded.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Lifecycle and delivery events, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A connection attempt started. Attempt 0 is the initial connect.
    Connecting {
        /// Failed attempts since the last successful open.
        attempt: u32,
    },

    /// Socket open.
    Open {
        /// Generation of the new connection.
        generation: u64,
    },

    /// Decoded server message.
    Message {
        /// Connection that delivered the message.
        generation: u64,
        /// The message.
        message: ServerMessage,
    },

    /// Connection closed.
    Closed {
        /// Connection that closed.
        generation: u64,
        /// Close code, if a close frame was received.
        code: Option<u16>,
        /// Normal closure. Never retried.
        intentional: bool,
    },

    /// A retry is scheduled.
    Reconnecting {
        /// Number of the upcoming attempt.
        attempt: u32,
        /// Wait before the attempt.
        delay: Duration,
    },

    /// The session is over. No further events follow.
    Terminated,
}

/// Sender half of the currently open connection.
#[derive(Debug, Clone)]
struct Outbound {
    generation: u64,
    tx: mpsc::UnboundedSender<Message>,
}

/// Handle to a transport session.
///
/// Dropping the handle aborts the session task, which cancels any pending
/// retry.
pub struct TransportSession {
    events: mpsc::Receiver<SessionEvent>,
    outbound: watch::Receiver<Option<Outbound>>,
    close_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
    generation: u64,
}

impl TransportSession {
    /// Start a session for `url`.
    ///
    /// Returns immediately. The first event is always
    /// `Connecting { attempt: 0 }`. Must be called within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidUrl`] if `url` is not a `ws` or `wss`
    /// URL.
    pub fn connect(url: &str, config: ReconnectConfig) -> Result<Self, TransportError> {
        let url = Url::parse(url).map_err(|e| TransportError::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(url.scheme(), "ws" | "wss") {
            return Err(TransportError::InvalidUrl(format!(
                "expected ws or wss scheme, got {}",
                url.scheme()
            )));
        }

        let (events_tx, events) = mpsc::channel(EVENT_CAPACITY);
        let (outbound_tx, outbound) = watch::channel(None);
        let (close_tx, close_rx) = oneshot::channel();

        let task = SessionTask {
            url,
            backoff: Backoff::new(config),
            events: events_tx,
            outbound: outbound_tx,
            close_rx,
            closing: false,
            generation: 0,
        };
        let task = tokio::spawn(task.run());

        Ok(Self { events, outbound, close_tx: Some(close_tx), task, generation: 0 })
    }

    /// Queue a message on the open connection.
    ///
    /// Messages are never held across a reconnect.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::NotConnected`] unless a connection is open.
    pub fn send(&self, message: &ClientMessage) -> Result<(), TransportError> {
        let outbound = self.outbound.borrow().clone().ok_or(TransportError::NotConnected)?;
        let text = message.to_json()?;
        outbound.tx.send(Message::Text(text)).map_err(|_| TransportError::NotConnected)?;
        tracing::trace!(generation = outbound.generation, "queued outbound message");
        Ok(())
    }

    /// True while a connection is open.
    pub fn is_connected(&self) -> bool {
        self.outbound.borrow().is_some()
    }

    /// Next session event. `None` once the session task is gone.
    ///
    /// Cancel safe. Events from a superseded connection are dropped here.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        loop {
            let event = self.events.recv().await?;
            match &event {
                SessionEvent::Open { generation } => self.generation = *generation,
                SessionEvent::Message { generation, .. } | SessionEvent::Closed { generation, .. }
                    if *generation < self.generation =>
                {
                    tracing::debug!(generation, current = self.generation, "dropping stale event");
                    continue;
                },
                _ => {},
            }
            return Some(event);
        }
    }

    /// Close the session with a normal closure and wait for the task to end.
    ///
    /// The remaining events, ending with [`SessionEvent::Terminated`], stay
    /// readable through [`Self::next_event`]. If the event buffer was full,
    /// the closing events may be missing and the stream simply ends.
    pub async fn close(&mut self) {
        let Some(close_tx) = self.close_tx.take() else {
            return;
        };
        if close_tx.send(()).is_err() {
            tracing::debug!("session task already finished");
            return;
        }
        if tokio::time::timeout(CLOSE_TIMEOUT, &mut self.task).await.is_err() {
            tracing::warn!("closing handshake timed out, aborting session");
            self.task.abort();
        }
    }

    /// Abort the session task without a closing handshake.
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for TransportSession {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// How a single connection ended.
enum ConnectionEnd {
    /// Closed by the peer or by the network.
    Remote { code: Option<u16> },
    /// Closed by [`TransportSession::close`].
    Local,
    /// The handle is gone; nobody is listening.
    Abandoned,
}

/// State owned by the session task.
struct SessionTask {
    url: Url,
    backoff: Backoff,
    events: mpsc::Sender<SessionEvent>,
    outbound: watch::Sender<Option<Outbound>>,
    close_rx: oneshot::Receiver<()>,
    closing: bool,
    generation: u64,
}

impl SessionTask {
    async fn run(mut self) {
        loop {
            let attempt = self.backoff.attempt();
            if !self.emit(SessionEvent::Connecting { attempt }).await {
                return self.finish().await;
            }

            let connected = tokio::select! {
                result = tokio_tungstenite::connect_async(self.url.as_str()) => result,
                () = close_requested(&mut self.close_rx, &mut self.closing) => {
                    return self.finish().await;
                },
            };

            match connected {
                Ok((socket, _response)) => {
                    self.generation += 1;
                    self.backoff.reset();
                    let generation = self.generation;
                    tracing::info!(url = %self.url, generation, "connected");

                    let end = self.run_connection(socket).await;
                    self.outbound.send_replace(None);

                    match end {
                        ConnectionEnd::Remote { code } if code == Some(NORMAL_CLOSURE) => {
                            tracing::info!(generation, "server closed the session");
                            self.emit(SessionEvent::Closed { generation, code, intentional: true })
                                .await;
                            self.emit(SessionEvent::Terminated).await;
                            return;
                        },
                        ConnectionEnd::Remote { code } => {
                            tracing::info!(generation, ?code, "connection lost");
                            let event = SessionEvent::Closed { generation, code, intentional: false };
                            if !self.emit(event).await {
                                return self.finish().await;
                            }
                        },
                        ConnectionEnd::Local => {
                            let code = Some(NORMAL_CLOSURE);
                            self.emit(SessionEvent::Closed { generation, code, intentional: true })
                                .await;
                            self.emit(SessionEvent::Terminated).await;
                            return;
                        },
                        ConnectionEnd::Abandoned => return,
                    }
                },
                Err(e) => {
                    tracing::warn!(url = %self.url, error = %e, "connect failed");
                },
            }

            let (attempt, delay) = self.backoff.next_attempt();
            if !self.emit(SessionEvent::Reconnecting { attempt, delay }).await {
                return self.finish().await;
            }
            tokio::select! {
                () = tokio::time::sleep(delay) => {},
                () = close_requested(&mut self.close_rx, &mut self.closing) => {
                    return self.finish().await;
                },
            }
        }
    }

    /// Pump one connection until it closes.
    async fn run_connection(&mut self, socket: Socket) -> ConnectionEnd {
        let generation = self.generation;
        let (mut write, mut read) = socket.split();
        let (tx, mut rx) = mpsc::unbounded_channel();

        self.outbound.send_replace(Some(Outbound { generation, tx }));
        if !self.emit(SessionEvent::Open { generation }).await {
            return self.end_connection(&mut write).await;
        }

        loop {
            tokio::select! {
                () = close_requested(&mut self.close_rx, &mut self.closing) => {
                    return self.end_connection(&mut write).await;
                },
                Some(message) = rx.recv() => {
                    if let Err(e) = write.send(message).await {
                        tracing::debug!(generation, error = %e, "write failed");
                        return ConnectionEnd::Remote { code: None };
                    }
                },
                frame = read.next() => match frame {
                    Some(Ok(Message::Text(text))) => match ServerMessage::from_json(&text) {
                        Ok(message) => {
                            tracing::trace!(generation, event = message.event_name(), "received");
                            if !self.emit(SessionEvent::Message { generation, message }).await {
                                return self.end_connection(&mut write).await;
                            }
                        },
                        Err(e) => tracing::warn!(generation, error = %e, "dropping malformed frame"),
                    },
                    Some(Ok(Message::Close(frame))) => {
                        // Push out the queued close reply before the socket drops
                        if let Err(e) = write.flush().await {
                            tracing::debug!(generation, error = %e, "close reply not delivered");
                        }
                        return ConnectionEnd::Remote { code: frame.map(|f| u16::from(f.code)) };
                    },
                    Some(Ok(Message::Binary(bytes))) => {
                        tracing::debug!(generation, len = bytes.len(), "ignoring binary frame");
                    },
                    Some(Ok(_)) => {},
                    Some(Err(e)) => {
                        tracing::debug!(generation, error = %e, "read failed");
                        return ConnectionEnd::Remote { code: None };
                    },
                    None => return ConnectionEnd::Remote { code: None },
                },
            }
        }
    }

    /// Stop pumping after a close request or after the handle went away.
    ///
    /// Only a requested close sends the normal closure frame.
    async fn end_connection(&mut self, write: &mut SplitSink<Socket, Message>) -> ConnectionEnd {
        if !self.closing {
            return ConnectionEnd::Abandoned;
        }
        self.outbound.send_replace(None);
        let frame = CloseFrame { code: CloseCode::Normal, reason: "".into() };
        if let Err(e) = write.send(Message::Close(Some(frame))).await {
            tracing::debug!(error = %e, "close frame not delivered");
        }
        ConnectionEnd::Local
    }

    /// Report the end of the session if it was closed on request.
    async fn finish(&mut self) {
        if self.closing {
            self.emit(SessionEvent::Terminated).await;
        }
    }

    /// Deliver an event. Returns `false` if the handle is gone or a close was
    /// requested while the buffer was full.
    ///
    /// Once closing, nothing waits for buffer space: the handle is blocked in
    /// [`TransportSession::close`] and does not drain events until the task ends.
    async fn emit(&mut self, event: SessionEvent) -> bool {
        if self.closing {
            if let Err(e) = self.events.try_send(event) {
                tracing::debug!(error = %e, "event buffer full while closing");
            }
            return true;
        }
        let Self { events, close_rx, closing, .. } = self;
        tokio::select! {
            sent = events.send(event) => sent.is_ok(),
            () = close_requested(close_rx, closing) => false,
        }
    }
}

/// Resolves once [`TransportSession::close`] was called, or at once if it
/// already was.
async fn close_requested(close_rx: &mut oneshot::Receiver<()>, closing: &mut bool) {
    if *closing {
        return;
    }
    // A dropped handle also ends the wait; the task is being aborted anyway
    let _ = close_rx.await;
    *closing = true;
}
