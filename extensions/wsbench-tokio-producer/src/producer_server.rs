//! Note: This `ProducerServer` has no authentication and no heartbeat. It is
//! a benchmark endpoint meant for trusted networks; a stalled client stalls
//! its session indefinitely.

use crate::AxumWsTransport;
use axum::{
    Router,
    extract::ConnectInfo,
    extract::ws::{WebSocket, WebSocketUpgrade},
    response::IntoResponse,
    routing::get,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, ToSocketAddrs};
use wsbench::BenchError;
use wsbench::config::{ConfigError, PipelineConfig};
use wsbench::constants::PRODUCER_WS_PATH;
use wsbench::run::{CancelSignal, RunController};

/// A WebSocket endpoint that plays the producer role for every client that
/// connects.
///
/// Each connection reads the consumer's session parameters and then streams
/// frames built from this server's [`PipelineConfig`]. Connections are
/// independent; nothing is shared between them except the configuration and
/// the cancellation signal.
pub struct ProducerServer {
    controller: RunController,
}

impl ProducerServer {
    pub fn new(config: PipelineConfig) -> Result<Self, ConfigError> {
        Ok(ProducerServer {
            controller: RunController::new(config)?,
        })
    }

    /// Streams to every client until it disconnects, ignoring the message
    /// count it asks for.
    pub fn unbounded(mut self) -> Self {
        self.controller = self.controller.unbounded();
        self
    }

    /// Cancelling `cancel` stops accepting new clients and ends every active
    /// stream after its in-flight frame.
    pub fn with_cancel_signal(mut self, cancel: CancelSignal) -> Self {
        self.controller = self.controller.with_cancel_signal(cancel);
        self
    }

    pub fn cancel_signal(&self) -> CancelSignal {
        self.controller.cancel_signal()
    }

    /// Binds to an address and serves until the cancel signal fires.
    ///
    /// The address can be any type that implements `ToSocketAddrs`, such as
    /// a string "127.0.0.1:8765" or a `SocketAddr`.
    pub async fn serve<A: ToSocketAddrs>(self, addr: A) -> Result<SocketAddr, axum::BoxError> {
        let listener = TcpListener::bind(addr).await?;
        let server = Arc::new(self);
        server.serve_with_listener(listener).await
    }

    /// Convenience wrapper around `serve`. The host can be an IP address or
    /// a hostname.
    pub async fn serve_on(self, host: &str, port: u16) -> Result<SocketAddr, axum::BoxError> {
        let addr = format!("{host}:{port}");
        self.serve(addr).await
    }

    /// Serves on a pre-bound `TcpListener`.
    ///
    /// Useful for binding to an ephemeral port (port 0) and reading the
    /// actual address back before clients connect.
    pub async fn serve_with_listener(
        self: Arc<Self>,
        listener: TcpListener,
    ) -> Result<SocketAddr, axum::BoxError> {
        let address = listener.local_addr()?;

        // Clients that connect to the bare host (as older benchmark clients
        // do) are served the same as those asking for the `/ws` route.
        let app = Router::new()
            .route(
                "/",
                get({
                    let server = self.clone();
                    move |ws, conn| Self::ws_handler(ws, conn, server)
                }),
            )
            .route(
                PRODUCER_WS_PATH,
                get({
                    let server = self.clone();
                    move |ws, conn| Self::ws_handler(ws, conn, server)
                }),
            );

        let cancel = self.cancel_signal();

        tracing::info!("Producer running on {:?}", address);
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await?;

        tracing::info!("Producer on {:?} shut down", address);
        Ok(address)
    }

    async fn ws_handler(
        ws: WebSocketUpgrade,
        ConnectInfo(addr): ConnectInfo<SocketAddr>,
        server: Arc<ProducerServer>,
    ) -> impl IntoResponse {
        tracing::info!("Consumer connected: {}", addr);
        ws.on_upgrade(move |socket| server.handle_socket(socket, addr))
    }

    /// Runs one producer session to completion on an upgraded socket.
    async fn handle_socket(self: Arc<Self>, socket: WebSocket, addr: SocketAddr) {
        let mut transport = AxumWsTransport::new(socket);

        match self.controller.run_producer(&mut transport).await {
            Ok(report) => tracing::info!(
                "Finished streaming to {}: {} messages in {} frames",
                addr,
                report.messages_sent,
                report.frames_sent
            ),
            // The consumer leaving is how every unbounded session ends.
            Err(BenchError::ConnectionClosed) => {
                tracing::info!("Consumer {} disconnected.", addr)
            }
            Err(err) => tracing::error!("Session with {} aborted: {}", addr, err),
        }
    }
}
