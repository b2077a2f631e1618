use crate::TungsteniteTransport;
use std::io;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::error::Error as WsError;
use wsbench::BenchError;
use wsbench::constants::PRODUCER_WS_PATH;
use wsbench::run::{RunController, RunReport};

/// A connected consumer, ready to negotiate and drain one benchmark run.
pub struct ConsumerClient {
    transport: TungsteniteTransport,
    websocket_url: String,
}

impl ConsumerClient {
    /// Opens a WebSocket connection to a producer endpoint.
    pub async fn connect(host: &str, port: u16) -> Result<ConsumerClient, io::Error> {
        let websocket_url = format!("ws://{host}:{port}{PRODUCER_WS_PATH}");

        let (ws_stream, _) = connect_async(websocket_url.as_str())
            .await
            .map_err(|err| match err {
                WsError::Io(io_err) => io_err,
                other => io::Error::other(other),
            })?;

        tracing::info!("Connected to producer at {}", websocket_url);

        Ok(ConsumerClient {
            transport: TungsteniteTransport::new(ws_stream),
            websocket_url,
        })
    }

    /// Runs the consumer role to completion and releases the connection.
    pub async fn run(mut self, controller: &RunController) -> Result<RunReport, BenchError> {
        let report = controller.run_consumer(&mut self.transport).await?;
        tracing::info!("Run against {} complete: {}", self.websocket_url, report);
        Ok(report)
    }
}
