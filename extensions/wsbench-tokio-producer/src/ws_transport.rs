use axum::extract::ws::{Message, WebSocket};
use std::io::{self, ErrorKind};
use tokio_tungstenite::tungstenite::Error as WsError;
use tokio_tungstenite::tungstenite::error::ProtocolError;
use wsbench::BenchError;
use wsbench::pipeline::WireFrame;
use wsbench::transport::FrameTransport;

/// [`FrameTransport`] over an upgraded Axum WebSocket.
pub struct AxumWsTransport {
    socket: WebSocket,
}

impl AxumWsTransport {
    pub fn new(socket: WebSocket) -> Self {
        Self { socket }
    }
}

#[async_trait::async_trait]
impl FrameTransport for AxumWsTransport {
    async fn send_frame(&mut self, frame: WireFrame) -> Result<(), BenchError> {
        let message = match frame {
            WireFrame::Text(text) => Message::Text(text.into()),
            WireFrame::Binary(bytes) => Message::Binary(bytes.into()),
        };

        // Axum does not expose the underlying I/O error kind; a failed write
        // on an upgraded socket means the client is gone.
        self.socket
            .send(message)
            .await
            .map_err(|_| BenchError::ConnectionClosed)
    }

    async fn recv_frame(&mut self) -> Result<Option<WireFrame>, BenchError> {
        loop {
            match self.socket.recv().await {
                Some(Ok(Message::Text(text))) => {
                    return Ok(Some(WireFrame::Text(text.as_str().to_owned())));
                }
                Some(Ok(Message::Binary(bytes))) => {
                    return Ok(Some(WireFrame::Binary(bytes.to_vec())));
                }
                Some(Ok(Message::Close(_))) | None => return Ok(None),
                // Control frames are answered by the WebSocket layer itself.
                Some(Ok(Message::Ping(_))) | Some(Ok(Message::Pong(_))) => continue,
                Some(Err(err)) => return map_recv_error(err),
            }
        }
    }

    async fn close(&mut self) -> Result<(), BenchError> {
        // The peer may already be gone; that is the expected case after a
        // finished run.
        let _ = self.socket.send(Message::Close(None)).await;
        Ok(())
    }
}

/// A read that fails because the consumer went away ends the stream the same
/// way a close frame does.
fn map_recv_error(err: axum::Error) -> Result<Option<WireFrame>, BenchError> {
    let ws_err = match err.into_inner().downcast::<WsError>() {
        Ok(ws_err) => *ws_err,
        Err(other) => return Err(BenchError::Transport(io::Error::other(other))),
    };

    match ws_err {
        WsError::ConnectionClosed
        | WsError::AlreadyClosed
        | WsError::Protocol(ProtocolError::ResetWithoutClosingHandshake) => Ok(None),
        WsError::Io(io_err)
            if matches!(
                io_err.kind(),
                ErrorKind::ConnectionReset
                    | ErrorKind::ConnectionAborted
                    | ErrorKind::BrokenPipe
                    | ErrorKind::UnexpectedEof
            ) =>
        {
            tracing::debug!("Consumer dropped the connection: {}", io_err);
            Ok(None)
        }
        WsError::Io(io_err) => Err(BenchError::Transport(io_err)),
        other => Err(BenchError::Transport(io::Error::other(other))),
    }
}
