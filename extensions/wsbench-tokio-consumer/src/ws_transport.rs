use futures_util::{SinkExt, StreamExt};
use std::io::{self, ErrorKind};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::error::{Error as WsError, ProtocolError};
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use wsbench::BenchError;
use wsbench::pipeline::WireFrame;
use wsbench::transport::FrameTransport;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// [`FrameTransport`] over a tokio-tungstenite client stream.
pub struct TungsteniteTransport {
    stream: WsStream,
}

impl TungsteniteTransport {
    pub fn new(stream: WsStream) -> Self {
        Self { stream }
    }
}

#[async_trait::async_trait]
impl FrameTransport for TungsteniteTransport {
    async fn send_frame(&mut self, frame: WireFrame) -> Result<(), BenchError> {
        let message = match frame {
            WireFrame::Text(text) => WsMessage::Text(text.into()),
            WireFrame::Binary(bytes) => WsMessage::Binary(bytes.into()),
        };

        self.stream.send(message).await.map_err(map_ws_error)
    }

    async fn recv_frame(&mut self) -> Result<Option<WireFrame>, BenchError> {
        loop {
            match self.stream.next().await {
                Some(Ok(WsMessage::Text(text))) => {
                    return Ok(Some(WireFrame::Text(text.as_str().to_owned())));
                }
                Some(Ok(WsMessage::Binary(bytes))) => {
                    return Ok(Some(WireFrame::Binary(bytes.to_vec())));
                }
                Some(Ok(WsMessage::Close(_))) | None => return Ok(None),
                // Pings are answered by tungstenite on the next read or write.
                Some(Ok(_)) => continue,
                Some(Err(err)) => {
                    return match map_ws_error(err) {
                        BenchError::ConnectionClosed => Ok(None),
                        other => Err(other),
                    };
                }
            }
        }
    }

    async fn close(&mut self) -> Result<(), BenchError> {
        match self.stream.close(None).await.map_err(map_ws_error) {
            Ok(()) | Err(BenchError::ConnectionClosed) => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// Folds every "the peer went away" flavour of tungstenite error into
/// [`BenchError::ConnectionClosed`].
fn map_ws_error(err: WsError) -> BenchError {
    match err {
        WsError::ConnectionClosed
        | WsError::AlreadyClosed
        | WsError::Protocol(ProtocolError::ResetWithoutClosingHandshake) => {
            BenchError::ConnectionClosed
        }
        WsError::Io(io_err)
            if matches!(
                io_err.kind(),
                ErrorKind::ConnectionReset
                    | ErrorKind::ConnectionAborted
                    | ErrorKind::BrokenPipe
                    | ErrorKind::UnexpectedEof
            ) =>
        {
            BenchError::ConnectionClosed
        }
        WsError::Io(io_err) => BenchError::Transport(io_err),
        other => BenchError::Transport(io::Error::other(other)),
    }
}
