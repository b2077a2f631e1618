use crate::pipeline::{FrameDecodeError, FrameEncodeError};
use std::fmt;
use std::io;

/// Errors that end a benchmark run.
///
/// None of these are retried. A run either completes cleanly or aborts with
/// one of these, and the caller decides how to report it.
#[derive(Debug)]
pub enum BenchError {
    /// The remote peer closed or reset the channel.
    ConnectionClosed,

    /// A received frame could not be decompressed, parsed or base64-decoded.
    MalformedFrame(FrameDecodeError),

    /// The session parameters could not be written (consumer) or read
    /// (producer) before streaming started.
    HandshakeFailure(String),

    /// The producer could not build a frame.
    Encode(FrameEncodeError),

    /// Any other transport-level I/O failure.
    Transport(io::Error),
}

impl BenchError {
    pub fn is_connection_closed(&self) -> bool {
        matches!(self, BenchError::ConnectionClosed)
    }
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::ConnectionClosed => write!(f, "connection closed by peer"),
            BenchError::MalformedFrame(e) => write!(f, "malformed frame: {}", e),
            BenchError::HandshakeFailure(msg) => write!(f, "handshake failed: {}", msg),
            BenchError::Encode(e) => write!(f, "frame encoding failed: {}", e),
            BenchError::Transport(e) => write!(f, "transport error: {}", e),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::MalformedFrame(e) => Some(e),
            BenchError::Encode(e) => Some(e),
            BenchError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FrameDecodeError> for BenchError {
    fn from(err: FrameDecodeError) -> Self {
        BenchError::MalformedFrame(err)
    }
}

impl From<FrameEncodeError> for BenchError {
    fn from(err: FrameEncodeError) -> Self {
        BenchError::Encode(err)
    }
}

impl From<io::Error> for BenchError {
    fn from(err: io::Error) -> Self {
        BenchError::Transport(err)
    }
}
