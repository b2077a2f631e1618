use crate::BenchError;
use crate::pipeline::WireFrame;

/// A reliable, ordered, message-framed duplex channel.
///
/// Every `send_frame` / `recv_frame` call moves exactly one frame. No
/// timeouts are applied at this layer: a stalled peer stalls the caller.
#[async_trait::async_trait]
pub trait FrameTransport: Send {
    /// Writes one frame. Fails with [`BenchError::ConnectionClosed`] once the
    /// peer is gone.
    async fn send_frame(&mut self, frame: WireFrame) -> Result<(), BenchError>;

    /// Reads one frame. `Ok(None)` means the peer closed the channel.
    async fn recv_frame(&mut self) -> Result<Option<WireFrame>, BenchError>;

    /// Releases the channel. Closing an already closed channel is not an error.
    async fn close(&mut self) -> Result<(), BenchError>;
}
