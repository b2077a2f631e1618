use crate::BenchError;
use crate::pipeline::WireFrame;
use crate::transport::FrameTransport;
use futures::channel::mpsc;
use futures::{SinkExt, StreamExt};

/// One end of an in-process transport.
///
/// Each direction is a bounded channel, so a slow reader applies
/// backpressure to the writer the same way a socket would.
pub struct MemoryTransport {
    tx: Option<mpsc::Sender<WireFrame>>,
    rx: mpsc::Receiver<WireFrame>,
}

/// Creates two connected transport ends, each buffering up to `capacity`
/// frames in flight.
pub fn memory_transport_pair(capacity: usize) -> (MemoryTransport, MemoryTransport) {
    let (a_tx, b_rx) = mpsc::channel(capacity);
    let (b_tx, a_rx) = mpsc::channel(capacity);

    (
        MemoryTransport {
            tx: Some(a_tx),
            rx: a_rx,
        },
        MemoryTransport {
            tx: Some(b_tx),
            rx: b_rx,
        },
    )
}

#[async_trait::async_trait]
impl FrameTransport for MemoryTransport {
    async fn send_frame(&mut self, frame: WireFrame) -> Result<(), BenchError> {
        let Some(tx) = self.tx.as_mut() else {
            return Err(BenchError::ConnectionClosed);
        };
        tx.send(frame)
            .await
            .map_err(|_| BenchError::ConnectionClosed)
    }

    async fn recv_frame(&mut self) -> Result<Option<WireFrame>, BenchError> {
        Ok(self.rx.next().await)
    }

    async fn close(&mut self) -> Result<(), BenchError> {
        // Dropping the sender lets the peer drain what is buffered, then see
        // end-of-stream. Closing the receiver fails the peer's next send.
        self.tx = None;
        self.rx.close();
        Ok(())
    }
}
