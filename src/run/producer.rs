use crate::BenchError;
use crate::pipeline::FrameEncoder;
use crate::run::{CancelSignal, ProducerReport};
use crate::transport::FrameTransport;

/// When the producer's send loop stops on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendLimit {
    /// Stop after this many logical messages. The last frame may be short.
    Messages(u64),

    /// Keep sending until the peer goes away or the run is cancelled.
    Unbounded,
}

/// The producer's send loop.
///
/// Frames are written back to back with no acknowledgement in between;
/// backpressure comes only from the transport's own blocking write. A closed
/// channel surfaces as [`BenchError::ConnectionClosed`], since there is
/// nobody left to send to.
pub async fn stream_frames<T, E>(
    transport: &mut T,
    encoder: &mut E,
    limit: SendLimit,
    cancel: &CancelSignal,
) -> Result<ProducerReport, BenchError>
where
    T: FrameTransport + ?Sized,
    E: FrameEncoder,
{
    let per_frame = encoder.messages_per_frame() as u64;
    let mut report = ProducerReport::default();

    loop {
        if cancel.is_cancelled() {
            tracing::debug!("Producer cancelled after {} frames", report.frames_sent);
            break;
        }

        let count = match limit {
            SendLimit::Messages(total) => {
                let remaining = total.saturating_sub(report.messages_sent);
                if remaining == 0 {
                    break;
                }
                remaining.min(per_frame)
            }
            SendLimit::Unbounded => per_frame,
        };

        let frame = encoder.encode_frame(count as usize)?;

        if let Err(err) = transport.send_frame(frame).await {
            tracing::debug!(
                "Producer stopped after {} frames / {} messages: {}",
                report.frames_sent,
                report.messages_sent,
                err
            );
            return Err(err);
        }

        report.frames_sent += 1;
        report.messages_sent += count;
    }

    Ok(report)
}
