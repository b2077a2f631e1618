use crate::BenchError;
use crate::pipeline::FrameDecoder;
use crate::run::{CancelSignal, ProgressState, RunReport};
use crate::transport::FrameTransport;
use std::hint::black_box;

/// The consumer's receive loop. Decoded messages are discarded.
pub async fn drain_frames<T, D>(
    transport: &mut T,
    decoder: &mut D,
    target_count: u64,
    cancel: &CancelSignal,
) -> Result<RunReport, BenchError>
where
    T: FrameTransport + ?Sized,
    D: FrameDecoder,
{
    drain_frames_with(transport, decoder, target_count, cancel, |message| {
        black_box(message);
    })
    .await
}

/// Like [`drain_frames`], but hands every decoded logical message to
/// `on_message` in arrival order.
///
/// Stops once `target_count` logical messages have been decoded, the peer
/// closes the channel, or `cancel` is observed between frames. Any decode
/// failure aborts the run with [`BenchError::MalformedFrame`].
pub async fn drain_frames_with<T, D, F>(
    transport: &mut T,
    decoder: &mut D,
    target_count: u64,
    cancel: &CancelSignal,
    mut on_message: F,
) -> Result<RunReport, BenchError>
where
    T: FrameTransport + ?Sized,
    D: FrameDecoder,
    F: FnMut(&[u8]) + Send,
{
    let mut progress = ProgressState::start(target_count);

    while !progress.is_complete() {
        if cancel.is_cancelled() {
            tracing::debug!(
                "Consumer cancelled after {} messages",
                progress.messages_received()
            );
            break;
        }

        let frame = match transport.recv_frame().await {
            Ok(Some(frame)) => frame,
            Ok(None) | Err(BenchError::ConnectionClosed) => {
                tracing::info!(
                    "Producer closed the connection after {} messages",
                    progress.messages_received()
                );
                break;
            }
            Err(err) => return Err(err),
        };

        let decoded = decoder.decode_frame(frame.as_bytes(), &mut on_message)?;
        progress.record_frame(decoded);
    }

    Ok(progress.finish())
}
