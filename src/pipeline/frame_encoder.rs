use crate::pipeline::{CompressionStrategy, ContentSource, FrameEncodeError, WireFrame};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Turns logical messages into wire frames.
pub trait FrameEncoder: Send {
    /// Logical messages carried by one full frame.
    fn messages_per_frame(&self) -> usize;

    /// Encodes the next `count` logical messages as one frame.
    ///
    /// `count` is clamped to `1..=messages_per_frame()`; the producer passes
    /// a smaller count only for the final frame of a bounded run.
    fn encode_frame(&mut self, count: usize) -> Result<WireFrame, FrameEncodeError>;
}

/// One raw payload per frame.
pub struct SingleFrameEncoder<S, C> {
    source: S,
    compression: C,
}

impl<S: ContentSource, C: CompressionStrategy> SingleFrameEncoder<S, C> {
    pub fn new(source: S, compression: C) -> Self {
        Self {
            source,
            compression,
        }
    }
}

impl<S: ContentSource, C: CompressionStrategy> FrameEncoder for SingleFrameEncoder<S, C> {
    #[inline]
    fn messages_per_frame(&self) -> usize {
        1
    }

    #[inline]
    fn encode_frame(&mut self, _count: usize) -> Result<WireFrame, FrameEncodeError> {
        let payload = self.source.next_payload().to_vec();
        self.compression.encode_binary(payload)
    }
}

/// Packs up to `batch_factor` base64-encoded payloads into a JSON array.
pub struct BatchFrameEncoder<S, C> {
    source: S,
    compression: C,
    batch_factor: usize,
    batch: Vec<String>,
}

impl<S: ContentSource, C: CompressionStrategy> BatchFrameEncoder<S, C> {
    pub fn new(source: S, compression: C, batch_factor: usize) -> Self {
        let batch_factor = batch_factor.max(1);
        Self {
            source,
            compression,
            batch_factor,
            batch: Vec::with_capacity(batch_factor),
        }
    }
}

impl<S: ContentSource, C: CompressionStrategy> FrameEncoder for BatchFrameEncoder<S, C> {
    #[inline]
    fn messages_per_frame(&self) -> usize {
        self.batch_factor
    }

    fn encode_frame(&mut self, count: usize) -> Result<WireFrame, FrameEncodeError> {
        let count = count.clamp(1, self.batch_factor);

        // Accumulator is reset for every frame, so a short final frame never
        // carries stale entries.
        self.batch.clear();
        for _ in 0..count {
            self.batch.push(STANDARD.encode(self.source.next_payload()));
        }

        let body = serde_json::to_string(&self.batch).map_err(FrameEncodeError::Json)?;
        self.compression.encode_text(body)
    }
}
