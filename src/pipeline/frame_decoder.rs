use crate::pipeline::{CompressionStrategy, FrameDecodeError};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Recovers logical messages from received frames.
pub trait FrameDecoder: Send {
    /// Decodes one frame, handing each logical message to `on_message`, and
    /// returns how many messages the frame carried.
    ///
    /// Any failure is fatal for the run; there is no partial recovery.
    fn decode_frame<F>(&mut self, frame: &[u8], on_message: F) -> Result<usize, FrameDecodeError>
    where
        F: FnMut(&[u8]);
}

pub struct SingleFrameDecoder<C> {
    compression: C,
    scratch: Vec<u8>,
}

impl<C: CompressionStrategy> SingleFrameDecoder<C> {
    pub fn new(compression: C) -> Self {
        Self {
            compression,
            scratch: Vec::new(),
        }
    }
}

impl<C: CompressionStrategy> Default for SingleFrameDecoder<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: CompressionStrategy> FrameDecoder for SingleFrameDecoder<C> {
    #[inline]
    fn decode_frame<F>(
        &mut self,
        frame: &[u8],
        mut on_message: F,
    ) -> Result<usize, FrameDecodeError>
    where
        F: FnMut(&[u8]),
    {
        let payload = self.compression.decode(frame, &mut self.scratch)?;
        on_message(payload);
        Ok(1)
    }
}

pub struct BatchFrameDecoder<C> {
    compression: C,
    batch_factor: usize,
    scratch: Vec<u8>,
    message: Vec<u8>,
}

impl<C: CompressionStrategy> BatchFrameDecoder<C> {
    pub fn new(compression: C, batch_factor: usize) -> Self {
        Self {
            compression,
            batch_factor: batch_factor.max(1),
            scratch: Vec::new(),
            message: Vec::new(),
        }
    }
}

impl<C: CompressionStrategy> FrameDecoder for BatchFrameDecoder<C> {
    fn decode_frame<F>(
        &mut self,
        frame: &[u8],
        mut on_message: F,
    ) -> Result<usize, FrameDecodeError>
    where
        F: FnMut(&[u8]),
    {
        let body = self.compression.decode(frame, &mut self.scratch)?;
        let batch: Vec<String> = serde_json::from_slice(body).map_err(FrameDecodeError::Json)?;

        if batch.is_empty() {
            return Err(FrameDecodeError::EmptyBatch);
        }
        if batch.len() > self.batch_factor {
            return Err(FrameDecodeError::OversizedBatch {
                max: self.batch_factor,
                actual: batch.len(),
            });
        }

        for encoded in &batch {
            self.message.clear();
            STANDARD.decode_vec(encoded, &mut self.message)?;
            on_message(&self.message);
        }

        Ok(batch.len())
    }
}
