use crate::config::Compression;
use crate::pipeline::{FrameDecodeError, FrameEncodeError, WireFrame};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

/// How a finished frame body is wrapped for the wire and unwrapped on receipt.
///
/// Implementors are selected once per run by the run controller, so the
/// encode and decode loops are monomorphised per strategy.
pub trait CompressionStrategy: Default + Send + Sync + 'static {
    const KIND: Compression;

    /// Wraps raw payload bytes.
    fn encode_binary(&self, body: Vec<u8>) -> Result<WireFrame, FrameEncodeError>;

    /// Wraps a UTF-8 body such as a serialized batch array.
    fn encode_text(&self, body: String) -> Result<WireFrame, FrameEncodeError>;

    /// Recovers the frame body, using `scratch` when the body must be
    /// materialised.
    fn decode<'a>(
        &self,
        frame: &'a [u8],
        scratch: &'a mut Vec<u8>,
    ) -> Result<&'a [u8], FrameDecodeError>;
}

/// Passes frame bodies through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Uncompressed;

impl CompressionStrategy for Uncompressed {
    const KIND: Compression = Compression::None;

    #[inline]
    fn encode_binary(&self, body: Vec<u8>) -> Result<WireFrame, FrameEncodeError> {
        Ok(WireFrame::Binary(body))
    }

    #[inline]
    fn encode_text(&self, body: String) -> Result<WireFrame, FrameEncodeError> {
        Ok(WireFrame::Text(body))
    }

    #[inline]
    fn decode<'a>(
        &self,
        frame: &'a [u8],
        _scratch: &'a mut Vec<u8>,
    ) -> Result<&'a [u8], FrameDecodeError> {
        Ok(frame)
    }
}

/// Compresses each frame body as one gzip member.
#[derive(Debug, Default, Clone, Copy)]
pub struct Gzip;

impl Gzip {
    fn compress(&self, body: &[u8]) -> Result<Vec<u8>, FrameEncodeError> {
        let mut encoder = GzEncoder::new(
            Vec::with_capacity(body.len() / 2 + 32),
            flate2::Compression::default(),
        );
        encoder.write_all(body).map_err(FrameEncodeError::Gzip)?;
        encoder.finish().map_err(FrameEncodeError::Gzip)
    }
}

impl CompressionStrategy for Gzip {
    const KIND: Compression = Compression::Gzip;

    fn encode_binary(&self, body: Vec<u8>) -> Result<WireFrame, FrameEncodeError> {
        self.compress(&body).map(WireFrame::Binary)
    }

    fn encode_text(&self, body: String) -> Result<WireFrame, FrameEncodeError> {
        self.compress(body.as_bytes()).map(WireFrame::Binary)
    }

    fn decode<'a>(
        &self,
        frame: &'a [u8],
        scratch: &'a mut Vec<u8>,
    ) -> Result<&'a [u8], FrameDecodeError> {
        scratch.clear();
        GzDecoder::new(frame)
            .read_to_end(scratch)
            .map_err(FrameDecodeError::Gzip)?;
        Ok(&scratch[..])
    }
}
