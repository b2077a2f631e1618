use std::fmt;
use std::io;

#[derive(Debug)]
pub enum FrameEncodeError {
    Gzip(io::Error),

    /// The batch array could not be serialized.
    Json(serde_json::Error),
}

impl fmt::Display for FrameEncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameEncodeError::Gzip(e) => write!(f, "gzip compression failed: {}", e),
            FrameEncodeError::Json(e) => write!(f, "batch serialization failed: {}", e),
        }
    }
}

impl std::error::Error for FrameEncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameEncodeError::Gzip(e) => Some(e),
            FrameEncodeError::Json(e) => Some(e),
        }
    }
}

#[derive(Debug)]
pub enum FrameDecodeError {
    /// The frame is not a valid gzip stream.
    Gzip(io::Error),

    /// The frame is not a JSON array of strings.
    Json(serde_json::Error),

    /// An array element is not standard padded base64.
    Base64(base64::DecodeError),

    /// A batched frame carried an empty array.
    EmptyBatch,

    /// A batched frame carried more elements than the batch factor allows.
    OversizedBatch { max: usize, actual: usize },
}

impl fmt::Display for FrameDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameDecodeError::Gzip(e) => write!(f, "gzip decompression failed: {}", e),
            FrameDecodeError::Json(e) => write!(f, "batch is not a JSON string array: {}", e),
            FrameDecodeError::Base64(e) => write!(f, "batch element is not base64: {}", e),
            FrameDecodeError::EmptyBatch => write!(f, "batch frame carried no messages"),
            FrameDecodeError::OversizedBatch { max, actual } => write!(
                f,
                "batch frame carried {} messages, at most {} expected",
                actual, max
            ),
        }
    }
}

impl std::error::Error for FrameDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameDecodeError::Gzip(e) => Some(e),
            FrameDecodeError::Json(e) => Some(e),
            FrameDecodeError::Base64(e) => Some(e),
            _ => None,
        }
    }
}

impl From<base64::DecodeError> for FrameDecodeError {
    fn from(err: base64::DecodeError) -> Self {
        FrameDecodeError::Base64(err)
    }
}
