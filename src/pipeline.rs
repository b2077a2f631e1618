mod compression;
mod content_source;
mod frame_decoder;
mod frame_encoder;
mod pipeline_error;
mod wire_frame;

pub use compression::{CompressionStrategy, Gzip, Uncompressed};
pub use content_source::{ContentSource, FixedContent, RandomMessagePool};
pub use frame_decoder::{BatchFrameDecoder, FrameDecoder, SingleFrameDecoder};
pub use frame_encoder::{BatchFrameEncoder, FrameEncoder, SingleFrameEncoder};
pub use pipeline_error::{FrameDecodeError, FrameEncodeError};
pub use wire_frame::WireFrame;
