mod frame_transport;
mod memory_transport;

pub use frame_transport::FrameTransport;
pub use memory_transport::{MemoryTransport, memory_transport_pair};
