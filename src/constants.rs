// Pipeline defaults exposed to the CLI
pub const DEFAULT_UNIT_SIZE: u32 = 100;
pub const DEFAULT_BATCH_FACTOR: u32 = 1;
pub const DEFAULT_TARGET_COUNT: u64 = 1_000_000;
pub const DEFAULT_PORT: u16 = 8765;

/// Byte repeated `unit_size` times when content mode is `Fixed`.
pub const FIXED_CONTENT_BYTE: u8 = b'a';

/// Seed for the sequence that fills the random message pool.
pub const POOL_SEED: u64 = 42;

/// Seed for the sequence that picks pool entries for each logical message.
pub const SELECTION_SEED: u64 = 42;

/// ChaCha stream used by the selection sequence so it never overlaps the
/// pool sequence, even though both share a seed.
pub const SELECTION_STREAM: u64 = 1;

/// Number of progress lines emitted by the consumer over a bounded run.
pub const PROGRESS_LOG_STEPS: u64 = 10;

/// Frames buffered by an in-memory transport before `send_frame` waits.
pub const DEFAULT_MEMORY_TRANSPORT_CAPACITY: usize = 64;

/// Route the producer endpoint is served on.
pub const PRODUCER_WS_PATH: &str = "/ws";
