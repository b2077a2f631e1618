use clap::{Args, Parser, Subcommand};
use wsbench::config::{Compression, ConfigError, ContentMode, PipelineConfig};
use wsbench::constants::{
    DEFAULT_BATCH_FACTOR, DEFAULT_PORT, DEFAULT_TARGET_COUNT, DEFAULT_UNIT_SIZE,
};

#[derive(Parser)]
#[command(
    name = "wsbench",
    version,
    about = "Measures message throughput over a single WebSocket connection"
)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub role: Role,
}

#[derive(Subcommand)]
pub enum Role {
    /// Serve payload frames to every consumer that connects.
    Producer(ProducerArgs),

    /// Connect to a producer, drain the stream and report throughput.
    Consumer(ConsumerArgs),
}

#[derive(Args)]
pub struct PipelineArgs {
    /// Number of messages sent in one frame.
    #[arg(long, default_value_t = DEFAULT_BATCH_FACTOR)]
    pub batch_size: u32,

    /// Compression applied to every frame.
    #[arg(long, value_enum, ignore_case = true)]
    pub compression: Compression,
}

#[derive(Args)]
pub struct ProducerArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Size in bytes of a single message.
    #[arg(long, default_value_t = DEFAULT_UNIT_SIZE)]
    pub message_size: u32,

    /// Use seeded random payloads instead of a fixed byte pattern.
    #[arg(long)]
    pub random_message: bool,

    /// Stream until the consumer disconnects instead of stopping at the
    /// message count it asks for.
    #[arg(long)]
    pub unbounded: bool,
}

#[derive(Args)]
pub struct ConsumerArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[arg(long, default_value = "localhost")]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Number of messages to receive before reporting.
    #[arg(long, default_value_t = DEFAULT_TARGET_COUNT)]
    pub num_messages: u64,
}

impl ProducerArgs {
    pub fn pipeline_config(&self) -> Result<PipelineConfig, ConfigError> {
        let content_mode = if self.random_message {
            ContentMode::Random
        } else {
            ContentMode::Fixed
        };

        PipelineConfig::new(
            self.message_size,
            self.pipeline.batch_size,
            self.pipeline.compression,
            content_mode,
            DEFAULT_TARGET_COUNT,
        )
    }
}

impl ConsumerArgs {
    pub fn pipeline_config(&self) -> Result<PipelineConfig, ConfigError> {
        // Payload size and content only matter on the producer side.
        PipelineConfig::new(
            DEFAULT_UNIT_SIZE,
            self.pipeline.batch_size,
            self.pipeline.compression,
            ContentMode::Fixed,
            self.num_messages,
        )
    }
}
