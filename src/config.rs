mod config_error;
mod pipeline_config;

pub use config_error::ConfigError;
pub use pipeline_config::{Compression, ContentMode, PipelineConfig};
