use crate::config::ConfigError;
use crate::constants::{DEFAULT_BATCH_FACTOR, DEFAULT_TARGET_COUNT, DEFAULT_UNIT_SIZE};
use std::fmt;
use std::str::FromStr;

/// Compression applied to each frame before it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Compression {
    #[default]
    None,
    Gzip,
}

impl FromStr for Compression {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Compression::None),
            "gzip" => Ok(Compression::Gzip),
            _ => Err(ConfigError::UnknownCompression(s.to_owned())),
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::None => write!(f, "None"),
            Compression::Gzip => write!(f, "GZIP"),
        }
    }
}

/// Where payload bytes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ContentMode {
    /// The same `unit_size` run of ASCII `a` for every message.
    #[default]
    Fixed,

    /// Draws from a seeded pool of random byte strings.
    Random,
}

impl FromStr for ContentMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => Ok(ContentMode::Fixed),
            "random" => Ok(ContentMode::Random),
            _ => Err(ConfigError::UnknownContentMode(s.to_owned())),
        }
    }
}

/// Parameters that fully determine how frames are encoded and decoded.
///
/// `batch_factor == 1` selects the single-message wire shape (raw bytes per
/// frame); anything larger selects the batched JSON-array shape. The two are
/// never mixed within a run.
///
/// On the producer side `target_count` is informational only: the number of
/// messages streamed comes from the consumer's handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub unit_size: u32,
    pub batch_factor: u32,
    pub compression: Compression,
    pub content_mode: ContentMode,
    pub target_count: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            unit_size: DEFAULT_UNIT_SIZE,
            batch_factor: DEFAULT_BATCH_FACTOR,
            compression: Compression::None,
            content_mode: ContentMode::Fixed,
            target_count: DEFAULT_TARGET_COUNT,
        }
    }
}

impl PipelineConfig {
    /// Builds a validated configuration.
    pub fn new(
        unit_size: u32,
        batch_factor: u32,
        compression: Compression,
        content_mode: ContentMode,
        target_count: u64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            unit_size,
            batch_factor,
            compression,
            content_mode,
            target_count,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unit_size == 0 {
            return Err(ConfigError::ZeroUnitSize);
        }
        if self.batch_factor == 0 {
            return Err(ConfigError::ZeroBatchFactor);
        }
        if self.target_count == 0 {
            return Err(ConfigError::ZeroTargetCount);
        }
        Ok(())
    }

    #[inline]
    pub fn is_batched(&self) -> bool {
        self.batch_factor > 1
    }

    /// Number of frames needed to carry `target_count` logical messages.
    /// The last batched frame is short when the division is not exact.
    pub fn frame_count(&self) -> u64 {
        self.target_count.div_ceil(u64::from(self.batch_factor.max(1)))
    }
}
