use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Payloads must carry at least one byte.
    ZeroUnitSize,

    /// A frame must carry at least one logical message.
    ZeroBatchFactor,

    ZeroTargetCount,

    UnknownCompression(String),

    UnknownContentMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroUnitSize => write!(f, "unit size must be greater than zero"),
            ConfigError::ZeroBatchFactor => write!(f, "batch factor must be at least one"),
            ConfigError::ZeroTargetCount => write!(f, "target count must be greater than zero"),
            ConfigError::UnknownCompression(value) => {
                write!(f, "unknown compression `{}` (expected None or GZIP)", value)
            }
            ConfigError::UnknownContentMode(value) => {
                write!(f, "unknown content mode `{}` (expected Fixed or Random)", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
