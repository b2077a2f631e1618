use wsbench::config::{Compression, ConfigError, ContentMode, PipelineConfig};
use wsbench::constants::{DEFAULT_BATCH_FACTOR, DEFAULT_TARGET_COUNT, DEFAULT_UNIT_SIZE};

#[test]
fn defaults_match_cli_surface() {
    let config = PipelineConfig::default();

    assert_eq!(config.unit_size, DEFAULT_UNIT_SIZE);
    assert_eq!(config.batch_factor, DEFAULT_BATCH_FACTOR);
    assert_eq!(config.target_count, DEFAULT_TARGET_COUNT);
    assert_eq!(config.compression, Compression::None);
    assert_eq!(config.content_mode, ContentMode::Fixed);
    assert!(config.validate().is_ok());
    assert!(!config.is_batched());
}

#[test]
fn new_rejects_zero_values() {
    assert_eq!(
        PipelineConfig::new(0, 1, Compression::None, ContentMode::Fixed, 1),
        Err(ConfigError::ZeroUnitSize)
    );
    assert_eq!(
        PipelineConfig::new(1, 0, Compression::None, ContentMode::Fixed, 1),
        Err(ConfigError::ZeroBatchFactor)
    );
    assert_eq!(
        PipelineConfig::new(1, 1, Compression::None, ContentMode::Fixed, 0),
        Err(ConfigError::ZeroTargetCount)
    );
}

#[test]
fn frame_count_rounds_up_for_short_final_batch() {
    let config = PipelineConfig::new(10, 4, Compression::Gzip, ContentMode::Fixed, 10).unwrap();

    assert!(config.is_batched());
    assert_eq!(config.frame_count(), 3);

    let exact = PipelineConfig::new(10, 5, Compression::Gzip, ContentMode::Fixed, 10).unwrap();
    assert_eq!(exact.frame_count(), 2);
}

#[test]
fn compression_parses_case_insensitively() {
    assert_eq!("None".parse::<Compression>(), Ok(Compression::None));
    assert_eq!("GZIP".parse::<Compression>(), Ok(Compression::Gzip));
    assert_eq!("gzip".parse::<Compression>(), Ok(Compression::Gzip));
    assert_eq!(
        "brotli".parse::<Compression>(),
        Err(ConfigError::UnknownCompression("brotli".to_string()))
    );
}

#[test]
fn content_mode_parses_case_insensitively() {
    assert_eq!("Random".parse::<ContentMode>(), Ok(ContentMode::Random));
    assert_eq!("fixed".parse::<ContentMode>(), Ok(ContentMode::Fixed));
    assert!("other".parse::<ContentMode>().is_err());
}
