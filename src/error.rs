// Errors for the fallible edges: config loading and sound synthesis.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config field `{field}` is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthError {
    #[error("refusing to encode an empty sample buffer")]
    EmptyBuffer,

    #[error("{samples} samples do not fit in a WAV data chunk")]
    TooLong { samples: usize },
}
