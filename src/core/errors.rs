use num_complex::Complex64;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum StateError {
    #[error("Trace is not unity: {0}")]
    InvalidTrace(Complex64),

    #[error("Outcome {0} has zero probability and cannot be collapsed onto")]
    ImpossibleOutcome(usize),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("bits_len must be positive, got {0}")]
    InvalidBitsLen(i64),

    #[error("sample_size must not be negative, got {0}")]
    NegativeSampleSize(i64),

    #[error("Invalid eavesdropping ratio: {0}. Must be between 0.0 and 1.0")]
    InvalidEveRatio(f64),

    #[error("trials must be positive")]
    NoTrials,

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Cannot sample {requested} more bit(s) from a key of length {remaining}")]
    InsufficientKey { remaining: usize, requested: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("State error: {0}")]
    State(#[from] StateError),
}
