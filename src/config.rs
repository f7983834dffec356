//! Run configuration.
//!
//! Values come from defaults, an optional TOML file, and command-line
//! overrides, in that order of precedence. `RawConfig` keeps signed integers so
//! that negative input can be reported instead of failing to parse.

use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_BITS_LEN: i64 = 100;
pub const DEFAULT_SAMPLE_SIZE: i64 = 15;
pub const DEFAULT_SEED: u64 = 0;

/// Measurement model used for Bob (and Eve).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Deterministic on matching basis, fair coin otherwise.
    #[default]
    Ideal,
    /// Density-matrix preparation and projective collapse.
    DensityMatrix,
}

/// Unvalidated configuration as read from a file or the command line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    pub bits_len: i64,
    pub sample_size: i64,
    pub seed: u64,
    pub eve_ratio: f64,
    pub backend: Backend,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            bits_len: DEFAULT_BITS_LEN,
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
            eve_ratio: 0.0,
            backend: Backend::Ideal,
        }
    }
}

impl RawConfig {
    /// Load from TOML file. Missing keys fall back to defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let txt = fs::read_to_string(path)?;
        Self::from_toml_str(&txt)
    }

    pub fn from_toml_str(txt: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(txt)?)
    }
}

/// Validated parameters for one BB84 run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bb84Config {
    /// Number of qubits Alice sends (N).
    pub bits_len: usize,
    /// Number of sifted bits revealed for comparison.
    pub sample_size: usize,
    pub seed: u64,
    /// Fraction of qubits the eavesdropper intercepts. Zero disables Eve.
    pub eve_ratio: f64,
    pub backend: Backend,
}

impl Default for Bb84Config {
    fn default() -> Self {
        Self {
            bits_len: DEFAULT_BITS_LEN as usize,
            sample_size: DEFAULT_SAMPLE_SIZE as usize,
            seed: DEFAULT_SEED,
            eve_ratio: 0.0,
            backend: Backend::Ideal,
        }
    }
}

impl Bb84Config {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_eve_ratio(mut self, ratio: f64) -> Self {
        self.eve_ratio = ratio;
        self
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Re-checks the invariants of an already-built config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bits_len == 0 {
            return Err(ConfigError::InvalidBitsLen(0));
        }
        validate_ratio(self.eve_ratio)
    }
}

impl TryFrom<RawConfig> for Bb84Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        if raw.bits_len <= 0 {
            return Err(ConfigError::InvalidBitsLen(raw.bits_len));
        }
        if raw.sample_size < 0 {
            return Err(ConfigError::NegativeSampleSize(raw.sample_size));
        }
        validate_ratio(raw.eve_ratio)?;

        Ok(Self {
            bits_len: raw.bits_len as usize,
            sample_size: raw.sample_size as usize,
            seed: raw.seed,
            eve_ratio: raw.eve_ratio,
            backend: raw.backend,
        })
    }
}

pub(crate) fn validate_ratio(p: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(ConfigError::InvalidEveRatio(p));
    }
    Ok(())
}
