use qkd_bb84::errors::ConfigError;
use qkd_bb84::{Backend, Bb84Config, RawConfig};
use std::io::Write;

#[test]
fn loads_config_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "bits_len = 256\nsample_size = 20\nseed = 9\neve_ratio = 0.25\nbackend = \"density_matrix\"").unwrap();

    let raw = RawConfig::from_toml_file(file.path()).unwrap();
    let config = Bb84Config::try_from(raw).unwrap();
    assert_eq!(config.bits_len, 256);
    assert_eq!(config.sample_size, 20);
    assert_eq!(config.seed, 9);
    assert_eq!(config.eve_ratio, 0.25);
    assert_eq!(config.backend, Backend::DensityMatrix);
}

#[test]
fn missing_file_is_io_error() {
    let err = RawConfig::from_toml_file(std::path::Path::new("/nonexistent/bb84.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn negative_values_in_file_are_rejected() {
    let raw = RawConfig::from_toml_str("sample_size = -4").unwrap();
    assert!(matches!(
        Bb84Config::try_from(raw),
        Err(ConfigError::NegativeSampleSize(-4))
    ));
}

#[test]
fn bundled_reference_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("bb84.toml");
    let raw = RawConfig::from_toml_file(&path).unwrap();
    assert_eq!(raw, RawConfig::default());
    assert_eq!(Bb84Config::try_from(raw).unwrap(), Bb84Config::default());
}
