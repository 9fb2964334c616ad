use std::io::Write;

use deferral::{
    config::{DeferralConfig, GateConfig},
    eval::thunk::EvalPolicy,
    ConfigError, Error,
};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"policy": "memoize", "gate": {{"enabled": false}}}}"#).unwrap();

    let config = DeferralConfig::from_file(file.path()).unwrap();
    assert_eq!(
        config,
        DeferralConfig {
            policy: EvalPolicy::Memoize,
            gate: GateConfig { enabled: false },
        }
    );
}

#[test]
fn test_partial_config_file_keeps_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"policy": "reevaluate"}}"#).unwrap();

    let config = DeferralConfig::from_file(file.path()).unwrap();
    assert_eq!(config, DeferralConfig::default());
}

#[test]
fn test_malformed_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "policy = memoize").unwrap();

    let result = DeferralConfig::from_file(file.path());
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}
