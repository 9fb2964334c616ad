use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{
    error::ConfigError,
    eval::thunk::{EvalPolicy, Thunk},
    InternalResult,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DeferralConfig {
    #[serde(default)]
    pub policy: EvalPolicy,

    #[serde(default)]
    pub gate: GateConfig,
}

impl DeferralConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        from_file(path)
    }

    pub fn from_json_str(s: &str) -> InternalResult<Self> {
        from_str(s)
    }

    /// Builds a [`Thunk`] that follows the configured evaluation policy.
    pub fn thunk<'a, T, F>(&self, f: F) -> Thunk<'a, T>
    where
        F: Fn() -> T + 'a,
    {
        Thunk::with_policy(self.policy, f)
    }
}

/// Switch for [`Gate`](crate::patterns::guard::Gate)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader).map_err(ConfigError::Parse)?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s).map_err(ConfigError::Parse)?;
    Ok(config)
}
