use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::storage::ReadPolicy;

pub const DEFAULT_DATA_FILE: &str = "data.json";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

pub const ENV_DATA_FILE: &str = "QUICKNOTES_DATA_FILE";
pub const ENV_BIND: &str = "QUICKNOTES_BIND";
pub const ENV_STRICT: &str = "QUICKNOTES_STRICT";

/// Runtime configuration for the notes server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the whole note collection
    pub data_file: PathBuf,
    /// Address the HTTP server listens on
    pub bind: String,
    /// How an unreadable store file is treated
    pub read_policy: ReadPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            bind: DEFAULT_BIND.to_string(),
            read_policy: ReadPolicy::Lenient,
        }
    }
}

impl Config {
    /// Defaults overridden by `QUICKNOTES_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DATA_FILE).filter(|v| !v.is_empty()) {
            config.data_file = PathBuf::from(path);
        }
        if let Some(bind) = lookup(ENV_BIND).filter(|v| !v.is_empty()) {
            config.bind = bind;
        }
        if lookup(ENV_STRICT).is_some_and(|v| is_truthy(&v)) {
            config.read_policy = ReadPolicy::Strict;
        }

        config
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    pub fn strict(mut self) -> Self {
        self.read_policy = ReadPolicy::Strict;
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
