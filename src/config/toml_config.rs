use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Optional TOML overlay so API credentials can live in a file instead of
/// the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: Option<ApiSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}
