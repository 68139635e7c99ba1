use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::types::Result;

fn default_limit() -> u32 {
    50
}

/// Search configuration, loaded once in `main` and passed down by
/// reference. There is no ambient config object.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub keywords: Vec<String>,
    pub locations: Vec<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub include_words: Vec<String>,
    #[serde(default)]
    pub exclude_words: Vec<String>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&raw)?;
        debug!(
            keywords = config.keywords.len(),
            locations = config.locations.len(),
            limit = config.limit,
            "loaded configuration"
        );
        Ok(config)
    }
}
