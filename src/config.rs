use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Extension given to derived output paths when none is specified.
    pub signed_extension: Option<String>,
    /// Ceiling for whole-buffer reads; larger inputs are rejected rather
    /// than partially consumed.
    pub max_file_size: Option<u64>,
    /// Whether the output path may equal the input path.
    pub allow_in_place: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            signed_extension: Some("signed".to_string()),
            max_file_size: Some(1024 * 1024 * 1024), // 1GB
            allow_in_place: Some(false),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = if path.extension().and_then(|s| s.to_str()) == Some("yaml") {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = if path.extension().and_then(|s| s.to_str()) == Some("yaml") {
            serde_yaml::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn signed_extension(&self) -> &str {
        self.signed_extension.as_deref().unwrap_or("signed")
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1024 * 1024 * 1024)
    }

    pub fn allow_in_place(&self) -> bool {
        self.allow_in_place.unwrap_or(false)
    }
}
