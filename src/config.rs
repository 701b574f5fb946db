//! YAML configuration and its merge with command-line flags.
//!
//! ```yaml
//! locale: de_DE
//! seed: 42
//! batch_size: 25
//! lookups: ./data/custom_lookups.json
//! ```

use crate::batch::DEFAULT_BATCH_SIZE;
use crate::locale::EN_US;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SEED: i64 = 1;

/// Contents of a YAML config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorYamlConfig {
    pub locale: Option<String>,
    pub seed: Option<i64>,
    pub batch_size: Option<u32>,
    /// Lookup dataset replacing the built-in one
    pub lookups: Option<PathBuf>,
}

impl GeneratorYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(content)?)
    }
}

/// Settings after merging defaults, the config file and CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub locale: String,
    pub seed: i64,
    pub batch_size: u32,
    pub lookups: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            locale: EN_US.to_string(),
            seed: DEFAULT_SEED,
            batch_size: DEFAULT_BATCH_SIZE,
            lookups: None,
        }
    }
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }
}

/// Layers values in increasing precedence: defaults, file, flags.
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    file: GeneratorYamlConfig,
    locale: Option<String>,
    seed: Option<i64>,
    batch_size: Option<u32>,
    lookups: Option<PathBuf>,
}

impl GeneratorConfigBuilder {
    pub fn file(mut self, file: GeneratorYamlConfig) -> Self {
        self.file = file;
        self
    }

    /// Load the YAML file at `path`, if given.
    pub fn config_path(self, path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Ok(self.file(GeneratorYamlConfig::load(path)?)),
            None => Ok(self),
        }
    }

    pub fn locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }

    pub fn seed(mut self, seed: Option<i64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn batch_size(mut self, batch_size: Option<u32>) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn lookups(mut self, lookups: Option<PathBuf>) -> Self {
        self.lookups = lookups;
        self
    }

    pub fn build(self) -> anyhow::Result<GeneratorConfig> {
        let defaults = GeneratorConfig::default();
        let config = GeneratorConfig {
            locale: self
                .locale
                .or(self.file.locale)
                .unwrap_or(defaults.locale),
            seed: self.seed.or(self.file.seed).unwrap_or(defaults.seed),
            batch_size: self
                .batch_size
                .or(self.file.batch_size)
                .unwrap_or(defaults.batch_size),
            lookups: self.lookups.or(self.file.lookups),
        };

        if config.seed < 0 {
            anyhow::bail!("seed must be non-negative, got {}", config.seed);
        }
        if config.batch_size == 0 {
            anyhow::bail!("batch_size must be at least 1");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let file = GeneratorYamlConfig::from_yaml_str("  \n").unwrap();
        assert_eq!(file, GeneratorYamlConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let file = GeneratorYamlConfig::from_yaml_str("locale: de_DE\nseed: 9\n").unwrap();
        let config = GeneratorConfig::builder()
            .file(file)
            .seed(Some(3))
            .build()
            .unwrap();
        assert_eq!(config.locale, "de_DE");
        assert_eq!(config.seed, 3);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(GeneratorYamlConfig::from_yaml_str("colour: blue\n").is_err());
    }
}
