//! Configuration file support for purl-licenses.
//!
//! Provides YAML-based configuration through `purl-licenses.config.yml` files,
//! including data structures, file loading, validation, and conversion into
//! the option sets consumed by the use cases.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

use crate::application::dto::{DetailOptions, ResolutionOptions};
use crate::license_resolution::domain::SourceId;
use crate::license_resolution::policies::MergeStrategy;
use crate::shared::{EngineError, Result};

pub const CONFIG_FILENAME: &str = "purl-licenses.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Path to the JSON license data snapshot
    pub snapshot: Option<PathBuf>,
    pub log_level: Option<String>,
    pub format: Option<String>,
    pub resolver: Option<ResolverConfig>,
    pub resolution: Option<ResolutionConfig>,
    pub details: Option<DetailsConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Remote component service settings.
#[derive(Debug, Deserialize, Default)]
pub struct ResolverConfig {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub cache: Option<bool>,
}

/// Resolution pipeline settings.
#[derive(Debug, Deserialize, Default)]
pub struct ResolutionConfig {
    pub concurrency: Option<usize>,
    pub merge_strategy: Option<String>,
    pub sources: Option<Vec<String>>,
}

/// License detail lookup settings.
#[derive(Debug, Deserialize, Default)]
pub struct DetailsConfig {
    pub osadl_enrichment: Option<bool>,
}

impl ConfigFile {
    /// Resolution options with defaults for every unset key
    pub fn resolution_options(&self) -> Result<ResolutionOptions> {
        let mut options = ResolutionOptions::default();
        let Some(resolution) = &self.resolution else {
            return Ok(options);
        };

        if let Some(concurrency) = resolution.concurrency {
            options.concurrency = concurrency;
        }
        if let Some(strategy) = &resolution.merge_strategy {
            options.merge_strategy = MergeStrategy::from_str(strategy)
                .map_err(|details| EngineError::InvalidConfig { details })?;
        }
        if let Some(sources) = &resolution.sources {
            options.sources = sources
                .iter()
                .map(|s| SourceId::from_str(s))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|details| EngineError::InvalidConfig { details })?;
        }
        Ok(options)
    }

    pub fn detail_options(&self) -> DetailOptions {
        let mut options = DetailOptions::default();
        if let Some(enrichment) = self.details.as_ref().and_then(|d| d.osadl_enrichment) {
            options.osadl_enrichment = enrichment;
        }
        options
    }

    pub fn resolver_url(&self) -> Option<&str> {
        self.resolver.as_ref().and_then(|r| r.url.as_deref())
    }

    pub fn resolver_timeout_secs(&self) -> Option<u64> {
        self.resolver.as_ref().and_then(|r| r.timeout_secs)
    }

    pub fn resolver_cache(&self) -> bool {
        self.resolver.as_ref().and_then(|r| r.cache).unwrap_or(true)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn invalid(details: impl Into<String>) -> anyhow::Error {
    EngineError::InvalidConfig {
        details: details.into(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(resolver) = &config.resolver {
        if resolver.url.as_deref().is_some_and(|u| u.trim().is_empty()) {
            return Err(invalid(
                "resolver.url must not be empty.\n\n💡 Hint: Remove the key to resolve versions from the snapshot.",
            ));
        }
        if resolver.timeout_secs == Some(0) {
            return Err(invalid("resolver.timeout_secs must be greater than 0."));
        }
    }

    if let Some(resolution) = &config.resolution {
        if resolution.concurrency == Some(0) {
            return Err(invalid("resolution.concurrency must be greater than 0."));
        }
        if resolution.sources.as_ref().is_some_and(Vec::is_empty) {
            return Err(invalid(
                "resolution.sources must list at least one source.\n\n💡 Hint: Remove the key to use the default sources.",
            ));
        }
    }

    // surfaces unknown strategy or source names at load time
    config.resolution_options()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
pub fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "unknown config field will be ignored");
    }
}
