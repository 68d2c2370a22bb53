// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repository configuration
//!
//! Loadable from TOML. Key attribute names and connection parameters are
//! recognized for concrete store clients; the repository logic itself only
//! consumes `snapshot_frequency`.

use crate::policy::DEFAULT_SNAPSHOT_FREQUENCY;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors from configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Repository configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryConfig {
    /// Backing table identifier (required)
    pub table: String,
    /// Partition-key attribute name in the backing table
    #[serde(default = "default_partition_key_attr")]
    pub partition_key_attr: String,
    /// Sort-key attribute name in the backing table
    #[serde(default = "default_sort_key_attr")]
    pub sort_key_attr: String,
    /// Events-per-snapshot cadence; also the read-path tail page size
    #[serde(default = "default_snapshot_frequency")]
    pub snapshot_frequency: u64,
    /// Reserved for secondary-index queries, currently unused
    #[serde(default)]
    pub index_name: Option<String>,
    /// Opaque backing-store connection parameters, passed through to the
    /// concrete store client
    #[serde(default)]
    pub connection: toml::Table,
}

fn default_partition_key_attr() -> String {
    "PK".to_string()
}

fn default_sort_key_attr() -> String {
    "SK".to_string()
}

fn default_snapshot_frequency() -> u64 {
    DEFAULT_SNAPSHOT_FREQUENCY
}

impl RepositoryConfig {
    /// Config for the given table with all defaults
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            partition_key_attr: default_partition_key_attr(),
            sort_key_attr: default_sort_key_attr(),
            snapshot_frequency: default_snapshot_frequency(),
            index_name: None,
            connection: toml::Table::new(),
        }
    }

    /// Override the snapshot cadence
    pub fn with_snapshot_frequency(mut self, frequency: u64) -> Self {
        self.snapshot_frequency = frequency;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Reject configurations the repository cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.is_empty() {
            return Err(ConfigError::Invalid("table must not be empty".to_string()));
        }
        if self.snapshot_frequency == 0 {
            return Err(ConfigError::Invalid(
                "snapshot_frequency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
