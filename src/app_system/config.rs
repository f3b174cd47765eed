use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Where the catalog comes from.
///
/// On the command line the UI-test launch arguments `uiTestSampleData` and
/// `uiTestStagingData` are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    #[default]
    Live,
    #[value(name = "sample_data", alias = "uiTestSampleData")]
    SampleData,
    #[value(alias = "uiTestStagingData")]
    Staging,
}

impl DataSource {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        <Self as ValueEnum>::from_str(value, false).map_err(|_| ConfigError::InvalidValue {
            key: "STORE_DATA_SOURCE".to_string(),
            value: value.to_string(),
        })
    }
}

/// Settings for the store: catalog location, data source and actor sizing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub base_url: String,
    pub products_path: String,
    pub data_source: DataSource,
    pub request_buffer: usize,
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "https://your-base-url.example/".to_string(),
            products_path: "path/to/Products.json".to_string(),
            data_source: DataSource::Live,
            request_buffer: 32,
            timeout_secs: 10,
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Applies `STORE_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by `lookup`, using the `STORE_*` keys.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(base_url) = lookup("STORE_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(products_path) = lookup("STORE_PRODUCTS_PATH") {
            self.products_path = products_path;
        }
        if let Some(source) = lookup("STORE_DATA_SOURCE") {
            self.data_source = DataSource::parse(&source)?;
        }
        Ok(self)
    }

    /// A data source given on the command line wins over file and
    /// environment settings.
    pub fn with_launch_source(mut self, source: Option<DataSource>) -> Self {
        if let Some(source) = source {
            info!(?source, "Data source selected by launch argument");
            self.data_source = source;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
