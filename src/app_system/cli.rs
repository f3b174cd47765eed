use std::path::PathBuf;

use clap::Parser;

use super::config::{ConfigError, DataSource, StoreConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "store_cart")]
#[command(about = "Browse the store catalog and build a cart")]
pub struct StoreArgs {
    /// Path to TOML configuration file
    #[arg(short, long, env = "STORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog source; `uiTestSampleData` and `uiTestStagingData` are accepted too
    #[arg(long, value_enum)]
    pub data_source: Option<DataSource>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl StoreArgs {
    /// Builds the effective config: file (or defaults), then `STORE_*`
    /// environment overrides, then the command-line data source.
    pub fn load_config(&self) -> Result<StoreConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => StoreConfig::from_file(path)?,
            None => StoreConfig::default(),
        };
        Ok(config.with_env_overrides()?.with_launch_source(self.data_source))
    }
}
