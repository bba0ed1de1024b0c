// Layered configuration: built-in defaults, then a TOML file, then
// `DISK_ERASE_*` environment variables (`__` separates nested keys, e.g.
// `DISK_ERASE_CLASSIFIER__SATA_SECTOR_POLICY=assume_default`).

use crate::algorithms::EraseStrategy;
use crate::drives::ClassifierConfig;
use crate::{DriveError, DriveResult};
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "DISK_ERASE";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EraseConfig {
    pub strategy: EraseStrategy,
    /// Device paths never handed to the orchestrator
    pub exclude_paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub classifier: ClassifierConfig,
    pub erase: EraseConfig,
}

impl AppConfig {
    /// `<config dir>/disk-erase/config.toml` for the current user
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "disk-erase", "disk-erase")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration. An explicit `path` must exist; the default
    /// location is optional.
    pub fn load(path: Option<&Path>) -> DriveResult<Self> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(default) = Self::default_path() {
                    builder = builder.add_source(File::from(default).required(false));
                }
            }
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: AppConfig = settings.try_deserialize()?;
        app.validate()?;

        tracing::debug!(config = ?app, "Configuration loaded");
        Ok(app)
    }

    pub fn validate(&self) -> DriveResult<()> {
        if self.classifier.default_sector_size == 0 {
            return Err(DriveError::Config(
                "classifier.default_sector_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
