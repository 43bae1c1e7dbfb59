use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::generator::DEFAULT_FACILITY_COUNT;

/// Runtime configuration, read from TOML.
///
/// ```toml
/// [dataset]
/// count = 300
/// seed = 42
///
/// [export]
/// dir = "exports"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacilityMapConfig {
    pub dataset: DatasetConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    pub count: usize,
    /// Unset means a fresh random dataset every run.
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            count: DEFAULT_FACILITY_COUNT,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            dir: PathBuf::from("."),
        }
    }
}

impl FacilityMapConfig {
    pub fn from_config_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: FacilityMapConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset.count == 0 {
            return Err(ConfigError::Invalid("dataset.count must be positive"));
        }
        if u32::try_from(self.dataset.count).is_err() {
            return Err(ConfigError::Invalid("dataset.count exceeds the facility id range"));
        }
        Ok(())
    }
}
