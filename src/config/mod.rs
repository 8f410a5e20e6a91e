#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{DownloadError, Result};
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str =
    "https://www.eiopa.europa.eu/sites/default/files/risk_free_interest_rate";
pub const DEFAULT_FILE_PREFIX: &str = "eiopa_rfr";
pub const DEFAULT_EXTENSION: &str = "zip";
pub const DEFAULT_SOURCE_NAME: &str = "EIOPA-RFR";

/// 下載設定。未提供設定檔時使用預設值。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Years to enumerate, processed in the order given.
    pub years: Vec<i32>,
    pub raw_data_path: PathBuf,
    pub clean_data_path: PathBuf,
    /// Subdirectory under `raw_data_path` that receives the extracted archives.
    pub source_name: String,
    pub base_url: String,
    pub file_prefix: String,
    pub extension: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        // EIOPA publishes nothing before 2016
        Self {
            years: vec![2019, 2018, 2017, 2016],
            raw_data_path: PathBuf::from("../datasets/eiopa/raw"),
            clean_data_path: PathBuf::from("../datasets/eiopa/clean"),
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl DownloadConfig {
    /// `<raw_data_path>/<source_name>`
    pub fn source_root(&self) -> PathBuf {
        self.raw_data_path.join(&self.source_name)
    }

    pub fn raw_data_path(&self) -> &Path {
        &self.raw_data_path
    }

    pub fn clean_data_path(&self) -> &Path {
        &self.clean_data_path
    }
}

impl Validate for DownloadConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_path("raw_data_path", &self.raw_data_path)?;
        validation::validate_path("clean_data_path", &self.clean_data_path)?;
        validation::validate_non_empty_string("source_name", &self.source_name)?;
        validation::validate_non_empty_string("file_prefix", &self.file_prefix)?;
        validation::validate_non_empty_string("extension", &self.extension)?;

        if self.years.is_empty() {
            return Err(DownloadError::ConfigError {
                message: "at least one year must be configured".to_string(),
            });
        }
        for year in &self.years {
            validation::validate_range("years", *year, 1, 9999)?;
        }

        Ok(())
    }
}
