use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    pub precision: Option<usize>,
    pub delimiter: Option<char>,
    pub header: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub coefficients: Option<PathBuf>,
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    /// Reads a config file. A relative `coefficients` path is taken relative to
    /// the directory containing the config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        if let (Some(coefficients), Some(parent)) = (config.coefficients.as_mut(), path.parent()) {
            if coefficients.is_relative() {
                *coefficients = parent.join(&*coefficients);
            }
        }
        Ok(config)
    }
}
