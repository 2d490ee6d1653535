//! Output configuration, optionally loaded from a YAML file.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::error::{Result, SlicerError};

/// Output naming and empty-output policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlicerConfig {
    /// File name of the mobile ("RooR") output
    pub mobile_file_name: String,
    /// File name of the residential ("RM") output
    pub residential_file_name: String,
    /// Write a header-only file when an output has no rows
    pub write_empty_outputs: bool,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            mobile_file_name: "RooR.csv".to_string(),
            residential_file_name: "RM.csv".to_string(),
            write_empty_outputs: false,
        }
    }
}

impl SlicerConfig {
    pub fn from_yaml_str(text: &str, origin: &Path) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|source| SlicerError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SlicerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text, path)
    }
}
