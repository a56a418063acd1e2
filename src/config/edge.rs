use crate::detector::CannyParams;
use crate::image::io::IoError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration read by the `canny_edges` tool.
#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub canny: CannyParams,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    /// Binary mask written as an 8-bit PNG (edges white).
    #[serde(rename = "edges_image")]
    pub edges_image: PathBuf,
    #[serde(rename = "summary_json")]
    pub summary_json: PathBuf,
    /// Optional dump of the suppressed magnitude, stretched to 0–255.
    #[serde(default)]
    pub suppressed_image: Option<PathBuf>,
}

pub fn parse_config(data: &str, origin: &Path) -> Result<EdgeToolConfig, IoError> {
    serde_json::from_str(data).map_err(|source| IoError::Json {
        path: origin.to_path_buf(),
        source,
    })
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, IoError> {
    let data = fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&data, path)
}
