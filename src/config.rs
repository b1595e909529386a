use std::path::{Path, PathBuf};

use eyre::WrapErr;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// directory scanned for images, not recursive
    pub file_dir: PathBuf,
    /// suffixes without the leading dot, compared case-insensitively
    pub image_extensions: Vec<String>,
    pub url: Url,
}

impl Config {
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("fail to read the config file {:?}", path))?;
        Self::from_yaml(&text).wrap_err_with(|| format!("fail to parse the config file {:?}", path))
    }

    pub fn from_yaml(text: &str) -> eyre::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
