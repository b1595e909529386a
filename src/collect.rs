use std::path::Path;

use base64::Engine;
use eyre::WrapErr;
use regex::Regex;

use crate::data::{ImageCollection, ImageRecord};

/// Case-insensitive "name ends with `.<ext>`" test over the whole file name.
#[derive(Debug, Clone)]
pub struct ExtensionMatcher {
    re: Option<Regex>,
}

impl ExtensionMatcher {
    pub fn new(extensions: &[String]) -> eyre::Result<Self> {
        if extensions.is_empty() {
            return Ok(Self { re: None });
        }
        // extensions come from the config file, so never let them act as regex syntax
        let alternatives = extensions
            .iter()
            .map(|e| regex::escape(e))
            .collect::<Vec<_>>()
            .join("|");
        let re = Regex::new(&format!(r"(?i)^.+\.({})$", alternatives))?;
        Ok(Self { re: Some(re) })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.re.as_ref().is_some_and(|re| re.is_match(name))
    }
}

pub fn encode_image(path: &Path) -> eyre::Result<String> {
    let bytes = std::fs::read(path).wrap_err_with(|| format!("fail to read the image {:?}", path))?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// Reads every matching entry of `dir` in listing order. Keys only advance
/// on a match, so they run 0..k without gaps.
pub fn collect_images(dir: &Path, matcher: &ExtensionMatcher) -> eyre::Result<ImageCollection> {
    let mut images = ImageCollection::new();
    let entries =
        std::fs::read_dir(dir).wrap_err_with(|| format!("fail to list the directory {:?}", dir))?;
    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name();
        // non utf-8 bytes become U+FFFD, the entry itself is still read by path
        let name = file_name.to_string_lossy();
        if !matcher.is_match(&name) {
            continue;
        }
        log::debug!("encoding {:?}", entry.path());
        let image = encode_image(&entry.path())?;
        images.insert(
            images.len(),
            ImageRecord {
                filename: name.into_owned(),
                image,
            },
        );
    }
    Ok(images)
}
