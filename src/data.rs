use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One encoded file: its original name and base64 content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub filename: String,
    pub image: String,
}

/// Records keyed by scan order, starting at 0. serde_json writes the keys as
/// strings, in ascending order.
pub type ImageCollection = BTreeMap<usize, ImageRecord>;
