use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::PassportError;

pub const DEFAULT_PASSPORT_VERSION: u32 = 1;
pub const DEFAULT_MAX_ORIGIN_LEN: usize = 13;
pub const DEFAULT_MAX_PASSPORT_NUMBER_DIGITS: usize = 4;
const BACKGROUND_ASSET: &str = "data-page-bg.png";

/// Settings for data page generation. Passed explicitly; nothing here is
/// read from the process environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub passport_version: u32,
    pub asset_base_url: String,
    pub max_origin_len: usize,
    pub max_passport_number_digits: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            passport_version: DEFAULT_PASSPORT_VERSION,
            asset_base_url: String::new(),
            max_origin_len: DEFAULT_MAX_ORIGIN_LEN,
            max_passport_number_digits: DEFAULT_MAX_PASSPORT_NUMBER_DIGITS,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, PassportError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            PassportError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw)
            .map_err(|e| PassportError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    pub fn with_asset_base_url(mut self, url: impl Into<String>) -> Self {
        self.asset_base_url = url.into();
        self
    }

    /// URL of the template image drawn behind the data page.
    pub fn background_url(&self) -> String {
        self.asset_url(BACKGROUND_ASSET)
    }

    /// URL under which a generated page for `id` is stored.
    pub fn generated_image_url(&self, id: u64) -> String {
        self.asset_url(&format!("{}.png", id))
    }

    fn asset_url(&self, name: &str) -> String {
        format!("{}/{}", self.asset_base_url.trim_end_matches('/'), name)
    }
}
