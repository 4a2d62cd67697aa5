use std::{fs, path::{Path, PathBuf}};

use anyhow::Context;
use nft_converter::msg::Metadata;
use serde::{Deserialize, Serialize};

fn default_label() -> String {
    "NFT Converter".to_string()
}

/// Parameters of one workflow run, read from YAML.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Account that uploads, instantiates and owns the token.
    pub sender: String,
    /// Path to the compiled converter contract.
    pub converter_wasm: PathBuf,
    #[serde(default = "default_label")]
    pub label: String,
    pub collection: CollectionConfig,
    pub token_id: String,
    /// Metadata the token is minted with.
    pub metadata: Metadata,
    /// Metadata the token carries after conversion.
    pub converted_metadata: Metadata,
}

/// Name and symbol of the cw721 collection the converter creates.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    pub name: String,
    pub symbol: String,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Resolves `converter_wasm` against the directory holding the config.
    pub fn converter_wasm_path(&self, config_path: &Path) -> PathBuf {
        match config_path.parent() {
            Some(dir) if self.converter_wasm.is_relative() => dir.join(&self.converter_wasm),
            _ => self.converter_wasm.clone(),
        }
    }
}
