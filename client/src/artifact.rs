use std::{fs, path::Path};

use anyhow::{ensure, Context};
use sha2::{Digest, Sha256};

/// Every wasm module starts with these bytes.
pub const WASM_MAGIC: &[u8; 4] = b"\0asm";

/// Contract bytecode ready for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// File stem of the bytecode, e.g. `nft_converter`.
    pub name: String,
    pub wasm: Vec<u8>,
}

impl Artifact {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .with_context(|| format!("{} has no usable file name", path.display()))?;
        let wasm =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

        Self::from_bytes(name, wasm).with_context(|| format!("invalid artifact {}", path.display()))
    }

    pub fn from_bytes(name: impl Into<String>, wasm: Vec<u8>) -> anyhow::Result<Self> {
        ensure!(
            wasm.starts_with(WASM_MAGIC),
            "bytecode does not start with the wasm magic number"
        );

        Ok(Artifact {
            name: name.into(),
            wasm,
        })
    }

    /// Hex encoded sha256 of the bytecode, the checksum the chain records on upload.
    pub fn checksum(&self) -> String {
        hex::encode(Sha256::digest(&self.wasm))
    }
}
