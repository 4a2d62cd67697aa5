//! Subcommand handlers. The config file is only read by the commands that need it.

use std::path::Path;

use anyhow::Context;
use cosmwasm_std::Addr;
use log::info;

use crate::{
    artifact::Artifact,
    chain::{LocalChain, COLLECTION_ARTIFACT},
    config_file::Config,
    workflow::{self, Plan, Report},
};

/// Runs the full workflow on a fresh local chain.
pub fn handle_run(config_path: &Path) -> anyhow::Result<Report> {
    let config = Config::load(config_path)?;
    let converter = Artifact::from_file(&config.converter_wasm_path(config_path))?;
    let sender = Addr::unchecked(&config.sender);

    let mut chain = LocalChain::new();
    // the collection code is expected to be on chain already
    let cw721_code_id = chain
        .preload(COLLECTION_ARTIFACT)
        .context("failed to store the cw721 collection code")?;
    info!("cw721 collection code id {cw721_code_id}");

    let plan = Plan::from_config(&config, converter, cw721_code_id);
    workflow::run(&mut chain, &sender, &plan)
}

/// Validates an artifact and returns a `sha256sum` style line for it. Without
/// an explicit `path` the converter artifact named in the config is used.
pub fn handle_checksum(config_path: &Path, path: Option<&Path>) -> anyhow::Result<String> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::load(config_path)?.converter_wasm_path(config_path),
    };
    let artifact = Artifact::from_file(&path)?;

    Ok(format!("{}  {}", artifact.checksum(), path.display()))
}
