//! CLI options

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    about = "Deploys the NFT converter and walks a token through mint, deposit and conversion",
    author = "NFT Converter Contributors"
)]
pub struct Cli {
    #[arg(
        short,
        long,
        default_value_t = 3,
        help = "Logging level, where 0..=1 RUST_LOG=error and 5.. is RUST_LOG=trace"
    )]
    pub log_level: u32,
    #[arg(
        short,
        long,
        default_value = "nft-converter.yaml",
        help = "Workflow configuration file"
    )]
    pub config: PathBuf,
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    #[command(
        about = "Upload and instantiate the converter on a local chain, then mint, deposit and convert a token"
    )]
    Run,
    #[command(about = "Validate a contract artifact and print its checksum")]
    Checksum {
        /// Artifact to check, defaults to `converter_wasm` from the config
        path: Option<PathBuf>,
    },
}
