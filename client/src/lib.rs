//! Off-chain tooling for the NFT converter: loads the contract artifact,
//! deploys it and drives a token through mint, deposit and conversion.

pub mod artifact;
pub mod chain;
pub mod cli;
pub mod commands;
pub mod config_file;
pub mod workflow;
