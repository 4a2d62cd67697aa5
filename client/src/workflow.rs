//! The deployment and conversion walkthrough.
//!
//! Every step is a single call against a [`Chain`], followed by a query that
//! confirms the state the step was supposed to produce. Steps run strictly in
//! order and each feeds its output (code id, addresses) into the next.

use anyhow::{ensure, Context};
use cosmwasm_std::{to_json_binary, Addr};
use cw721::{Cw721ExecuteMsg, Cw721QueryMsg, NftInfoResponse, OwnerOfResponse, TokensResponse};
use log::info;
use nft_converter::msg::{
    ConfigResponse, ExecuteMsg, Extension, InstantiateMsg, Metadata, OperationsResponse, QueryMsg,
    ReceiveMsg,
};
use serde::Serialize;

use crate::{artifact::Artifact, chain::Chain, config_file::Config};

/// Everything a run needs.
#[derive(Clone, Debug)]
pub struct Plan {
    pub converter: Artifact,
    /// Code id of the cw721 collection the converter instantiates.
    pub cw721_code_id: u64,
    pub label: String,
    pub collection_name: String,
    pub collection_symbol: String,
    pub token_id: String,
    pub metadata: Metadata,
    pub converted_metadata: Metadata,
}

impl Plan {
    pub fn from_config(config: &Config, converter: Artifact, cw721_code_id: u64) -> Self {
        Plan {
            converter,
            cw721_code_id,
            label: config.label.clone(),
            collection_name: config.collection.name.clone(),
            collection_symbol: config.collection.symbol.clone(),
            token_id: config.token_id.clone(),
            metadata: config.metadata.clone(),
            converted_metadata: config.converted_metadata.clone(),
        }
    }
}

/// Addresses produced by [`deploy`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Deployment {
    pub code_id: u64,
    pub checksum: String,
    pub converter: Addr,
    pub collection: Addr,
}

/// Outcome of a full run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub deployment: Deployment,
    pub token_id: String,
    pub operations: OperationsResponse,
    pub nft_info: NftInfoResponse<Extension>,
}

pub fn run<C: Chain>(chain: &mut C, sender: &Addr, plan: &Plan) -> anyhow::Result<Report> {
    let deployment = deploy(chain, sender, plan).context("deploy step failed")?;
    mint(chain, sender, &deployment, &plan.token_id, &plan.metadata)
        .context("mint step failed")?;
    deposit(chain, sender, &deployment, &plan.token_id).context("deposit step failed")?;
    let nft_info = convert(
        chain,
        sender,
        &deployment,
        &plan.token_id,
        &plan.converted_metadata,
    )
    .context("convert step failed")?;

    let operations: OperationsResponse = chain
        .query(&deployment.converter, &QueryMsg::Operations {})
        .context("operations query failed")?;
    info!(
        "converter performed {} mints and {} burns",
        operations.n_mints, operations.n_burns
    );

    Ok(Report {
        deployment,
        token_id: plan.token_id.clone(),
        operations,
        nft_info,
    })
}

/// Uploads and instantiates the converter, then looks up the collection it created.
pub fn deploy<C: Chain>(chain: &mut C, sender: &Addr, plan: &Plan) -> anyhow::Result<Deployment> {
    let upload = chain.upload(sender, &plan.converter)?;
    info!(
        "uploaded {} as code {} (checksum {})",
        plan.converter.name, upload.code_id, upload.checksum
    );

    let msg = InstantiateMsg {
        cw721_code_id: plan.cw721_code_id,
        name: plan.collection_name.clone(),
        symbol: plan.collection_symbol.clone(),
        admin: sender.to_string(),
    };
    let converter = chain.instantiate(sender, upload.code_id, &msg, &plan.label)?;
    info!("instantiated converter at {converter}");

    let config: ConfigResponse = chain.query(&converter, &QueryMsg::Config {})?;
    ensure!(
        config.admin == sender.as_str(),
        "converter admin is {}, expected {sender}",
        config.admin
    );
    let collection = Addr::unchecked(config.nft_addr);
    info!("converter minted collection {collection}");

    Ok(Deployment {
        code_id: upload.code_id,
        checksum: upload.checksum,
        converter,
        collection,
    })
}

/// Mints `token_id` to the sender through the converter.
pub fn mint<C: Chain>(
    chain: &mut C,
    sender: &Addr,
    deployment: &Deployment,
    token_id: &str,
    metadata: &Metadata,
) -> anyhow::Result<()> {
    let msg = ExecuteMsg::Mint {
        token_id: token_id.to_string(),
        recipient: sender.to_string(),
        extension: Some(metadata.clone()),
        token_uri: None,
    };
    chain.execute(sender, &deployment.converter, &msg)?;

    let owner: OwnerOfResponse = chain.query(
        &deployment.collection,
        &Cw721QueryMsg::OwnerOf {
            token_id: token_id.to_string(),
            include_expired: None,
        },
    )?;
    ensure!(
        owner.owner == sender.as_str(),
        "token {token_id} is owned by {}, expected {sender}",
        owner.owner
    );
    info!("minted {token_id} to {sender}");

    Ok(())
}

/// Sends `token_id` to the converter.
pub fn deposit<C: Chain>(
    chain: &mut C,
    sender: &Addr,
    deployment: &Deployment,
    token_id: &str,
) -> anyhow::Result<()> {
    let msg = Cw721ExecuteMsg::SendNft {
        contract: deployment.converter.to_string(),
        token_id: token_id.to_string(),
        msg: to_json_binary(&ReceiveMsg::Deposit {})?,
    };
    chain.execute(sender, &deployment.collection, &msg)?;

    ensure_owns(chain, &deployment.collection, &deployment.converter, token_id)?;
    info!("deposited {token_id} with the converter");

    Ok(())
}

/// Converts `token_id` and confirms it came back to the sender with the new metadata.
pub fn convert<C: Chain>(
    chain: &mut C,
    sender: &Addr,
    deployment: &Deployment,
    token_id: &str,
    metadata: &Metadata,
) -> anyhow::Result<NftInfoResponse<Extension>> {
    let msg = ExecuteMsg::Convert {
        token_id: token_id.to_string(),
        extension: Some(metadata.clone()),
        token_uri: None,
    };
    chain.execute(sender, &deployment.converter, &msg)?;

    ensure_owns(chain, &deployment.collection, sender, token_id)?;

    let nft_info: NftInfoResponse<Extension> = chain.query(
        &deployment.collection,
        &Cw721QueryMsg::NftInfo {
            token_id: token_id.to_string(),
        },
    )?;
    ensure!(
        nft_info.extension.as_ref() == Some(metadata),
        "token {token_id} does not carry the converted metadata"
    );
    info!("converted {token_id}");

    Ok(nft_info)
}

fn ensure_owns<C: Chain>(
    chain: &C,
    collection: &Addr,
    owner: &Addr,
    token_id: &str,
) -> anyhow::Result<()> {
    let tokens: TokensResponse = chain.query(
        collection,
        &Cw721QueryMsg::Tokens {
            owner: owner.to_string(),
            start_after: None,
            limit: None,
        },
    )?;
    ensure!(
        tokens.tokens.iter().any(|t| t == token_id),
        "{owner} does not hold {token_id}, holds {:?}",
        tokens.tokens
    );

    Ok(())
}
