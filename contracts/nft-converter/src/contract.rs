#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult, SubMsg,
    WasmMsg,
};
use cw2::set_contract_version;

use crate::{
    error::ContractError,
    execute::{convert, mint, receive_nft},
    msg::{
        ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, BURN_REPLY_ID,
        INSTANTIATE_COLLECTION_REPLY_ID, MINT_REPLY_ID,
    },
    query::{query_config, query_deposits, query_operations, query_token_info},
    reply::{handle_burn_reply, handle_instantiate_collection_reply, handle_mint_reply},
    state::{Config, Operations, CONFIG, OPERATIONS},
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:nft-converter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const COLLECTION_LABEL: &str = "NFT Converter collection";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let admin = deps.api.addr_validate(&msg.admin)?;

    CONFIG.save(
        deps.storage,
        &Config {
            admin: admin.clone(),
            nft_addr: None,
        },
    )?;
    OPERATIONS.save(deps.storage, &Operations::default())?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // the converter mints into this collection, so it has to be the minter
    let collection_msg = cw721_base::InstantiateMsg {
        name: msg.name,
        symbol: msg.symbol,
        minter: env.contract.address.to_string(),
    };

    let instantiate_collection = SubMsg::reply_on_success(
        WasmMsg::Instantiate {
            admin: None,
            code_id: msg.cw721_code_id,
            msg: to_json_binary(&collection_msg)?,
            funds: vec![],
            label: COLLECTION_LABEL.to_string(),
        },
        INSTANTIATE_COLLECTION_REPLY_ID,
    );

    Ok(Response::new()
        .add_submessage(instantiate_collection)
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("cw721_code_id", msg.cw721_code_id.to_string())
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ReceiveNft(receive_msg) => receive_nft(deps, env, info, receive_msg),
        ExecuteMsg::Convert {
            token_id,
            extension,
            token_uri,
        } => convert(deps, info, token_id, extension, token_uri),
        ExecuteMsg::Mint {
            token_id,
            recipient,
            extension,
            token_uri,
        } => mint(deps, info, token_id, recipient, extension, token_uri),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_COLLECTION_REPLY_ID => handle_instantiate_collection_reply(deps, msg),
        BURN_REPLY_ID => handle_burn_reply(deps),
        MINT_REPLY_ID => handle_mint_reply(deps),
        id => Err(ContractError::UnrecognizedReply(id)),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Operations {} => to_json_binary(&query_operations(deps)?),
        QueryMsg::TokenInfo { token_id } => to_json_binary(&query_token_info(deps, token_id)?),
        QueryMsg::Deposits { start_after, limit } => {
            to_json_binary(&query_deposits(deps, start_after, limit)?)
        }
    }
}
