use cosmwasm_std::{
    from_json, to_json_binary, Addr, DepsMut, Env, MessageInfo, Response, SubMsg, WasmMsg,
};
use cw721::{Cw721ExecuteMsg, Cw721QueryMsg, Cw721ReceiveMsg, OwnerOfResponse};

use crate::{
    error::ContractError,
    msg::{CollectionExecuteMsg, Extension, ReceiveMsg, BURN_REPLY_ID, MINT_REPLY_ID},
    state::{Config, TokenInfo, CONFIG, TOKEN_INFO},
};

/// Mints `token_id` on the converter's collection. Only the admin may mint.
pub fn mint(
    deps: DepsMut,
    info: MessageInfo,
    token_id: String,
    recipient: String,
    extension: Extension,
    token_uri: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    let collection = collection_addr(&config)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    let mint = mint_submsg(collection, &token_id, &recipient, extension, token_uri)?;

    Ok(Response::new()
        .add_submessage(mint)
        .add_attribute("action", "mint")
        .add_attribute("token_id", token_id)
        .add_attribute("recipient", recipient))
}

/// cw721 receive hook: records a token sent to the converter so it can be
/// converted later.
pub fn receive_nft(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receive_msg: Cw721ReceiveMsg,
) -> Result<Response, ContractError> {
    // an empty payload is a plain deposit
    if !receive_msg.msg.is_empty() {
        match from_json(&receive_msg.msg)? {
            ReceiveMsg::Deposit {} => {}
        }
    }

    // info.sender is the collection the token was sent from
    let nft_addr = info.sender;
    let sender = deps.api.addr_validate(&receive_msg.sender)?;
    let token_id = receive_msg.token_id;

    if TOKEN_INFO.has(deps.storage, &token_id) {
        return Err(ContractError::AlreadyDeposited { token_id });
    }

    // the sender reports the converter as owner. This only rules out hooks from
    // accounts and collections that do not hold the token; any collection is trusted
    let owner: OwnerOfResponse = deps.querier.query_wasm_smart(
        nft_addr.to_string(),
        &Cw721QueryMsg::OwnerOf {
            token_id: token_id.clone(),
            include_expired: None,
        },
    )?;
    if owner.owner != env.contract.address.as_str() {
        return Err(ContractError::NotHeld { token_id });
    }

    TOKEN_INFO.save(
        deps.storage,
        &token_id,
        &TokenInfo {
            token_id: token_id.clone(),
            nft_addr: nft_addr.clone(),
            sender: sender.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "receive_nft")
        .add_attribute("token_id", token_id)
        .add_attribute("sender", sender)
        .add_attribute("nft_addr", nft_addr))
}

/// Burns a deposited token and re-mints it with new metadata to its depositor.
pub fn convert(
    deps: DepsMut,
    info: MessageInfo,
    token_id: String,
    extension: Extension,
    token_uri: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let token_info = TOKEN_INFO
        .may_load(deps.storage, &token_id)?
        .ok_or_else(|| ContractError::NotDeposited {
            token_id: token_id.clone(),
        })?;

    if info.sender != token_info.sender && info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    let collection = collection_addr(&config)?;

    // burn must run before mint: the token may come from our own collection
    let burn = SubMsg::reply_on_success(
        WasmMsg::Execute {
            contract_addr: token_info.nft_addr.to_string(),
            msg: to_json_binary(&Cw721ExecuteMsg::Burn {
                token_id: token_id.clone(),
            })?,
            funds: vec![],
        },
        BURN_REPLY_ID,
    );
    let mint = mint_submsg(
        collection,
        &token_id,
        &token_info.sender,
        extension,
        token_uri,
    )?;

    TOKEN_INFO.remove(deps.storage, &token_id);

    Ok(Response::new()
        .add_submessages(vec![burn, mint])
        .add_attribute("action", "convert")
        .add_attribute("token_id", token_id)
        .add_attribute("recipient", token_info.sender))
}

fn collection_addr(config: &Config) -> Result<&Addr, ContractError> {
    config
        .nft_addr
        .as_ref()
        .ok_or(ContractError::CollectionNotReady)
}

fn mint_submsg(
    collection: &Addr,
    token_id: &str,
    owner: &Addr,
    extension: Extension,
    token_uri: Option<String>,
) -> Result<SubMsg, ContractError> {
    let msg = to_json_binary(&CollectionExecuteMsg::Mint {
        token_id: token_id.to_string(),
        owner: owner.to_string(),
        token_uri,
        extension,
    })?;

    Ok(SubMsg::reply_on_success(
        WasmMsg::Execute {
            contract_addr: collection.to_string(),
            msg,
            funds: vec![],
        },
        MINT_REPLY_ID,
    ))
}
