use cosmwasm_std::{DepsMut, Reply, Response, StdResult, Uint128};
use cw_utils::parse_reply_instantiate_data;

use crate::{
    error::ContractError,
    state::{Operations, CONFIG, OPERATIONS},
};

/// Stores the address of the collection created during instantiate.
pub fn handle_instantiate_collection_reply(
    deps: DepsMut,
    msg: Reply,
) -> Result<Response, ContractError> {
    let res = parse_reply_instantiate_data(msg)?;
    let nft_addr = deps.api.addr_validate(&res.contract_address)?;

    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.nft_addr = Some(nft_addr.clone());
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "instantiate_collection")
        .add_attribute("nft_addr", nft_addr))
}

pub fn handle_burn_reply(deps: DepsMut) -> Result<Response, ContractError> {
    record_operation(deps, |ops| ops.n_burns += Uint128::one())?;

    Ok(Response::new().add_attribute("operation", "burn"))
}

pub fn handle_mint_reply(deps: DepsMut) -> Result<Response, ContractError> {
    record_operation(deps, |ops| ops.n_mints += Uint128::one())?;

    Ok(Response::new().add_attribute("operation", "mint"))
}

fn record_operation(deps: DepsMut, bump: impl FnOnce(&mut Operations)) -> StdResult<()> {
    let mut ops = OPERATIONS.may_load(deps.storage)?.unwrap_or_default();
    bump(&mut ops);
    OPERATIONS.save(deps.storage, &ops)
}
