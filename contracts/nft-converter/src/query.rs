use cosmwasm_std::{Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::{
    msg::{ConfigResponse, DepositsResponse, OperationsResponse, TokenInfoResponse},
    state::{CONFIG, OPERATIONS, TOKEN_INFO},
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let nft_addr = config
        .nft_addr
        .ok_or_else(|| StdError::not_found("nft collection"))?;

    Ok(ConfigResponse {
        admin: config.admin.into(),
        nft_addr: nft_addr.into(),
    })
}

pub fn query_operations(deps: Deps) -> StdResult<OperationsResponse> {
    let ops = OPERATIONS.may_load(deps.storage)?.unwrap_or_default();

    Ok(OperationsResponse {
        n_burns: ops.n_burns,
        n_mints: ops.n_mints,
    })
}

pub fn query_token_info(deps: Deps, token_id: String) -> StdResult<TokenInfoResponse> {
    TOKEN_INFO
        .load(deps.storage, &token_id)
        .map(TokenInfoResponse::from)
}

pub fn query_deposits(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<DepositsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let deposits = TOKEN_INFO
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, info)| TokenInfoResponse::from(info)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DepositsResponse { deposits })
}
