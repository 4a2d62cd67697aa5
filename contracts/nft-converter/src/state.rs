use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Account allowed to mint through the converter.
    pub admin: Addr,
    /// Collection instantiated by the converter. Set by the instantiate reply.
    pub nft_addr: Option<Addr>,
}

#[cw_serde]
#[derive(Default)]
pub struct Operations {
    pub n_burns: Uint128,
    pub n_mints: Uint128,
}

/// A token held by the converter until it is converted.
#[cw_serde]
pub struct TokenInfo {
    pub token_id: String,
    /// Collection the token was sent from.
    pub nft_addr: Addr,
    /// Previous owner; receives the converted token.
    pub sender: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const OPERATIONS: Item<Operations> = Item::new("operations");

// token id -> deposit
pub const TOKEN_INFO: Map<&str, TokenInfo> = Map::new("token_info");
