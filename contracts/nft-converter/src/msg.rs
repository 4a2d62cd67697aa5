use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Empty, Uint128};
use cw721::Cw721ReceiveMsg;

use crate::state::TokenInfo;

pub const INSTANTIATE_COLLECTION_REPLY_ID: u64 = 1;
pub const BURN_REPLY_ID: u64 = 2;
pub const MINT_REPLY_ID: u64 = 3;

#[cw_serde]
pub struct Trait {
    pub display_type: Option<String>,
    pub trait_type: String,
    pub value: String,
}

// see: https://docs.opensea.io/docs/metadata-standards
#[cw_serde]
#[derive(Default)]
pub struct Metadata {
    pub image: Option<String>,
    pub image_data: Option<String>,
    pub external_url: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub attributes: Option<Vec<Trait>>,
    pub background_color: Option<String>,
    pub animation_url: Option<String>,
    pub youtube_url: Option<String>,
}

/// Token extension stored by the collection the converter mints into.
pub type Extension = Option<Metadata>;

/// Execute message understood by the converter's cw721 collection.
pub type CollectionExecuteMsg = cw721_base::ExecuteMsg<Extension, Empty>;

#[cw_serde]
pub struct InstantiateMsg {
    /// Code id of a metadata-onchain cw721 contract. The converter
    /// instantiates it and becomes its minter.
    pub cw721_code_id: u64,
    pub name: String,
    pub symbol: String,
    pub admin: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// cw721 receive hook. Sending a token to the converter deposits it
    /// for a later conversion.
    ReceiveNft(Cw721ReceiveMsg),

    /// Burn a deposited token on its original collection and mint the same
    /// token id, carrying the new metadata, back to the depositor.
    Convert {
        token_id: String,
        extension: Extension,
        token_uri: Option<String>,
    },

    /// Mint a token on the converter's collection. Admin only.
    Mint {
        token_id: String,
        recipient: String,
        extension: Extension,
        token_uri: Option<String>,
    },
}

/// Payload of a `SendNft` addressed to the converter. An empty payload is
/// treated as `Deposit`.
#[cw_serde]
pub enum ReceiveMsg {
    Deposit {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OperationsResponse)]
    Operations {},

    #[returns(TokenInfoResponse)]
    TokenInfo { token_id: String },

    #[returns(DepositsResponse)]
    Deposits {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: String,
    pub nft_addr: String,
}

#[cw_serde]
pub struct OperationsResponse {
    pub n_burns: Uint128,
    pub n_mints: Uint128,
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub token_id: String,
    pub nft_addr: String,
    pub sender: String,
}

impl From<TokenInfo> for TokenInfoResponse {
    fn from(info: TokenInfo) -> Self {
        TokenInfoResponse {
            token_id: info.token_id,
            nft_addr: info.nft_addr.into(),
            sender: info.sender.into(),
        }
    }
}

#[cw_serde]
pub struct DepositsResponse {
    pub deposits: Vec<TokenInfoResponse>,
}
