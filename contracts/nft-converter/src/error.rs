use cosmwasm_std::StdError;
use cw_utils::ParseReplyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    ParseReply(#[from] ParseReplyError),

    #[error("unauthorized")]
    Unauthorized,

    #[error("nft collection has not been instantiated")]
    CollectionNotReady,

    #[error("token {token_id} is already deposited")]
    AlreadyDeposited { token_id: String },

    #[error("token {token_id} is not deposited")]
    NotDeposited { token_id: String },

    #[error("token {token_id} is not held by the converter")]
    NotHeld { token_id: String },

    #[error("unrecognized reply id {0}")]
    UnrecognizedReply(u64),
}
