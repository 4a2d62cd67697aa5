pub use crate::error::ContractError;
pub use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod reply;
pub mod state;


#[cfg(any(test, feature = "interface"))]
pub mod interface;
