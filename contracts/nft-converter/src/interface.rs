//! `cw-multi-test` bindings for the converter and the metadata-onchain cw721
//! collection it mints into.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdError, StdResult,
};
use cw2::ContractVersion;
use cw721::{Cw721ExecuteMsg, Cw721QueryMsg, NftInfoResponse, OwnerOfResponse, TokensResponse};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use crate::msg::{
    CollectionExecuteMsg, ConfigResponse, DepositsResponse, ExecuteMsg, Extension,
    InstantiateMsg, Metadata, MigrateMsg, OperationsResponse, QueryMsg, ReceiveMsg,
    TokenInfoResponse,
};

pub type Cw721MetadataContract<'a> = cw721_base::Cw721Contract<'a, Extension, Empty, Empty, Empty>;

pub fn converter_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        crate::contract::execute,
        crate::contract::instantiate,
        crate::contract::query,
    )
    .with_reply(crate::contract::reply)
    .with_migrate(crate::contract::migrate);
    Box::new(contract)
}

pub fn collection_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        collection_execute,
        collection_instantiate,
        collection_query,
    ))
}

fn collection_instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: cw721_base::InstantiateMsg,
) -> Result<Response, cw721_base::ContractError> {
    Ok(Cw721MetadataContract::default().instantiate(deps, env, info, msg)?)
}

fn collection_execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: CollectionExecuteMsg,
) -> Result<Response, cw721_base::ContractError> {
    Cw721MetadataContract::default().execute(deps, env, info, msg)
}

fn collection_query(deps: Deps, env: Env, msg: cw721_base::QueryMsg<Empty>) -> StdResult<Binary> {
    Cw721MetadataContract::default().query(deps, env, msg)
}

fn execute_err(err: anyhow::Error) -> StdError {
    StdError::generic_err(err.root_cause().to_string())
}

pub struct ConverterContract(Addr);

impl ConverterContract {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    pub fn store_code(app: &mut App) -> u64 {
        app.store_code(converter_contract())
    }

    pub fn store_collection_code(app: &mut App) -> u64 {
        app.store_code(collection_contract())
    }

    #[track_caller]
    pub fn instantiate(
        app: &mut App,
        code_id: u64,
        cw721_code_id: u64,
        admin: &str,
        label: &str,
    ) -> StdResult<Self> {
        let msg = InstantiateMsg {
            cw721_code_id,
            name: "Token".to_string(),
            symbol: "TOKEN".to_string(),
            admin: admin.to_string(),
        };
        // the admin is also the migration admin
        let addr = app
            .instantiate_contract(
                code_id,
                Addr::unchecked(admin),
                &msg,
                &[],
                label,
                Some(admin.to_string()),
            )
            .map_err(execute_err)?;
        Ok(ConverterContract(addr))
    }

    #[track_caller]
    pub fn migrate(
        &self,
        app: &mut App,
        sender: &str,
        new_code_id: u64,
    ) -> StdResult<AppResponse> {
        app.migrate_contract(
            Addr::unchecked(sender),
            self.0.clone(),
            &MigrateMsg {},
            new_code_id,
        )
        .map_err(execute_err)
    }

    #[track_caller]
    pub fn mint(
        &self,
        app: &mut App,
        sender: &str,
        token_id: &str,
        recipient: &str,
        metadata: Metadata,
    ) -> StdResult<AppResponse> {
        let msg = ExecuteMsg::Mint {
            token_id: token_id.to_string(),
            recipient: recipient.to_string(),
            extension: Some(metadata),
            token_uri: None,
        };
        app.execute_contract(Addr::unchecked(sender), self.0.clone(), &msg, &[])
            .map_err(execute_err)
    }

    #[track_caller]
    pub fn convert(
        &self,
        app: &mut App,
        sender: &str,
        token_id: &str,
        metadata: Metadata,
    ) -> StdResult<AppResponse> {
        let msg = ExecuteMsg::Convert {
            token_id: token_id.to_string(),
            extension: Some(metadata),
            token_uri: None,
        };
        app.execute_contract(Addr::unchecked(sender), self.0.clone(), &msg, &[])
            .map_err(execute_err)
    }

    pub fn collection(&self, app: &App) -> StdResult<Collection> {
        let config = self.query_config(app)?;
        Ok(Collection(Addr::unchecked(config.nft_addr)))
    }

    /// Reads the cw2 version straight from the contract's storage.
    pub fn query_contract_version(&self, app: &App) -> StdResult<ContractVersion> {
        let raw = app
            .wrap()
            .query_wasm_raw(self.0.clone(), b"contract_info".to_vec())?
            .ok_or_else(|| StdError::not_found("cw2 contract version"))?;
        from_json(raw)
    }

    pub fn query_config(&self, app: &App) -> StdResult<ConfigResponse> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::Config {})
    }

    pub fn query_operations(&self, app: &App) -> StdResult<OperationsResponse> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::Operations {})
    }

    pub fn query_token_info(&self, app: &App, token_id: &str) -> StdResult<TokenInfoResponse> {
        app.wrap().query_wasm_smart(
            self.0.clone(),
            &QueryMsg::TokenInfo {
                token_id: token_id.to_string(),
            },
        )
    }

    pub fn query_deposits(&self, app: &App) -> StdResult<DepositsResponse> {
        app.wrap().query_wasm_smart(
            self.0.clone(),
            &QueryMsg::Deposits {
                start_after: None,
                limit: None,
            },
        )
    }
}

/// A cw721 collection driven through the generic cw721 interface.
pub struct Collection(Addr);

impl Collection {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    /// Instantiates a standalone collection with `minter` as its minter.
    #[track_caller]
    pub fn instantiate(app: &mut App, code_id: u64, minter: &str, label: &str) -> StdResult<Self> {
        let msg = cw721_base::InstantiateMsg {
            name: "Foreign".to_string(),
            symbol: "FRGN".to_string(),
            minter: minter.to_string(),
        };
        let addr = app
            .instantiate_contract(code_id, Addr::unchecked(minter), &msg, &[], label, None)
            .map_err(execute_err)?;
        Ok(Collection(addr))
    }

    #[track_caller]
    pub fn mint(&self, app: &mut App, minter: &str, token_id: &str, owner: &str) -> StdResult<()> {
        let msg = CollectionExecuteMsg::Mint {
            token_id: token_id.to_string(),
            owner: owner.to_string(),
            token_uri: None,
            extension: None,
        };
        app.execute_contract(Addr::unchecked(minter), self.0.clone(), &msg, &[])
            .map_err(execute_err)?;
        Ok(())
    }

    #[track_caller]
    pub fn send_nft(
        &self,
        app: &mut App,
        sender: &str,
        contract: &Addr,
        token_id: &str,
    ) -> StdResult<AppResponse> {
        let msg = Cw721ExecuteMsg::SendNft {
            contract: contract.to_string(),
            token_id: token_id.to_string(),
            msg: to_json_binary(&ReceiveMsg::Deposit {})?,
        };
        app.execute_contract(Addr::unchecked(sender), self.0.clone(), &msg, &[])
            .map_err(execute_err)
    }

    pub fn owner_of(&self, app: &App, token_id: &str) -> StdResult<String> {
        let res: OwnerOfResponse = app.wrap().query_wasm_smart(
            self.0.clone(),
            &Cw721QueryMsg::OwnerOf {
                token_id: token_id.to_string(),
                include_expired: None,
            },
        )?;
        Ok(res.owner)
    }

    pub fn tokens(&self, app: &App, owner: &str) -> StdResult<Vec<String>> {
        let res: TokensResponse = app.wrap().query_wasm_smart(
            self.0.clone(),
            &Cw721QueryMsg::Tokens {
                owner: owner.to_string(),
                start_after: None,
                limit: None,
            },
        )?;
        Ok(res.tokens)
    }

    pub fn nft_info(&self, app: &App, token_id: &str) -> StdResult<NftInfoResponse<Extension>> {
        app.wrap().query_wasm_smart(
            self.0.clone(),
            &Cw721QueryMsg::NftInfo {
                token_id: token_id.to_string(),
            },
        )
    }
}
