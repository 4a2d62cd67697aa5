#![allow(dead_code)]

use cosmwasm_std::{
    testing::{mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage},
    to_json_binary, Binary, ContractResult, OwnedDeps, Reply, SubMsgResponse, SubMsgResult,
    SystemResult, WasmQuery,
};
use cw721::OwnerOfResponse;
use nft_converter::{
    contract::{instantiate, reply},
    msg::{Metadata, INSTANTIATE_COLLECTION_REPLY_ID},
    InstantiateMsg,
};

pub const ADMIN: &str = "admin";
pub const USER: &str = "user";
pub const COLLECTION: &str = "collection";
pub const CW721_CODE_ID: u64 = 3471;

pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

pub fn instantiate_msg() -> InstantiateMsg {
    InstantiateMsg {
        cw721_code_id: CW721_CODE_ID,
        name: "Token".to_string(),
        symbol: "TOKEN".to_string(),
        admin: ADMIN.to_string(),
    }
}

/// Converter instantiated, collection not yet reported back.
pub fn instantiated() -> MockDeps {
    let mut deps = mock_dependencies();
    instantiate(deps.as_mut(), mock_env(), mock_info(ADMIN, &[]), instantiate_msg()).unwrap();
    deps
}

/// Converter instantiated and the collection address stored by the reply.
pub fn with_collection() -> MockDeps {
    let mut deps = instantiated();
    reply(
        deps.as_mut(),
        mock_env(),
        instantiate_reply(INSTANTIATE_COLLECTION_REPLY_ID, COLLECTION),
    )
    .unwrap();
    deps
}

/// Encodes a `MsgInstantiateContractResponse` the way the chain does.
pub fn instantiate_reply(id: u64, contract_address: &str) -> Reply {
    let mut data = vec![0x0a, contract_address.len() as u8];
    data.extend_from_slice(contract_address.as_bytes());

    Reply {
        id,
        result: SubMsgResult::Ok(SubMsgResponse {
            events: vec![],
            data: Some(Binary::from(data)),
        }),
    }
}

pub fn empty_reply(id: u64) -> Reply {
    Reply {
        id,
        result: SubMsgResult::Ok(SubMsgResponse {
            events: vec![],
            data: None,
        }),
    }
}

/// Makes every cw721 `OwnerOf` query answer with `owner`.
pub fn mock_owner(deps: &mut MockDeps, owner: &str) {
    let response = OwnerOfResponse {
        owner: owner.to_string(),
        approvals: vec![],
    };
    deps.querier.update_wasm(move |query| match query {
        WasmQuery::Smart { .. } => {
            SystemResult::Ok(ContractResult::Ok(to_json_binary(&response).unwrap()))
        }
        _ => panic!("unexpected query {query:?}"),
    });
}

pub fn metadata(name: &str) -> Metadata {
    Metadata {
        name: Some(name.to_string()),
        ..Metadata::default()
    }
}
