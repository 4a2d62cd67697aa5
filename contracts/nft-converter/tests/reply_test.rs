use cosmwasm_std::{
    from_json,
    testing::{mock_dependencies, mock_env, mock_info},
    CosmosMsg, ReplyOn, Uint128, WasmMsg,
};
use nft_converter::{
    contract::{instantiate, reply},
    msg::{BURN_REPLY_ID, INSTANTIATE_COLLECTION_REPLY_ID, MINT_REPLY_ID},
    query::query_operations,
    state::CONFIG,
    ContractError,
};

mod test_setup;
use test_setup::{
    empty_reply, instantiate_msg, instantiate_reply, instantiated, with_collection, ADMIN,
    COLLECTION, CW721_CODE_ID,
};

// Tests
// 1. instantiate
//    1. collection instantiate submessage
// 2. reply
//    1. instantiate reply stores the collection
//    2. instantiate reply without data
//    3. burn and mint replies bump counters
//    4. unknown reply id

#[test]
fn instantiate_requests_collection() {
    let mut deps = mock_dependencies();
    let res = instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(ADMIN, &[]),
        instantiate_msg(),
    )
    .unwrap();

    assert_eq!(1, res.messages.len());
    let submsg = &res.messages[0];
    assert_eq!(INSTANTIATE_COLLECTION_REPLY_ID, submsg.id);
    assert_eq!(ReplyOn::Success, submsg.reply_on);

    match &submsg.msg {
        CosmosMsg::Wasm(WasmMsg::Instantiate { code_id, msg, .. }) => {
            assert_eq!(CW721_CODE_ID, *code_id);
            let init: cw721_base::InstantiateMsg = from_json(msg).unwrap();
            assert_eq!("Token", init.name);
            assert_eq!("TOKEN", init.symbol);
            // the converter itself is the minter
            assert_eq!(mock_env().contract.address.as_str(), init.minter);
        }
        other => panic!("unexpected message {other:?}"),
    }

    let config = CONFIG.load(&deps.storage).unwrap();
    assert_eq!(ADMIN, config.admin.as_str());
    assert_eq!(None, config.nft_addr);
}

#[test]
fn instantiate_reply_stores_collection() {
    let deps = with_collection();

    let config = CONFIG.load(&deps.storage).unwrap();
    assert_eq!(Some(COLLECTION), config.nft_addr.as_ref().map(|a| a.as_str()));
}

#[test]
fn instantiate_reply_without_data_fails() {
    let mut deps = instantiated();

    let err = reply(
        deps.as_mut(),
        mock_env(),
        empty_reply(INSTANTIATE_COLLECTION_REPLY_ID),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::ParseReply(_)), "{err}");
    assert_eq!(None, CONFIG.load(&deps.storage).unwrap().nft_addr);
}

#[test]
fn operation_replies_bump_counters() {
    let mut deps = with_collection();

    reply(deps.as_mut(), mock_env(), empty_reply(MINT_REPLY_ID)).unwrap();
    reply(deps.as_mut(), mock_env(), empty_reply(BURN_REPLY_ID)).unwrap();
    reply(deps.as_mut(), mock_env(), empty_reply(MINT_REPLY_ID)).unwrap();

    let ops = query_operations(deps.as_ref()).unwrap();
    assert_eq!(Uint128::one(), ops.n_burns);
    assert_eq!(Uint128::new(2), ops.n_mints);
}

#[test]
fn unknown_reply_id_fails() {
    let mut deps = with_collection();

    let err = reply(
        deps.as_mut(),
        mock_env(),
        instantiate_reply(42, COLLECTION),
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::UnrecognizedReply(42)), "{err}");
}
