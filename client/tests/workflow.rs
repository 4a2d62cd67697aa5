use cosmwasm_std::{Addr, Uint128};
use nft_converter::msg::{ExecuteMsg, Metadata, OperationsResponse, Trait};
use nft_converter_client::{
    artifact::{Artifact, WASM_MAGIC},
    chain::{Chain, LocalChain, COLLECTION_ARTIFACT, CONVERTER_ARTIFACT},
    workflow::{self, Plan},
};

const SENDER: &str = "neutron1sender";

fn converter_artifact() -> Artifact {
    Artifact::from_bytes(CONVERTER_ARTIFACT, [WASM_MAGIC.as_slice(), &[1, 0, 0, 0]].concat())
        .unwrap()
}

fn plan(chain: &mut LocalChain) -> Plan {
    Plan {
        converter: converter_artifact(),
        cw721_code_id: chain.preload(COLLECTION_ARTIFACT).unwrap(),
        label: "NFT Converter".to_string(),
        collection_name: "Token".to_string(),
        collection_symbol: "TOKEN".to_string(),
        token_id: "send_try".to_string(),
        metadata: Metadata {
            name: Some("Token Name".to_string()),
            description: Some("Token Description".to_string()),
            ..Metadata::default()
        },
        converted_metadata: Metadata {
            name: Some("New Token Name".to_string()),
            description: Some("New Token Description".to_string()),
            attributes: Some(vec![Trait {
                display_type: None,
                trait_type: "generation".to_string(),
                value: "2".to_string(),
            }]),
            ..Metadata::default()
        },
    }
}

#[test]
fn full_run_converts_token() {
    let mut chain = LocalChain::new();
    let plan = plan(&mut chain);
    let sender = Addr::unchecked(SENDER);

    let report = workflow::run(&mut chain, &sender, &plan).unwrap();

    assert_eq!("send_try", report.token_id);
    assert_eq!(plan.converter.checksum(), report.deployment.checksum);
    assert_ne!(report.deployment.converter, report.deployment.collection);
    assert_eq!(Some(plan.converted_metadata.clone()), report.nft_info.extension);
    assert_eq!(
        OperationsResponse {
            n_burns: Uint128::one(),
            n_mints: Uint128::new(2),
        },
        report.operations
    );
}

#[test]
fn report_serializes_flat() {
    let mut chain = LocalChain::new();
    let plan = plan(&mut chain);

    let report = workflow::run(&mut chain, &Addr::unchecked(SENDER), &plan).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(
        report.deployment.converter.as_str(),
        json["converter"].as_str().unwrap()
    );
    assert_eq!("1", json["operations"]["n_burns"].as_str().unwrap());
    assert_eq!(
        "New Token Name",
        json["nft_info"]["extension"]["name"].as_str().unwrap()
    );
}

#[test]
fn steps_thread_addresses() {
    let mut chain = LocalChain::new();
    let plan = plan(&mut chain);
    let sender = Addr::unchecked(SENDER);

    let deployment = workflow::deploy(&mut chain, &sender, &plan).unwrap();
    workflow::mint(&mut chain, &sender, &deployment, "token-1", &plan.metadata).unwrap();

    // converting before the deposit has nothing to convert
    let err = workflow::convert(
        &mut chain,
        &sender,
        &deployment,
        "token-1",
        &plan.converted_metadata,
    )
    .unwrap_err();
    assert!(
        format!("{err:#}").contains("token token-1 is not deposited"),
        "{err:#}"
    );

    workflow::deposit(&mut chain, &sender, &deployment, "token-1").unwrap();
    let info = workflow::convert(
        &mut chain,
        &sender,
        &deployment,
        "token-1",
        &plan.converted_metadata,
    )
    .unwrap();
    assert_eq!(Some(plan.converted_metadata), info.extension);
}

#[test]
fn mint_by_stranger_is_rejected() {
    let mut chain = LocalChain::new();
    let plan = plan(&mut chain);
    let deployment = workflow::deploy(&mut chain, &Addr::unchecked(SENDER), &plan).unwrap();

    let stranger = Addr::unchecked("stranger");
    let msg = ExecuteMsg::Mint {
        token_id: "token-1".to_string(),
        recipient: stranger.to_string(),
        extension: None,
        token_uri: None,
    };
    let err = chain
        .execute(&stranger, &deployment.converter, &msg)
        .unwrap_err();
    assert!(format!("{err:#}").contains("unauthorized"), "{err:#}");
}

#[test]
fn upload_of_unknown_artifact_fails() {
    let mut chain = LocalChain::new();
    let artifact = Artifact::from_bytes("cw20_base", WASM_MAGIC.to_vec()).unwrap();

    let err = chain
        .upload(&Addr::unchecked(SENDER), &artifact)
        .unwrap_err();
    assert!(
        err.to_string().contains("no local build registered for artifact cw20_base"),
        "{err}"
    );
}
