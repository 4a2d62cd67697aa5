use std::{collections::BTreeMap, fmt::Debug};

use anyhow::{anyhow, Context};
use cosmwasm_std::{Addr, Empty, Event};
use cw_multi_test::{App, Contract, Executor};
use log::debug;
use serde::{de::DeserializeOwned, Serialize};

use crate::artifact::Artifact;

/// Artifact name of the converter contract.
pub const CONVERTER_ARTIFACT: &str = "nft_converter";
/// Artifact name of the metadata-onchain cw721 collection.
pub const COLLECTION_ARTIFACT: &str = "cw721_metadata_onchain";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadResult {
    pub code_id: u64,
    pub checksum: String,
}

/// The calls the workflow makes against a chain. Every method is one
/// transaction or one smart query signed/issued by `sender`.
pub trait Chain {
    fn upload(&mut self, sender: &Addr, artifact: &Artifact) -> anyhow::Result<UploadResult>;

    fn instantiate<M: Serialize>(
        &mut self,
        sender: &Addr,
        code_id: u64,
        msg: &M,
        label: &str,
    ) -> anyhow::Result<Addr>;

    fn execute<M: Serialize + Debug>(
        &mut self,
        sender: &Addr,
        contract: &Addr,
        msg: &M,
    ) -> anyhow::Result<Vec<Event>>;

    fn query<Q: Serialize, T: DeserializeOwned>(&self, contract: &Addr, msg: &Q)
        -> anyhow::Result<T>;
}

type NativeContract = fn() -> Box<dyn Contract<Empty>>;

/// In-process chain backed by `cw-multi-test`.
///
/// Wasm cannot run here, so an uploaded artifact is replaced by the native
/// build registered under the artifact's name.
pub struct LocalChain {
    app: App,
    natives: BTreeMap<String, NativeContract>,
}

impl Default for LocalChain {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalChain {
    /// A fresh chain that knows the converter and its cw721 collection.
    pub fn new() -> Self {
        let mut chain = LocalChain {
            app: App::default(),
            natives: BTreeMap::new(),
        };
        chain.register(
            CONVERTER_ARTIFACT,
            nft_converter::interface::converter_contract,
        );
        chain.register(
            COLLECTION_ARTIFACT,
            nft_converter::interface::collection_contract,
        );
        chain
    }

    pub fn register(&mut self, name: &str, contract: NativeContract) {
        self.natives.insert(name.to_string(), contract);
    }

    /// Stores a registered contract without bytecode, standing in for code
    /// that already exists on chain.
    pub fn preload(&mut self, name: &str) -> anyhow::Result<u64> {
        let contract = self.native(name)?;
        let code_id = self.app.store_code(contract());
        debug!("preloaded {name} as code {code_id}");
        Ok(code_id)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    fn native(&self, name: &str) -> anyhow::Result<NativeContract> {
        self.natives
            .get(name)
            .copied()
            .ok_or_else(|| anyhow!("no local build registered for artifact {name}"))
    }
}

impl Chain for LocalChain {
    fn upload(&mut self, sender: &Addr, artifact: &Artifact) -> anyhow::Result<UploadResult> {
        let contract = self.native(&artifact.name)?;
        let code_id = self.app.store_code(contract());
        debug!(
            "{sender} stored {} ({} bytes) as code {code_id}",
            artifact.name,
            artifact.wasm.len()
        );

        Ok(UploadResult {
            code_id,
            checksum: artifact.checksum(),
        })
    }

    fn instantiate<M: Serialize>(
        &mut self,
        sender: &Addr,
        code_id: u64,
        msg: &M,
        label: &str,
    ) -> anyhow::Result<Addr> {
        self.app
            .instantiate_contract(code_id, sender.clone(), msg, &[], label, None)
            .with_context(|| format!("failed to instantiate code {code_id}"))
    }

    fn execute<M: Serialize + Debug>(
        &mut self,
        sender: &Addr,
        contract: &Addr,
        msg: &M,
    ) -> anyhow::Result<Vec<Event>> {
        let res = self
            .app
            .execute_contract(sender.clone(), contract.clone(), msg, &[])
            .with_context(|| format!("failed to execute {msg:?} on {contract}"))?;
        Ok(res.events)
    }

    fn query<Q: Serialize, T: DeserializeOwned>(
        &self,
        contract: &Addr,
        msg: &Q,
    ) -> anyhow::Result<T> {
        self.app
            .wrap()
            .query_wasm_smart(contract.to_string(), msg)
            .with_context(|| format!("query against {contract} failed"))
    }
}
