use soroban_sdk::{Address, BytesN, Env};

/// Places account code at the address derived from `account_salt`, with
/// `owner` as its constructor argument.
pub trait Deploy {
    fn deploy(
        &self,
        env: &Env,
        wasm_hash: BytesN<32>,
        account_salt: BytesN<32>,
        owner: &BytesN<32>,
    ) -> Address;
}

/// Deploys the uploaded simple_account WASM through the host deployer.
pub struct WasmDeployer;

impl Deploy for WasmDeployer {
    fn deploy(
        &self,
        env: &Env,
        wasm_hash: BytesN<32>,
        account_salt: BytesN<32>,
        owner: &BytesN<32>,
    ) -> Address {
        // The constructor takes the public key as bytes
        env.deployer()
            .with_current_contract(account_salt)
            .deploy_v2(wasm_hash, (owner.clone(),))
    }
}
