use std::error::Error;

use url::Url;

use crate::utils::parse_private_keys;

const NETWORK_ENV_VAR: &str = "NETWORK";
const RPC_URL_ENV_VAR: &str = "RPC_URL";
const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

const VKU_CHAIN: &str = "vku_chain";
const LOCALHOST: &str = "localhost";

const VKU_CHAIN_RPC_URL: &str = "http://207.244.229.251:8549/";
const VKU_CHAIN_ID: u64 = 6660002;
// 10 gwei
const VKU_CHAIN_GAS_PRICE: u64 = 10_000_000_000;
const VKU_CHAIN_EXPLORER_API_URL: &str = "http://207.244.229.251/api";
const VKU_CHAIN_EXPLORER_BROWSER_URL: &str = "http://207.244.229.251";
const VKU_CHAIN_EXPLORER_API_KEY: &str = "Rxqgq500k3xPFvz9GrLghBNrcMJTvqXZDJgPYBfveKFkMDJjCX";

const LOCALHOST_RPC_URL: &str = "http://localhost:8545";
const LOCALHOST_CHAIN_ID: u64 = 31337;

const SOLC_VERSION: &str = "v0.8.20+commit.a1b79de6";
const OPTIMIZER_RUNS: u32 = 999999;

/// connection + signing parameters for one target network
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkProfile {
    pub name: String,
    pub rpc_url: String,
    pub chain_id: u64,
    /// raw hex signing keys, first entry is the deployer
    pub accounts: Vec<String>,
    pub gas_price: Option<u64>,
}

/// block-explorer verification credentials for one network
#[derive(Clone, Debug, PartialEq)]
pub struct ExplorerProfile {
    pub network: String,
    pub chain_id: u64,
    pub api_url: String,
    pub browser_url: String,
    pub api_key: String,
}

/// compiler metadata the explorer needs to reproduce the build
#[derive(Clone, Debug, PartialEq)]
pub struct CompilerSettings {
    pub solc_version: String,
    pub optimizer_enabled: bool,
    pub optimizer_runs: u32,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            solc_version: SOLC_VERSION.to_owned(),
            optimizer_enabled: true,
            optimizer_runs: OPTIMIZER_RUNS,
        }
    }
}

impl NetworkProfile {
    pub fn vku_chain() -> Self {
        Self {
            name: VKU_CHAIN.to_owned(),
            rpc_url: VKU_CHAIN_RPC_URL.to_owned(),
            chain_id: VKU_CHAIN_ID,
            accounts: vec![],
            gas_price: Some(VKU_CHAIN_GAS_PRICE),
        }
    }

    /// local dev node, no fixed gas price
    pub fn localhost() -> Self {
        Self {
            name: LOCALHOST.to_owned(),
            rpc_url: LOCALHOST_RPC_URL.to_owned(),
            chain_id: LOCALHOST_CHAIN_ID,
            accounts: vec![],
            gas_price: None,
        }
    }
}

impl ExplorerProfile {
    pub fn vku_chain() -> Self {
        Self {
            network: VKU_CHAIN.to_owned(),
            chain_id: VKU_CHAIN_ID,
            api_url: VKU_CHAIN_EXPLORER_API_URL.to_owned(),
            browser_url: VKU_CHAIN_EXPLORER_BROWSER_URL.to_owned(),
            api_key: VKU_CHAIN_EXPLORER_API_KEY.to_owned(),
        }
    }
}

fn builtin_profile(name: &str) -> Option<NetworkProfile> {
    match name {
        VKU_CHAIN => Some(NetworkProfile::vku_chain()),
        LOCALHOST => Some(NetworkProfile::localhost()),
        _ => None,
    }
}

fn builtin_explorer(network_name: &str) -> Option<ExplorerProfile> {
    match network_name {
        VKU_CHAIN => Some(ExplorerProfile::vku_chain()),
        _ => None,
    }
}

pub struct DeployConfig {
    pub network: NetworkProfile,
    pub explorer: Option<ExplorerProfile>,
    pub compiler: CompilerSettings,
}

impl DeployConfig {
    /// profile named by NETWORK (default vku_chain), with RPC_URL and
    /// PRIVATE_KEY overrides applied from the env
    pub fn load() -> Result<Self, Box<dyn Error>> {
        dotenv::dotenv().ok();

        let network_name =
            std::env::var(NETWORK_ENV_VAR).unwrap_or_else(|_| VKU_CHAIN.to_owned());

        let mut network = builtin_profile(&network_name)
            .ok_or_else(|| format!("unknown network profile: {network_name}"))?;

        if let Ok(rpc_url) = std::env::var(RPC_URL_ENV_VAR) {
            network.rpc_url = rpc_url;
        }
        Url::parse(&network.rpc_url)?;

        if let Ok(raw_keys) = std::env::var(PRIVATE_KEY_ENV_VAR) {
            network.accounts = parse_private_keys(&raw_keys);
        }

        let explorer = builtin_explorer(&network.name);

        let config = Self {
            network,
            explorer,
            compiler: CompilerSettings::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// the explorer entry must agree with the network's chain id, otherwise
    /// verification targets the wrong chain
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if let Some(explorer) = &self.explorer {
            if explorer.chain_id != self.network.chain_id {
                return Err(format!(
                    "explorer chain id {} does not match chain id {} of network {}",
                    explorer.chain_id, self.network.chain_id, self.network.name
                )
                .into());
            }
            Url::parse(&explorer.api_url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profiles_resolve_by_name() {
        assert_eq!(builtin_profile(VKU_CHAIN).unwrap().chain_id, 6660002);
        assert_eq!(builtin_profile(LOCALHOST).unwrap().chain_id, 31337);
        assert!(builtin_profile("mainnet").is_none());
    }

    #[test]
    fn vku_chain_explorer_agrees_with_network() {
        let config = DeployConfig {
            network: NetworkProfile::vku_chain(),
            explorer: builtin_explorer(VKU_CHAIN),
            compiler: CompilerSettings::default(),
        };
        assert!(config.explorer.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn chain_id_mismatch_is_rejected() {
        let mut config = DeployConfig {
            network: NetworkProfile::vku_chain(),
            explorer: Some(ExplorerProfile::vku_chain()),
            compiler: CompilerSettings::default(),
        };
        config.network.chain_id = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn localhost_has_no_explorer() {
        assert!(builtin_explorer(LOCALHOST).is_none());
    }

    #[test]
    fn compiler_defaults_match_the_contract_build() {
        let compiler = CompilerSettings::default();
        assert_eq!(compiler.solc_version, "v0.8.20+commit.a1b79de6");
        assert!(compiler.optimizer_enabled);
        assert_eq!(compiler.optimizer_runs, 999999);
    }
}
