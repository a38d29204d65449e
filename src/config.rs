use crate::chains::ChainId;
use crate::error::ConfigError;
use crate::registry::StaticRegistry;
use crate::signer::RpcSignerProvider;
use alloy::primitives::Address;
use alloy::transports::http::reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Per-chain settings: where to submit transactions and which MiniChef
/// deployment to claim from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    pub rpc_url: String,
    pub minichef: Address,
}

/// Client configuration loaded from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub chains: HashMap<ChainId, ChainConfig>,
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Contract registry covering exactly the configured chains.
    pub fn registry(&self) -> StaticRegistry {
        self.chains
            .iter()
            .fold(StaticRegistry::empty(), |registry, (chain, cfg)| {
                registry.with_contract(*chain, cfg.minichef)
            })
    }

    /// Signer provider with every configured RPC endpoint registered.
    /// The wallet is attached separately by the caller.
    pub fn signer_provider(&self) -> Result<RpcSignerProvider, ConfigError> {
        let mut provider = RpcSignerProvider::new();
        for (chain, cfg) in &self.chains {
            let endpoint = Url::parse(&cfg.rpc_url).map_err(|e| ConfigError::InvalidEndpoint {
                chain: *chain,
                reason: e.to_string(),
            })?;
            provider = provider.with_endpoint(*chain, endpoint);
        }
        Ok(provider)
    }
}
