use crate::chains::ChainId;
use crate::contract::{MiniChef, StakingContract};
use crate::error::ClaimError;
use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;
use async_trait::async_trait;
use std::collections::HashMap;

/// Resolves the active signing identity for a chain and binds it to a
/// deployed staking contract.
///
/// `signer_for` is the suspension point: it may take arbitrarily long
/// (hardware wallets, approval prompts) and yields `None` when no signer is
/// authorized for the chain. `bind` is pure handle construction; a resolved
/// signer carries everything binding needs, so it cannot fail.
#[async_trait]
pub trait SignerProvider: Send + Sync {
    type Signer: Send;
    type Contract: StakingContract;

    async fn signer_for(&self, chain: ChainId) -> Result<Option<Self::Signer>, ClaimError>;

    fn bind(&self, chain: ChainId, contract: Address, signer: Self::Signer) -> Self::Contract;
}

/// Signer resolved for one chain: the wallet plus the RPC endpoint it
/// submits through. Consumed by `bind`; never cached.
pub struct ChainSigner {
    wallet: EthereumWallet,
    endpoint: Url,
}

/// `SignerProvider` backed by a local wallet and per-chain HTTP RPC
/// endpoints.
#[derive(Debug, Default)]
pub struct RpcSignerProvider {
    endpoints: HashMap<ChainId, Url>,
    wallet: Option<EthereumWallet>,
}

impl RpcSignerProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the wallet used to sign on every configured chain.
    pub fn with_wallet(mut self, wallet: EthereumWallet) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// Register the RPC endpoint for a chain.
    pub fn with_endpoint(mut self, chain: ChainId, endpoint: Url) -> Self {
        self.endpoints.insert(chain, endpoint);
        self
    }

    pub fn has_endpoint(&self, chain: ChainId) -> bool {
        self.endpoints.contains_key(&chain)
    }
}

#[async_trait]
impl SignerProvider for RpcSignerProvider {
    type Signer = ChainSigner;
    type Contract = MiniChef;

    async fn signer_for(&self, chain: ChainId) -> Result<Option<ChainSigner>, ClaimError> {
        let Some(wallet) = self.wallet.clone() else {
            return Ok(None);
        };
        let Some(endpoint) = self.endpoints.get(&chain).cloned() else {
            tracing::debug!("no RPC endpoint configured for chain {chain}");
            return Ok(None);
        };
        Ok(Some(ChainSigner { wallet, endpoint }))
    }

    fn bind(&self, _chain: ChainId, contract: Address, signer: ChainSigner) -> MiniChef {
        let provider = ProviderBuilder::new()
            .wallet(signer.wallet)
            .connect_http(signer.endpoint)
            .erased();
        MiniChef::new(contract, provider)
    }
}
