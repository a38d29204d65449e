use crate::claim::PoolId;
use crate::error::ClaimError;
use alloy::network::Ethereum;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder};
use alloy::sol;
use async_trait::async_trait;
use serde::Serialize;

sol! {
    #[sol(rpc)]
    interface IMiniChef {
        function harvest(uint256 pid, address to) external;
    }
}

/// Confirmed claim transaction, taken verbatim from the network receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimReceipt {
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub from: Address,
}

/// A staking contract bound to a signer, able to submit one harvest call.
#[async_trait]
pub trait StakingContract: Send + Sync {
    type Pending: PendingClaim;

    /// Submit the harvest transaction for `pool_id`, paying rewards to `to`.
    async fn harvest(&self, pool_id: PoolId, to: Address) -> Result<Self::Pending, ClaimError>;
}

/// A submitted harvest transaction awaiting inclusion in a block.
#[async_trait]
pub trait PendingClaim: Send {
    async fn confirmed(self) -> Result<ClaimReceipt, ClaimError>;
}

/// MiniChef handle bound to a wallet-backed provider.
pub struct MiniChef {
    instance: IMiniChef::IMiniChefInstance<DynProvider>,
}

impl MiniChef {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            instance: IMiniChef::new(address, provider),
        }
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

#[async_trait]
impl StakingContract for MiniChef {
    type Pending = PendingHarvest;

    async fn harvest(&self, pool_id: PoolId, to: Address) -> Result<PendingHarvest, ClaimError> {
        let pending = self
            .instance
            .harvest(U256::from(pool_id), to)
            .send()
            .await
            .map_err(|e| ClaimError::Submission(e.to_string()))?;
        tracing::debug!("harvest submitted for pool {pool_id}: {}", pending.tx_hash());
        Ok(PendingHarvest { inner: pending })
    }
}

/// Harvest transaction accepted by the network, not yet mined.
pub struct PendingHarvest {
    inner: PendingTransactionBuilder<Ethereum>,
}

#[async_trait]
impl PendingClaim for PendingHarvest {
    async fn confirmed(self) -> Result<ClaimReceipt, ClaimError> {
        let receipt = self
            .inner
            .get_receipt()
            .await
            .map_err(|e| ClaimError::Confirmation(e.to_string()))?;
        if !receipt.status() {
            return Err(ClaimError::Reverted(receipt.transaction_hash));
        }
        Ok(ClaimReceipt {
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            from: receipt.from,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use alloy::providers::{Provider, ProviderBuilder};

    #[test]
    fn handle_reports_bound_address() {
        let deployment = address!("7875af1a6878bda1c129a4e2356a3fd040418be5");
        let provider = ProviderBuilder::new()
            .connect_http("http://localhost:8545".parse().unwrap())
            .erased();
        let chef = MiniChef::new(deployment, provider);
        assert_eq!(chef.address(), deployment);
    }

    #[test]
    fn receipt_serializes_with_hash_and_block() {
        let receipt = ClaimReceipt {
            transaction_hash: TxHash::ZERO,
            block_number: Some(42),
            gas_used: 21000,
            from: Address::ZERO,
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["block_number"], 42);
        assert_eq!(json["gas_used"], 21000);
        assert!(json["transaction_hash"]
            .as_str()
            .unwrap()
            .starts_with("0x"));
    }
}
