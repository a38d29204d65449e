use crate::chains::ChainId;
use crate::contract::{ClaimReceipt, PendingClaim, StakingContract};
use crate::error::ClaimError;
use crate::notify::{Notification, NotificationSink};
use crate::registry::ContractRegistry;
use crate::signer::SignerProvider;
use alloy::primitives::Address;

/// Index of a staking pool inside the contract's pool list. Opaque here;
/// range checks belong to the contract.
pub type PoolId = u64;

/// One-shot claim of accrued staking rewards.
///
/// Each invocation resolves a fresh signer, binds a fresh contract handle,
/// submits exactly one harvest transaction, and waits for it to be mined.
/// Nothing is cached between invocations and concurrent invocations run
/// fully independently, so double-submission protection belongs to the
/// caller (e.g. disabling the claim button while one is in flight).
pub struct ClaimAction<S, R, N> {
    signers: S,
    registry: R,
    notifications: N,
}

impl<S, R, N> ClaimAction<S, R, N>
where
    S: SignerProvider,
    R: ContractRegistry,
    N: NotificationSink,
{
    pub fn new(signers: S, registry: R, notifications: N) -> Self {
        Self {
            signers,
            registry,
            notifications,
        }
    }

    /// Claim accrued rewards from pool `pool_id` on `chain`, paying out to
    /// `caller`. Emits exactly one notification, success or failure, and
    /// returns the confirmed receipt or the classified error.
    ///
    /// Both signer resolution and the confirmation wait can suspend for an
    /// unbounded time; no timeout or cancellation is applied here.
    pub async fn claim(
        &self,
        chain: ChainId,
        caller: Address,
        pool_id: PoolId,
    ) -> Result<ClaimReceipt, ClaimError> {
        let outcome = self.run(chain, caller, pool_id).await;
        let notification = match &outcome {
            Ok(receipt) => Notification::claim_succeeded(chain, receipt),
            Err(err) => Notification::claim_failed(chain, err),
        };
        self.notifications.notify(notification);
        outcome
    }

    async fn run(
        &self,
        chain: ChainId,
        caller: Address,
        pool_id: PoolId,
    ) -> Result<ClaimReceipt, ClaimError> {
        tracing::debug!("resolving signer for chain {chain}");
        let signer = self.signers.signer_for(chain).await?;

        // Preconditions, in order: connected wallet, registered deployment,
        // authorized signer. The first miss wins and nothing is submitted.
        if caller == Address::ZERO {
            return Err(ClaimError::WalletNotConnected);
        }
        let contract_address = self
            .registry
            .address_for(chain)
            .ok_or(ClaimError::UnsupportedChain(chain))?;
        let signer = signer.ok_or(ClaimError::SignerUnavailable(chain))?;

        let contract = self.signers.bind(chain, contract_address, signer);
        let pending = contract.harvest(pool_id, caller).await?;
        let receipt = pending.confirmed().await?;
        tracing::info!(
            "claim confirmed on chain {chain}: {}",
            receipt.transaction_hash
        );
        Ok(receipt)
    }
}
