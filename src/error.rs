use crate::chains::ChainId;
use alloy::primitives::TxHash;
use serde::Serialize;

/// Where in the claim lifecycle an error arose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimErrorKind {
    /// Failed before any transaction was submitted.
    Precondition,
    /// The harvest call was rejected before the network accepted it.
    Submission,
    /// The transaction was accepted but confirmation failed or reverted.
    Confirmation,
}

#[derive(Debug, thiserror::Error)]
pub enum ClaimError {
    #[error("Wallet must be connected")]
    WalletNotConnected,
    #[error("no staking contract registered for chain {0}")]
    UnsupportedChain(ChainId),
    #[error("no signer authorized for chain {0}")]
    SignerUnavailable(ChainId),
    #[error("signer resolution failed: {0}")]
    SignerResolution(String),
    #[error("harvest submission rejected: {0}")]
    Submission(String),
    #[error("confirmation failed: {0}")]
    Confirmation(String),
    #[error("transaction {0} reverted on-chain")]
    Reverted(TxHash),
}

impl ClaimError {
    pub fn kind(&self) -> ClaimErrorKind {
        match self {
            ClaimError::WalletNotConnected
            | ClaimError::UnsupportedChain(_)
            | ClaimError::SignerUnavailable(_)
            | ClaimError::SignerResolution(_) => ClaimErrorKind::Precondition,
            ClaimError::Submission(_) => ClaimErrorKind::Submission,
            ClaimError::Confirmation(_) | ClaimError::Reverted(_) => ClaimErrorKind::Confirmation,
        }
    }
}

/// Errors from loading or converting client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid RPC endpoint for chain {chain}: {reason}")]
    InvalidEndpoint { chain: ChainId, reason: String },
}
