use crate::chains::ChainId;
use crate::contract::ClaimReceipt;
use crate::error::{ClaimError, ClaimErrorKind};
use crate::explorer;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Failure,
}

/// User-facing outcome of a claim, ready for a toast/banner layer to render.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: String,
    pub severity: Severity,
    pub chain: ChainId,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ClaimErrorKind>,
}

impl Notification {
    pub fn claim_succeeded(chain: ChainId, receipt: &ClaimReceipt) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            severity: Severity::Success,
            chain,
            message: "Claim completed".to_string(),
            explorer_url: explorer::tx_url(chain, receipt.transaction_hash)
                .map(|u| u.to_string()),
            error_kind: None,
        }
    }

    pub fn claim_failed(chain: ChainId, err: &ClaimError) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            severity: Severity::Failure,
            chain,
            message: err.to_string(),
            explorer_url: None,
            error_kind: Some(err.kind()),
        }
    }
}

/// Surface claim outcomes to the user. The claim action calls this exactly
/// once per invocation, on both paths.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Sink that reports outcomes through the log stream.
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => tracing::info!(
                "{} on chain {} ({})",
                notification.message,
                notification.chain,
                notification.explorer_url.as_deref().unwrap_or("no explorer link")
            ),
            Severity::Failure => tracing::error!(
                "claim failed on chain {}: {}",
                notification.chain,
                notification.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::ETHEREUM;
    use alloy::primitives::{Address, TxHash};

    fn receipt() -> ClaimReceipt {
        ClaimReceipt {
            transaction_hash: TxHash::ZERO,
            block_number: Some(1),
            gas_used: 21000,
            from: Address::ZERO,
        }
    }

    #[test]
    fn success_pairs_label_with_explorer_link() {
        let n = Notification::claim_succeeded(ETHEREUM, &receipt());
        assert_eq!(n.severity, Severity::Success);
        assert_eq!(n.chain, ETHEREUM);
        assert_eq!(n.message, "Claim completed");
        assert!(n.explorer_url.unwrap().starts_with("https://etherscan.io/tx/"));
        assert!(n.error_kind.is_none());
    }

    #[test]
    fn success_on_unknown_chain_omits_link() {
        let n = Notification::claim_succeeded(ChainId(999), &receipt());
        assert!(n.explorer_url.is_none());
    }

    #[test]
    fn failure_carries_message_and_kind() {
        let n = Notification::claim_failed(ETHEREUM, &ClaimError::WalletNotConnected);
        assert_eq!(n.severity, Severity::Failure);
        assert_eq!(n.message, "Wallet must be connected");
        assert_eq!(n.error_kind, Some(ClaimErrorKind::Precondition));
    }

    #[test]
    fn notifications_get_distinct_ids() {
        let a = Notification::claim_succeeded(ETHEREUM, &receipt());
        let b = Notification::claim_succeeded(ETHEREUM, &receipt());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn failure_serializes_without_explorer_url() {
        let n = Notification::claim_failed(ETHEREUM, &ClaimError::WalletNotConnected);
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["severity"], "failure");
        assert_eq!(json["error_kind"], "precondition");
        assert!(json.get("explorer_url").is_none());
    }
}
