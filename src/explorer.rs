use crate::chains::{self, ChainId};
use alloy::primitives::TxHash;
use url::Url;

/// Block-explorer URL for a transaction, if the chain has a known explorer.
/// Pure formatting; no network access.
pub fn tx_url(chain: ChainId, tx: TxHash) -> Option<Url> {
    let base = chains::explorer_base(chain)?;
    Url::parse(&format!("{base}/tx/{tx}")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::{ARBITRUM, ETHEREUM};
    use alloy::primitives::b256;

    const TX: TxHash =
        b256!("deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef");

    #[test]
    fn mainnet_links_point_at_etherscan() {
        let url = tx_url(ETHEREUM, TX).unwrap();
        assert_eq!(
            url.as_str(),
            "https://etherscan.io/tx/0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef"
        );
    }

    #[test]
    fn per_chain_bases_are_respected() {
        let url = tx_url(ARBITRUM, TX).unwrap();
        assert!(url.as_str().starts_with("https://arbiscan.io/tx/0x"));
    }

    #[test]
    fn unknown_chain_has_no_link() {
        assert!(tx_url(ChainId(999), TX).is_none());
    }
}
