use serde::{Deserialize, Serialize};
use std::fmt;

/// EVM chain identifier. Selects both the signer endpoint and the
/// staking contract address for a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

pub const ETHEREUM: ChainId = ChainId(1);
pub const OPTIMISM: ChainId = ChainId(10);
pub const BSC: ChainId = ChainId(56);
pub const POLYGON: ChainId = ChainId(137);
pub const FANTOM: ChainId = ChainId(250);
pub const BOBA: ChainId = ChainId(288);
pub const MOONRIVER: ChainId = ChainId(1285);
pub const ARBITRUM: ChainId = ChainId(42161);
pub const AVALANCHE: ChainId = ChainId(43114);
pub const AURORA: ChainId = ChainId(1313161554);
pub const HARMONY: ChainId = ChainId(1666600000);

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        ChainId(id)
    }
}

/// Block-explorer base URL for a chain, if one is known.
pub fn explorer_base(chain: ChainId) -> Option<&'static str> {
    match chain {
        ETHEREUM => Some("https://etherscan.io"),
        OPTIMISM => Some("https://optimistic.etherscan.io"),
        BSC => Some("https://bscscan.com"),
        POLYGON => Some("https://polygonscan.com"),
        FANTOM => Some("https://ftmscan.com"),
        BOBA => Some("https://bobascan.com"),
        MOONRIVER => Some("https://moonriver.moonscan.io"),
        ARBITRUM => Some("https://arbiscan.io"),
        AVALANCHE => Some("https://snowtrace.io"),
        AURORA => Some("https://explorer.aurora.dev"),
        HARMONY => Some("https://explorer.harmony.one"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_id_displays_as_plain_integer() {
        assert_eq!(ARBITRUM.to_string(), "42161");
        assert_eq!(ChainId::from(7u64).to_string(), "7");
    }

    #[test]
    fn chain_id_serde_is_transparent() {
        let json = serde_json::to_string(&POLYGON).unwrap();
        assert_eq!(json, "137");
        let back: ChainId = serde_json::from_str("137").unwrap();
        assert_eq!(back, POLYGON);
    }

    #[test]
    fn known_chains_have_explorers() {
        assert_eq!(explorer_base(ETHEREUM), Some("https://etherscan.io"));
        assert_eq!(explorer_base(ARBITRUM), Some("https://arbiscan.io"));
        assert_eq!(explorer_base(ChainId(999)), None);
    }
}
