use crate::chains::{self, ChainId};
use alloy::primitives::{address, Address};
use std::collections::HashMap;

/// Canonical MiniChef deployment shared across most supported chains.
const CANONICAL_MINICHEF: Address = address!("7875af1a6878bda1c129a4e2356a3fd040418be5");

/// Maps a chain to the staking contract deployed on it.
///
/// A miss is an explicit `None`, surfaced by the claim action as an
/// unsupported-chain precondition failure before anything is submitted.
pub trait ContractRegistry: Send + Sync {
    fn address_for(&self, chain: ChainId) -> Option<Address>;
}

/// In-memory registry of MiniChef deployments keyed by chain.
#[derive(Debug, Clone)]
pub struct StaticRegistry {
    contracts: HashMap<ChainId, Address>,
}

impl StaticRegistry {
    /// Registry pre-populated with the canonical deployments.
    pub fn new() -> Self {
        let mut contracts = HashMap::new();
        for chain in [
            chains::OPTIMISM,
            chains::BSC,
            chains::POLYGON,
            chains::FANTOM,
            chains::BOBA,
            chains::MOONRIVER,
            chains::ARBITRUM,
            chains::AVALANCHE,
            chains::AURORA,
            chains::HARMONY,
        ] {
            contracts.insert(chain, CANONICAL_MINICHEF);
        }
        Self { contracts }
    }

    /// Registry with no deployments registered.
    pub fn empty() -> Self {
        Self {
            contracts: HashMap::new(),
        }
    }

    /// Register (or override) the contract for a chain.
    pub fn with_contract(mut self, chain: ChainId, address: Address) -> Self {
        self.contracts.insert(chain, address);
        self
    }

    pub fn chains(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.contracts.keys().copied()
    }
}

impl Default for StaticRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractRegistry for StaticRegistry {
    fn address_for(&self, chain: ChainId) -> Option<Address> {
        self.contracts.get(&chain).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::{ARBITRUM, AVALANCHE, ETHEREUM};

    #[test]
    fn defaults_cover_canonical_deployments() {
        let registry = StaticRegistry::new();
        assert_eq!(registry.address_for(ARBITRUM), Some(CANONICAL_MINICHEF));
        assert_eq!(registry.address_for(AVALANCHE), Some(CANONICAL_MINICHEF));
    }

    #[test]
    fn unknown_chain_is_an_explicit_miss() {
        let registry = StaticRegistry::new();
        assert_eq!(registry.address_for(ChainId(999)), None);
    }

    #[test]
    fn with_contract_overrides_and_extends() {
        let custom = address!("00000000000000000000000000000000000000aa");
        let registry = StaticRegistry::empty()
            .with_contract(ETHEREUM, custom)
            .with_contract(ARBITRUM, custom);
        assert_eq!(registry.address_for(ETHEREUM), Some(custom));
        assert_eq!(registry.address_for(ARBITRUM), Some(custom));
        assert_eq!(registry.address_for(AVALANCHE), None);
        assert_eq!(registry.chains().count(), 2);
    }
}
