pub mod chains;
pub mod claim;
pub mod config;
pub mod contract;
pub mod error;
pub mod explorer;
pub mod notify;
pub mod registry;
pub mod signer;

pub use chains::ChainId;
pub use claim::{ClaimAction, PoolId};
pub use config::{ChainConfig, ClientConfig};
pub use contract::{ClaimReceipt, MiniChef, PendingClaim, StakingContract};
pub use error::{ClaimError, ClaimErrorKind, ConfigError};
pub use notify::{Notification, NotificationSink, Severity, TracingSink};
pub use registry::{ContractRegistry, StaticRegistry};
pub use signer::{ChainSigner, RpcSignerProvider, SignerProvider};
