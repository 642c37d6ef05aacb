//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use nft_amm::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, Amount, DepositRequest, LpShares, ProportionalShare, RedemptionRequest, TokenId,
};

pub use crate::traits::{FromConfig, FungibleLedger, LpShareLedger, NftLiquidityPool, NftRegistry};

pub use crate::math::CheckedArithmetic;

pub use crate::config::PoolConfig;

pub use crate::merkle::{AllowList, MerkleProof, MerkleRoot};

pub use crate::error::{PoolError, Result, TransferError};

pub use crate::pools::NftPool;
#[cfg(feature = "in-memory")]
pub use crate::pools::InMemoryNftPool;
pub use crate::registry::Registries;
