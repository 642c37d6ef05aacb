//! Core trait abstractions.
//!
//! [`NftLiquidityPool`] is the pool-level API, [`FromConfig`] builds
//! pools from validated configuration, and the registry traits describe
//! the external custody primitives settlement calls into.

mod from_config;
mod liquidity_pool;
mod registry;

pub use from_config::FromConfig;
pub use liquidity_pool::NftLiquidityPool;
pub use registry::{FungibleLedger, LpShareLedger, NftRegistry};
