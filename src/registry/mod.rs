//! Asset registries the engines settle against.
//!
//! [`Registries`] bundles one implementation of each registry trait.
//! With the `in-memory` feature the crate ships map-backed
//! implementations suitable for tests and simulations.

#[cfg(feature = "in-memory")]
mod fungible;
#[cfg(feature = "in-memory")]
mod lp;
#[cfg(feature = "in-memory")]
mod nft;

#[cfg(feature = "in-memory")]
pub use fungible::InMemoryFungibleLedger;
#[cfg(feature = "in-memory")]
pub use lp::InMemoryLpLedger;
#[cfg(feature = "in-memory")]
pub use nft::InMemoryNftRegistry;

/// The three registries a pool settles against.
///
/// Fields are public: the registries are owned by the pool, but callers
/// need to seed and inspect them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registries<B, N, L> {
    /// Base-asset balances.
    pub base: B,
    /// NFT ownership.
    pub nfts: N,
    /// LP share balances.
    pub lp: L,
}

impl<B, N, L> Registries<B, N, L> {
    /// Bundles the three registries.
    pub const fn new(base: B, nfts: N, lp: L) -> Self {
        Self { base, nfts, lp }
    }
}

/// Registries backed entirely by in-memory maps.
#[cfg(feature = "in-memory")]
pub type InMemoryRegistries =
    Registries<InMemoryFungibleLedger, InMemoryNftRegistry, InMemoryLpLedger>;
