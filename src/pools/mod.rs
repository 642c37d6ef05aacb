//! Pool implementations.
//!
//! [`NftPool`] is generic over its three registries so it can settle
//! against any custody backend.  With the `in-memory` feature,
//! [`InMemoryNftPool`] fixes them to the map-backed registries.

mod nft_pool;

pub use nft_pool::NftPool;

/// A pool settling against the in-memory registries.
#[cfg(feature = "in-memory")]
pub type InMemoryNftPool = NftPool<
    crate::registry::InMemoryFungibleLedger,
    crate::registry::InMemoryNftRegistry,
    crate::registry::InMemoryLpLedger,
>;
