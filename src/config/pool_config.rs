//! Configuration for an NFT/fungible liquidity pool.

use crate::domain::AccountId;
use crate::error::PoolError;
use crate::merkle::{AllowList, MerkleRoot};

/// Configuration for one pool pairing an NFT collection with a base asset.
///
/// Fixed at pool creation.  The allow-list root in particular never
/// changes afterwards.
///
/// # Validation
///
/// - The custodian (the account holding the pool's assets) is not the
///   zero account.
/// - The base asset and the collection are different registries.
/// - An allow-list root of all zeros means the pool is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    custodian: AccountId,
    base_asset: AccountId,
    collection: AccountId,
    allow_list: AllowList,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if the custodian is the
    /// zero account or the base asset and collection coincide.
    ///
    /// # Examples
    ///
    /// ```
    /// use nft_amm::config::PoolConfig;
    /// use nft_amm::domain::AccountId;
    ///
    /// let cfg = PoolConfig::new(
    ///     AccountId::from_bytes([0xC0; 32]),
    ///     AccountId::from_bytes([0xBA; 32]),
    ///     AccountId::from_bytes([0xC1; 32]),
    ///     None,
    /// )
    /// .expect("valid config");
    /// assert!(cfg.allow_list().is_open());
    /// ```
    pub fn new(
        custodian: AccountId,
        base_asset: AccountId,
        collection: AccountId,
        allow_list_root: Option<MerkleRoot>,
    ) -> Result<Self, PoolError> {
        let config = Self {
            custodian,
            base_asset,
            collection,
            allow_list: AllowList::from_root(allow_list_root),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] on the first violated
    /// invariant.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.custodian.is_zero() {
            return Err(PoolError::InvalidConfiguration(
                "custodian must not be the zero account",
            ));
        }
        if self.base_asset == self.collection {
            return Err(PoolError::InvalidConfiguration(
                "base asset and collection must differ",
            ));
        }
        Ok(())
    }

    /// Account holding the pool's base asset and NFTs.
    #[must_use]
    pub const fn custodian(&self) -> &AccountId {
        &self.custodian
    }

    /// Identifier of the base-asset registry.
    #[must_use]
    pub const fn base_asset(&self) -> &AccountId {
        &self.base_asset
    }

    /// Identifier of the NFT collection.
    #[must_use]
    pub const fn collection(&self) -> &AccountId {
        &self.collection
    }

    /// Eligibility policy for deposited and redeemed ids.
    #[must_use]
    pub const fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }
}
