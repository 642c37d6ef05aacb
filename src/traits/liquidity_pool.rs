//! Pool-level liquidity operations.
//!
//! [`NftLiquidityPool`] is the surface a caller sees: quote and redeem LP
//! shares for base asset plus specific NFTs, and the mirror-image
//! deposit.  The redemption path is the one with hard guarantees.
//!
//! # Liquidity Accounting Invariant
//!
//! The reserves and the LP supply reported by
//! [`NftLiquidityPool::ledger`] change **only** through
//! [`NftLiquidityPool::deposit`] and [`NftLiquidityPool::redeem`], and
//! always together.  For a redemption burning `lp` of `S` shares:
//!
//! ```text
//! base_out       = ⌊lp × B / S⌋
//! fractional_out = ⌊lp × F / S⌋ = len(token_ids) × 1e18
//! ```
//!
//! # All-or-Nothing
//!
//! A rejected call leaves the ledger and every registry balance exactly
//! as it found them.

use crate::domain::{
    AccountId, Amount, DepositRequest, LpShares, ProportionalShare, RedemptionRequest,
};
use crate::error::PoolError;
use crate::ledger::ReserveLedger;

/// Trait for pools pairing an NFT collection with a fungible base asset.
///
/// # Errors
///
/// Methods return [`Result<T, PoolError>`].  The redemption-specific
/// variants are:
///
/// - [`PoolError::CustodianCaller`]: the caller is the pool's custodian
/// - [`PoolError::DivisionByZero`]: no outstanding LP supply
/// - [`PoolError::EligibilityFailure`]: an id failed allow-list verification
/// - [`PoolError::SlippageFractionalOut`]: id count does not match the entitlement
/// - [`PoolError::SlippageBaseOut`]: base entitlement below the caller's floor
/// - [`PoolError::InsufficientLpBalance`]: caller holds too few shares
/// - [`PoolError::Transfer`]: a registry rejected a settlement leg
pub trait NftLiquidityPool {
    /// Current reserves and supply.
    #[must_use]
    fn ledger(&self) -> &ReserveLedger;

    /// Previews what burning `lp_amount` shares would pay out.
    ///
    /// # Errors
    ///
    /// [`PoolError::DivisionByZero`] if the pool has no LP supply.
    fn quote_redemption(&self, lp_amount: LpShares) -> Result<ProportionalShare, PoolError>;

    /// Burns the caller's shares and pays out base asset plus the
    /// requested NFTs.
    ///
    /// # Errors
    ///
    /// Any of the redemption variants listed on the trait.
    fn redeem(
        &mut self,
        caller: &AccountId,
        request: &RedemptionRequest,
    ) -> Result<ProportionalShare, PoolError>;

    /// Previews the shares minted for depositing `base_amount` and
    /// `nft_count` NFTs.
    ///
    /// # Errors
    ///
    /// [`PoolError::InvalidQuantity`] if the deposit cannot mint shares.
    fn quote_deposit(&self, base_amount: Amount, nft_count: u128) -> Result<LpShares, PoolError>;

    /// Takes the caller's base asset and NFTs into custody and mints shares.
    ///
    /// # Errors
    ///
    /// - [`PoolError::CustodianCaller`] if the caller is the pool's custodian.
    /// - [`PoolError::EligibilityFailure`] for an ineligible id.
    /// - [`PoolError::SlippageLpOut`] if fewer shares than requested would be minted.
    /// - [`PoolError::Transfer`] if a registry rejects a leg.
    fn deposit(
        &mut self,
        caller: &AccountId,
        request: &DepositRequest,
    ) -> Result<LpShares, PoolError>;
}
