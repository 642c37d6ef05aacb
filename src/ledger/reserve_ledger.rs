//! Authoritative reserve and supply state of a pool.
//!
//! # State
//!
//! - `base_reserve`: base asset held in custody
//! - `fractional_reserve`: `nfts_in_custody × 1e18`
//! - `lp_total_supply`: outstanding LP shares
//!
//! # Invariants
//!
//! - `fractional_reserve` is always a whole multiple of
//!   [`Amount::ONE_UNIT`].
//! - `lp_total_supply == 0` implies both reserves are zero.
//! - The three fields only change together, through
//!   [`ReserveLedger::commit_deposit`] (increase) and
//!   [`ReserveLedger::commit_redemption`] (decrease).  Each commit
//!   computes all new values before writing any of them, so a failed
//!   commit leaves the ledger untouched.

use core::cmp;
use core::fmt;

use crate::domain::{Amount, LpShares, ProportionalShare};
use crate::error::{PoolError, Result};
use crate::math::{isqrt_product, mul_div, CheckedArithmetic};

/// Reserve ledger of a single pool.
///
/// `Copy` on purpose: engines snapshot the ledger before committing and
/// restore the snapshot if settlement fails.
///
/// # Example
///
/// ```rust
/// use nft_amm::domain::{Amount, LpShares};
/// use nft_amm::ledger::ReserveLedger;
///
/// let e18 = 10u128.pow(18);
/// let ledger = ReserveLedger::from_reserves(
///     Amount::new(100 * e18),
///     Amount::new(4 * e18),
///     LpShares::new(20 * e18),
/// )
/// .expect("consistent state");
///
/// // Burning a quarter of the supply entitles the caller to a quarter of each reserve.
/// let share = ledger.quote_redemption(LpShares::new(5 * e18)).expect("quote");
/// assert_eq!(share.base(), Amount::new(25 * e18));
/// assert_eq!(share.fractional(), Amount::new(e18));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReserveLedger {
    base_reserve: Amount,
    fractional_reserve: Amount,
    lp_total_supply: LpShares,
}

impl ReserveLedger {
    /// An empty ledger: zero reserves, zero supply.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            base_reserve: Amount::ZERO,
            fractional_reserve: Amount::ZERO,
            lp_total_supply: LpShares::ZERO,
        }
    }

    /// Rebuilds a ledger from previously established state.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidConfiguration`] if `fractional_reserve` is
    ///   not a whole number of NFT units.
    /// - [`PoolError::InvalidConfiguration`] if the supply is zero while
    ///   either reserve is not.
    pub fn from_reserves(
        base_reserve: Amount,
        fractional_reserve: Amount,
        lp_total_supply: LpShares,
    ) -> Result<Self> {
        if !fractional_reserve.is_whole_units() {
            return Err(PoolError::InvalidConfiguration(
                "fractional reserve must be a whole number of NFT units",
            ));
        }
        if lp_total_supply.is_zero() && !(base_reserve.is_zero() && fractional_reserve.is_zero())
        {
            return Err(PoolError::InvalidConfiguration(
                "reserves without outstanding LP supply",
            ));
        }
        Ok(Self {
            base_reserve,
            fractional_reserve,
            lp_total_supply,
        })
    }

    /// Base asset held by the pool.
    pub const fn base_reserve(&self) -> Amount {
        self.base_reserve
    }

    /// Fractional units backed by NFTs in custody.
    pub const fn fractional_reserve(&self) -> Amount {
        self.fractional_reserve
    }

    /// Outstanding LP shares.
    #[must_use]
    pub const fn lp_total_supply(&self) -> LpShares {
        self.lp_total_supply
    }

    /// Number of NFTs the fractional reserve represents.
    #[must_use]
    pub const fn nft_count(&self) -> u128 {
        self.fractional_reserve.whole_units()
    }

    /// Returns `true` if no liquidity has been deposited.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lp_total_supply.is_zero()
    }

    /// Proportional entitlement of `lp_amount` shares at current reserves.
    ///
    /// `base = ⌊lp × B / S⌋`, `fractional = ⌊lp × F / S⌋`.  Truncation
    /// always favours the remaining LP holders.
    ///
    /// # Errors
    ///
    /// - [`PoolError::DivisionByZero`] if the LP supply is zero.
    /// - [`PoolError::Overflow`] if `lp_amount` is so far above the supply
    ///   that a leg no longer fits in `u128`.
    pub fn quote_redemption(&self, lp_amount: LpShares) -> Result<ProportionalShare> {
        if self.lp_total_supply.is_zero() {
            return Err(PoolError::DivisionByZero);
        }
        let supply = self.lp_total_supply.get();
        let base = mul_div(lp_amount.get(), self.base_reserve.get(), supply)?;
        let fractional = mul_div(lp_amount.get(), self.fractional_reserve.get(), supply)?;
        Ok(ProportionalShare::new(
            Amount::new(base),
            Amount::new(fractional),
        ))
    }

    /// Burns `lp_amount` shares and debits both reserves by `share`.
    ///
    /// The caller validates `share` against [`Self::quote_redemption`]
    /// beforehand; this method only guards the ledger invariants.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidQuantity`] if `share.fractional()` is not a
    ///   whole number of NFT units.
    /// - [`PoolError::Underflow`] if any field would go negative.
    /// - [`PoolError::InvalidQuantity`] if the burn empties the supply
    ///   while leaving reserves behind.
    pub fn commit_redemption(
        &mut self,
        lp_amount: LpShares,
        share: ProportionalShare,
    ) -> Result<()> {
        if !share.fractional().is_whole_units() {
            return Err(PoolError::InvalidQuantity(
                "fractional payout must be a whole number of NFT units",
            ));
        }
        let supply = self.lp_total_supply.safe_sub(&lp_amount)?;
        let base = self.base_reserve.safe_sub(&share.base())?;
        let fractional = self.fractional_reserve.safe_sub(&share.fractional())?;
        if supply.is_zero() && !(base.is_zero() && fractional.is_zero()) {
            return Err(PoolError::InvalidQuantity(
                "burning the last shares must withdraw all reserves",
            ));
        }

        self.lp_total_supply = supply;
        self.base_reserve = base;
        self.fractional_reserve = fractional;
        Ok(())
    }

    /// LP shares minted for depositing `base_in` and `fractional_in`.
    ///
    /// - Empty pool: `⌊√(base_in × fractional_in)⌋`; both legs required.
    /// - Otherwise: `min(base_in × S / B, fractional_in × S / F)`, rounded
    ///   down.  A leg whose reserve is zero does not constrain the mint.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidQuantity`] if `fractional_in` is not a whole
    ///   number of NFT units, if a first deposit lacks either leg, or if
    ///   the deposit is too small to mint a single share.
    /// - [`PoolError::Overflow`] if arithmetic overflows.
    pub fn quote_deposit(
        &self,
        base_in: Amount,
        fractional_in: Amount,
    ) -> Result<LpShares> {
        if !fractional_in.is_whole_units() {
            return Err(PoolError::InvalidQuantity(
                "fractional deposit must be a whole number of NFT units",
            ));
        }

        let minted = if self.lp_total_supply.is_zero() {
            if base_in.is_zero() || fractional_in.is_zero() {
                return Err(PoolError::InvalidQuantity(
                    "first deposit requires both base asset and NFTs",
                ));
            }
            isqrt_product(base_in.get(), fractional_in.get())?
        } else {
            let supply = self.lp_total_supply.get();
            let leg = |amount: Amount, reserve: Amount| -> Result<Option<u128>> {
                if reserve.is_zero() {
                    return Ok(None);
                }
                mul_div(amount.get(), supply, reserve.get()).map(Some)
            };
            let by_base = leg(base_in, self.base_reserve)?;
            let by_fractional = leg(fractional_in, self.fractional_reserve)?;
            match (by_base, by_fractional) {
                (Some(b), Some(f)) => cmp::min(b, f),
                (Some(only), None) | (None, Some(only)) => only,
                (None, None) => 0,
            }
        };

        if minted == 0 {
            return Err(PoolError::InvalidQuantity(
                "deposit too small to mint LP shares",
            ));
        }
        Ok(LpShares::new(minted))
    }

    /// Credits both reserves and mints `lp_out` shares.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidQuantity`] if `fractional_in` is not a whole
    ///   number of NFT units.
    /// - [`PoolError::Overflow`] if any field would overflow.
    pub fn commit_deposit(
        &mut self,
        base_in: Amount,
        fractional_in: Amount,
        lp_out: LpShares,
    ) -> Result<()> {
        if !fractional_in.is_whole_units() {
            return Err(PoolError::InvalidQuantity(
                "fractional deposit must be a whole number of NFT units",
            ));
        }
        let base = self.base_reserve.safe_add(&base_in)?;
        let fractional = self.fractional_reserve.safe_add(&fractional_in)?;
        let supply = self.lp_total_supply.safe_add(&lp_out)?;

        self.base_reserve = base;
        self.fractional_reserve = fractional;
        self.lp_total_supply = supply;
        Ok(())
    }
}

impl fmt::Display for ReserveLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReserveLedger(base={}, fractional={}, supply={})",
            self.base_reserve, self.fractional_reserve, self.lp_total_supply
        )
    }
}
