//! The two-legged entitlement of an LP share burn.

use core::fmt;

use super::Amount;

/// Base-asset and fractional-asset amounts attributable to a number of
/// LP shares at the current reserves.
///
/// Returned by reserve quotes and by a completed redemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProportionalShare {
    base: Amount,
    fractional: Amount,
}

impl ProportionalShare {
    /// Creates a share from its two legs.
    #[must_use]
    pub const fn new(base: Amount, fractional: Amount) -> Self {
        Self { base, fractional }
    }

    /// Base-asset leg.
    pub const fn base(&self) -> Amount {
        self.base
    }

    /// Fractional-asset leg, in units of `1e18` per NFT.
    pub const fn fractional(&self) -> Amount {
        self.fractional
    }

    /// Number of whole NFTs the fractional leg settles into.
    #[must_use]
    pub const fn nft_count(&self) -> u128 {
        self.fractional.whole_units()
    }
}

impl fmt::Display for ProportionalShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(base={}, fractional={})", self.base, self.fractional)
    }
}
