//! Fungible token amount in 18-decimal fixed point.

use core::fmt;

/// A raw fungible amount in the smallest unit (`1e-18` of a whole token).
///
/// Both the base asset and the fractional representation of the NFT
/// collection are measured in `Amount`.  For the fractional leg, one
/// whole NFT corresponds to exactly [`Amount::ONE_UNIT`].
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// or underflow instead of panicking.
///
/// # Examples
///
/// ```
/// use nft_amm::domain::Amount;
///
/// let three = Amount::from_whole_units(3).expect("fits");
/// assert_eq!(three.get(), 3_000_000_000_000_000_000);
/// assert_eq!(three.whole_units(), 3);
/// assert!(three.is_whole_units());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Number of fractional decimal digits.
    pub const DECIMALS: u8 = 18;

    /// One whole token, and the fractional amount backed by one NFT.
    pub const ONE_UNIT: Self = Self(1_000_000_000_000_000_000);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Amount equal to `units` whole tokens.  Returns `None` on overflow.
    #[must_use]
    pub const fn from_whole_units(units: u128) -> Option<Self> {
        match units.checked_mul(Self::ONE_UNIT.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Number of whole units contained, truncating any remainder.
    #[must_use]
    pub const fn whole_units(&self) -> u128 {
        self.0 / Self::ONE_UNIT.0
    }

    /// Returns `true` if the amount is an exact multiple of [`Self::ONE_UNIT`].
    #[must_use]
    pub const fn is_whole_units(&self) -> bool {
        self.0 % Self::ONE_UNIT.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
