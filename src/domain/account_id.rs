//! Chain-agnostic account identity.

use core::fmt;

/// An account on the host ledger: a holder, the pool custodian, or an
/// asset contract.
///
/// Wraps a fixed-size `[u8; 32]`.  Every byte sequence is a valid id; the
/// all-zero id is reserved as a sentinel and rejected where a real
/// account is required.
///
/// # Examples
///
/// ```
/// use nft_amm::domain::AccountId;
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// assert!(!alice.is_zero());
/// assert!(AccountId::zero().is_zero());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero sentinel id.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the all-zero sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({self})")
    }
}
