//! Identifier of a single NFT within its collection.

use core::fmt;

/// Identifier of one non-fungible asset in the pool's collection.
///
/// The canonical byte encoding is the 32-byte big-endian form of the id,
/// which is what allow-list leaves are hashed from.
///
/// # Examples
///
/// ```
/// use nft_amm::domain::TokenId;
///
/// let id = TokenId::new(258);
/// assert_eq!(id.to_be_bytes32()[30..], [1, 2]);
/// assert_eq!(id.to_string(), "#258");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(u128);

impl TokenId {
    /// Creates a token id.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// 32-byte big-endian encoding, zero-padded on the left.
    #[must_use]
    pub fn to_be_bytes32(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[16..].copy_from_slice(&self.0.to_be_bytes());
        out
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
