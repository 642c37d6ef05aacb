//! Checked arithmetic trait for the domain wrapper types.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning inherent methods of
//! [`Amount`] and [`LpShares`] into `Result`s with a specific
//! [`PoolError`] variant, so engine code can use `?` throughout.
//!
//! # Examples
//!
//! ```
//! use nft_amm::domain::Amount;
//! use nft_amm::math::CheckedArithmetic;
//!
//! let a = Amount::new(100);
//! assert!(a.safe_sub(&Amount::new(101)).is_err());
//! ```

use crate::domain::{Amount, LpShares};
use crate::error::PoolError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the result exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_add(other)
            .ok_or(PoolError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_sub(other)
            .ok_or(PoolError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for LpShares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_add(other)
            .ok_or(PoolError::Overflow("LP share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_sub(other)
            .ok_or(PoolError::Underflow("LP share subtraction underflow"))
    }
}
