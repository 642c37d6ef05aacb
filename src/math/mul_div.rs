//! Full-width `a × b ÷ d` and integer square root.
//!
//! Reserve products such as `lp_amount × base_reserve` routinely exceed
//! `u128` once both sides carry 18 decimals, so intermediates are held in
//! 256 bits and only the final quotient is narrowed back.
//!
//! # Examples
//!
//! ```
//! use nft_amm::math::mul_div;
//!
//! let e18 = 10u128.pow(18);
//! // (1e20 × 5e20) / 1e21 = 5e19, though the product is 5e40.
//! assert_eq!(mul_div(100 * e18, 500 * e18, 1_000 * e18), Ok(50 * e18));
//! ```

use ethnum::U256;

use crate::error::PoolError;

/// Narrows a 256-bit value back to `u128`.
fn narrow(value: U256, context: &'static str) -> Result<u128, PoolError> {
    let (hi, lo) = value.into_words();
    if hi != 0 {
        return Err(PoolError::Overflow(context));
    }
    Ok(lo)
}

/// Computes `⌊a × b ÷ d⌋` with a 256-bit intermediate.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if `d` is zero.
/// - [`PoolError::Overflow`] if the quotient does not fit in `u128`.
pub fn mul_div(a: u128, b: u128, d: u128) -> Result<u128, PoolError> {
    if d == 0 {
        return Err(PoolError::DivisionByZero);
    }
    // u128 × u128 always fits in 256 bits.
    let quotient = U256::new(a) * U256::new(b) / U256::new(d);
    narrow(quotient, "mul_div quotient exceeds u128")
}

/// Floor square root of `a × b`, computed without overflow.
///
/// Uses Newton's method on the 256-bit product.
///
/// # Errors
///
/// Returns [`PoolError::Overflow`] only if the root does not fit in
/// `u128`, which cannot happen for a product of two `u128` values.
pub fn isqrt_product(a: u128, b: u128) -> Result<u128, PoolError> {
    let n = U256::new(a) * U256::new(b);
    if n == U256::ZERO {
        return Ok(0);
    }
    let two = U256::new(2);
    let mut x = n;
    let mut y = (x >> 1u32) + (x & U256::ONE);
    while y < x {
        x = y;
        y = (x + n / x) / two;
    }
    narrow(x, "square root exceeds u128")
}
