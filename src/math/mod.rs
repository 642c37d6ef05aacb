//! Arithmetic utilities for reserve calculations.
//!
//! [`CheckedArithmetic`] gives `Result`-returning operations on the
//! domain newtypes; [`mul_div`] and [`isqrt_product`] compute ratios and
//! geometric means through 256-bit intermediates.
//!
//! # Convention
//!
//! Every division floors, so redemption payouts and minted LP shares
//! round against the caller and the dust stays with the pool.

mod checked;
mod mul_div;

pub use checked::CheckedArithmetic;
pub use mul_div::{isqrt_product, mul_div};
