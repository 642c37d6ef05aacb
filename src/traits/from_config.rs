//! Generic construction trait for pool instantiation from configuration.
//!
//! Implementations **must** validate the configuration during
//! construction; a successfully constructed pool starts in a valid
//! state (empty ledger, fixed allow-list policy).

use crate::error::PoolError;

/// Builds a value from a configuration struct, validating it first.
///
/// # Errors
///
/// Returns [`PoolError::InvalidConfiguration`] if the configuration is
/// invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// [`PoolError::InvalidConfiguration`] if any parameter is out of
    /// range or inconsistent.
    fn from_config(config: &C) -> Result<Self, PoolError>
    where
        Self: Sized;
}
