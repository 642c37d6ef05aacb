//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint of a pool: who holds its
//! assets, which registries it pairs, and which token ids it accepts.

mod pool_config;

pub use pool_config::PoolConfig;
