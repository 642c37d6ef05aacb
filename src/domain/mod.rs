//! Domain value types used throughout the pool engine.
//!
//! Amounts, share counts, identities, and the caller-facing request
//! types.  All types are newtypes or validated structs so invariants are
//! enforced at construction.

mod account_id;
mod amount;
mod lp_shares;
mod proportional_share;
mod requests;
mod token_id;

pub use account_id::AccountId;
pub use amount::Amount;
pub use lp_shares::LpShares;
pub use proportional_share::ProportionalShare;
pub use requests::{DepositRequest, RedemptionRequest};
pub use token_id::TokenId;
