//! Redemption and deposit engines.
//!
//! Each engine borrows the pool's configuration and exclusively borrows
//! its [`ReserveLedger`](crate::ledger::ReserveLedger) for the duration
//! of one call.  Every check runs before the ledger is touched; the
//! ledger is committed before any registry is; and a failing settlement
//! restores the ledger snapshot after [`settle`] has undone the applied
//! legs.

mod deposit;
mod redemption;
mod settlement;

#[cfg(all(test, feature = "in-memory"))]
mod proptest_properties;

pub use deposit::DepositEngine;
pub use redemption::RedemptionEngine;
pub use settlement::{settle, Leg};

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, TokenId};
use crate::error::{PoolError, Result};
use crate::merkle::{verify, AllowList, MerkleProof};

/// Rejects the custody account as a counterparty of its own pool.
///
/// Every leg would move assets from the custodian to itself, so the ledger
/// would change while custody stays put.
fn check_caller(config: &PoolConfig, caller: &AccountId) -> Result<()> {
    if caller == config.custodian() {
        return Err(PoolError::CustodianCaller(*caller));
    }
    Ok(())
}

/// Fractional amount represented by `count` whole NFTs.
fn fractional_for(count: usize) -> Result<Amount> {
    u128::try_from(count)
        .ok()
        .and_then(Amount::from_whole_units)
        .ok_or(PoolError::Overflow("token id count"))
}

/// Verifies every id against the allow-list, failing on the first miss.
fn check_eligibility<'r>(
    allow_list: &AllowList,
    token_ids: &[TokenId],
    proof_at: impl Fn(usize) -> &'r MerkleProof,
) -> Result<()> {
    if allow_list.is_open() {
        return Ok(());
    }
    for (index, token_id) in token_ids.iter().enumerate() {
        if !verify(allow_list, *token_id, proof_at(index)) {
            return Err(PoolError::EligibilityFailure {
                index,
                token_id: *token_id,
            });
        }
    }
    Ok(())
}
