//! In-memory LP share registry.

use std::collections::HashMap;

use crate::domain::{AccountId, LpShares};
use crate::error::TransferError;
use crate::traits::LpShareLedger;

/// Holder balances and total supply of the pool's LP token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InMemoryLpLedger {
    holders: HashMap<AccountId, LpShares>,
    total_supply: LpShares,
}

impl LpShareLedger for InMemoryLpLedger {
    fn balance_of(&self, holder: &AccountId) -> LpShares {
        self.holders.get(holder).copied().unwrap_or(LpShares::ZERO)
    }

    fn total_supply(&self) -> LpShares {
        self.total_supply
    }

    fn mint(&mut self, holder: &AccountId, amount: LpShares) -> Result<(), TransferError> {
        if amount.is_zero() {
            return Ok(());
        }
        let supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or(TransferError::Rejected("LP supply overflow"))?;
        let balance = self
            .balance_of(holder)
            .checked_add(&amount)
            .ok_or(TransferError::Rejected("LP balance overflow"))?;
        self.total_supply = supply;
        self.holders.insert(*holder, balance);
        Ok(())
    }

    fn burn(&mut self, holder: &AccountId, amount: LpShares) -> Result<(), TransferError> {
        let available = self.balance_of(holder);
        let remaining =
            available
                .checked_sub(&amount)
                .ok_or(TransferError::InsufficientBalance {
                    account: *holder,
                    required: amount.get(),
                    available: available.get(),
                })?;
        let supply = self
            .total_supply
            .checked_sub(&amount)
            .ok_or(TransferError::Rejected("LP supply underflow"))?;
        self.total_supply = supply;
        if remaining.is_zero() {
            self.holders.remove(holder);
        } else {
            self.holders.insert(*holder, remaining);
        }
        Ok(())
    }
}
