//! In-memory base-asset balance registry.

use std::collections::HashMap;

use crate::domain::{AccountId, Amount};
use crate::error::TransferError;
use crate::traits::FungibleLedger;

/// Balances of a fungible asset, kept in a map.
///
/// Zero balances are never stored, so two ledgers holding the same
/// balances compare equal regardless of history.
///
/// # Examples
///
/// ```
/// use nft_amm::domain::{AccountId, Amount};
/// use nft_amm::registry::InMemoryFungibleLedger;
/// use nft_amm::traits::FungibleLedger;
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let bob = AccountId::from_bytes([2u8; 32]);
/// let mut ledger = InMemoryFungibleLedger::default();
/// ledger.credit(&alice, Amount::new(100)).expect("credit");
/// ledger.transfer(&alice, &bob, Amount::new(40)).expect("transfer");
/// assert_eq!(ledger.balance_of(&bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InMemoryFungibleLedger {
    balances: HashMap<AccountId, Amount>,
}

impl InMemoryFungibleLedger {
    /// Creates `amount` out of thin air for `account`.
    ///
    /// # Errors
    ///
    /// [`TransferError::Rejected`] if the balance would overflow.
    pub fn credit(&mut self, account: &AccountId, amount: Amount) -> Result<(), TransferError> {
        if amount.is_zero() {
            return Ok(());
        }
        let next = self
            .balance_of(account)
            .checked_add(&amount)
            .ok_or(TransferError::Rejected("balance overflow"))?;
        self.balances.insert(*account, next);
        Ok(())
    }

    /// Sum of all balances.  `None` if it overflows `u128`.
    #[must_use]
    pub fn total(&self) -> Option<Amount> {
        self.balances
            .values()
            .try_fold(Amount::ZERO, |acc, v| acc.checked_add(v))
    }
}

impl FungibleLedger for InMemoryFungibleLedger {
    fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let available = self.balance_of(from);
        let remaining = available
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientBalance {
                account: *from,
                required: amount.get(),
                available: available.get(),
            })?;
        if from == to || amount.is_zero() {
            return Ok(());
        }
        let credited = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(TransferError::Rejected("balance overflow"))?;

        if remaining.is_zero() {
            self.balances.remove(from);
        } else {
            self.balances.insert(*from, remaining);
        }
        self.balances.insert(*to, credited);
        Ok(())
    }
}
