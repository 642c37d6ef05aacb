//! In-memory NFT ownership registry.

use std::collections::{HashMap, HashSet};

use crate::domain::{AccountId, TokenId};
use crate::error::TransferError;
use crate::traits::NftRegistry;

/// Ownership map of one NFT collection.
///
/// Tokens can be frozen with [`reject_transfers_of`](Self::reject_transfers_of)
/// to simulate a registry that refuses a transfer midway through a
/// settlement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InMemoryNftRegistry {
    owners: HashMap<TokenId, AccountId>,
    frozen: HashSet<TokenId>,
}

impl InMemoryNftRegistry {
    /// Creates `token_id` owned by `owner`.
    ///
    /// # Errors
    ///
    /// [`TransferError::Rejected`] if the token already exists.
    pub fn mint(&mut self, token_id: TokenId, owner: &AccountId) -> Result<(), TransferError> {
        if self.owners.contains_key(&token_id) {
            return Err(TransferError::Rejected("token already minted"));
        }
        self.owners.insert(token_id, *owner);
        Ok(())
    }

    /// Makes every future transfer of `token_id` fail.
    pub fn reject_transfers_of(&mut self, token_id: TokenId) {
        self.frozen.insert(token_id);
    }

    /// Lifts a freeze set by [`reject_transfers_of`](Self::reject_transfers_of).
    pub fn allow_transfers_of(&mut self, token_id: TokenId) {
        self.frozen.remove(&token_id);
    }

    /// Ids owned by `owner`, ascending.
    #[must_use]
    pub fn tokens_owned_by(&self, owner: &AccountId) -> Vec<TokenId> {
        let mut ids: Vec<TokenId> = self
            .owners
            .iter()
            .filter(|(_, o)| *o == owner)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }
}

impl NftRegistry for InMemoryNftRegistry {
    fn owner_of(&self, token_id: TokenId) -> Option<AccountId> {
        self.owners.get(&token_id).copied()
    }

    fn transfer_ownership(
        &mut self,
        token_id: TokenId,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), TransferError> {
        let owner = self
            .owners
            .get_mut(&token_id)
            .ok_or(TransferError::UnknownToken(token_id))?;
        if owner != from {
            return Err(TransferError::NotOwner {
                token_id,
                claimed: *from,
                actual: Some(*owner),
            });
        }
        if self.frozen.contains(&token_id) {
            return Err(TransferError::Rejected("token is frozen"));
        }
        *owner = *to;
        Ok(())
    }
}
