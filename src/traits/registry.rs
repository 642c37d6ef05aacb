//! Interfaces of the asset registries the engines settle against.
//!
//! The engine does not implement custody.  It calls into three
//! registries that it assumes are correct and individually atomic:
//!
//! | Registry | Asset | Operations |
//! |----------|-------|------------|
//! | [`FungibleLedger`] | base asset | `balance_of`, `transfer` |
//! | [`NftRegistry`] | collection | `owner_of`, `transfer_ownership` |
//! | [`LpShareLedger`] | LP shares | `balance_of`, `total_supply`, `mint`, `burn` |
//!
//! Every mutating call either succeeds completely or returns a
//! [`TransferError`] and changes nothing.  Multi-leg atomicity is the
//! engine's job.

use crate::domain::{AccountId, Amount, LpShares, TokenId};
use crate::error::TransferError;

/// Balance registry of the fungible base asset.
pub trait FungibleLedger {
    /// Balance held by `account`.
    #[must_use]
    fn balance_of(&self, account: &AccountId) -> Amount;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`TransferError::InsufficientBalance`] if `from` holds less than
    /// `amount`, or any registry-specific rejection.
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;
}

/// Ownership registry of the NFT collection.
pub trait NftRegistry {
    /// Current owner of `token_id`, or `None` if it does not exist.
    #[must_use]
    fn owner_of(&self, token_id: TokenId) -> Option<AccountId>;

    /// Moves `token_id` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`TransferError::UnknownToken`] if the token does not exist.
    /// - [`TransferError::NotOwner`] if `from` is not the current owner;
    ///   this is how a duplicated id fails on its second transfer.
    fn transfer_ownership(
        &mut self,
        token_id: TokenId,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), TransferError>;
}

/// Holder registry of the pool's LP share token.
pub trait LpShareLedger {
    /// Shares held by `holder`.
    #[must_use]
    fn balance_of(&self, holder: &AccountId) -> LpShares;

    /// Total shares issued by the registry.
    #[must_use]
    fn total_supply(&self) -> LpShares;

    /// Issues `amount` new shares to `holder`.
    ///
    /// # Errors
    ///
    /// Registry-specific rejection, e.g. supply overflow.
    fn mint(&mut self, holder: &AccountId, amount: LpShares) -> Result<(), TransferError>;

    /// Destroys `amount` shares held by `holder`.
    ///
    /// # Errors
    ///
    /// [`TransferError::InsufficientBalance`] if `holder` has fewer shares.
    fn burn(&mut self, holder: &AccountId, amount: LpShares) -> Result<(), TransferError>;
}
