//! Multi-leg settlement with compensating rollback.
//!
//! The registries are individually atomic but know nothing of each
//! other.  A settlement is an ordered list of [`Leg`]s; the first leg
//! that fails stops the run and every leg already applied is undone in
//! reverse order by applying its [`Leg::inverse`].

use crate::domain::{AccountId, Amount, LpShares, TokenId};
use crate::error::{PoolError, TransferError};
use crate::registry::Registries;
use crate::traits::{FungibleLedger, LpShareLedger, NftRegistry};

/// One registry mutation inside a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// Destroy LP shares held by `holder`.
    BurnLp {
        /// Account whose shares are burned.
        holder: AccountId,
        /// Shares burned.
        amount: LpShares,
    },
    /// Issue LP shares to `holder`.
    MintLp {
        /// Account receiving the shares.
        holder: AccountId,
        /// Shares minted.
        amount: LpShares,
    },
    /// Move base asset.
    Base {
        /// Debited account.
        from: AccountId,
        /// Credited account.
        to: AccountId,
        /// Amount moved.
        amount: Amount,
    },
    /// Move one NFT.
    Nft {
        /// Token moved.
        token_id: TokenId,
        /// Current owner.
        from: AccountId,
        /// New owner.
        to: AccountId,
    },
}

impl Leg {
    /// The leg that undoes `self`.
    #[must_use]
    pub const fn inverse(&self) -> Self {
        match *self {
            Self::BurnLp { holder, amount } => Self::MintLp { holder, amount },
            Self::MintLp { holder, amount } => Self::BurnLp { holder, amount },
            Self::Base { from, to, amount } => Self::Base {
                from: to,
                to: from,
                amount,
            },
            Self::Nft { token_id, from, to } => Self::Nft {
                token_id,
                from: to,
                to: from,
            },
        }
    }

    fn apply<B, N, L>(&self, registries: &mut Registries<B, N, L>) -> Result<(), TransferError>
    where
        B: FungibleLedger,
        N: NftRegistry,
        L: LpShareLedger,
    {
        match self {
            Self::BurnLp { holder, amount } => registries.lp.burn(holder, *amount),
            Self::MintLp { holder, amount } => registries.lp.mint(holder, *amount),
            Self::Base { from, to, amount } => registries.base.transfer(from, to, *amount),
            Self::Nft { token_id, from, to } => {
                registries.nfts.transfer_ownership(*token_id, from, to)
            }
        }
    }
}

/// Applies `legs` in order, all or nothing.
///
/// # Errors
///
/// - [`PoolError::InsufficientLpBalance`] if an LP burn fails for lack of
///   shares.
/// - [`PoolError::Transfer`] for any other failing leg, after every
///   earlier leg was undone.
/// - [`PoolError::RollbackFailed`] if undoing an earlier leg failed too;
///   the registries are then left partially settled.
pub fn settle<B, N, L>(registries: &mut Registries<B, N, L>, legs: &[Leg]) -> Result<(), PoolError>
where
    B: FungibleLedger,
    N: NftRegistry,
    L: LpShareLedger,
{
    for (applied, leg) in legs.iter().enumerate() {
        if let Err(original) = leg.apply(registries) {
            tracing::warn!(leg = ?leg, error = %original, undo = applied, "settlement leg failed");
            compensate(registries, legs.iter().take(applied), &original)?;
            return Err(classify(leg, original));
        }
    }
    Ok(())
}

/// Undoes `applied` legs, newest first.
fn compensate<'a, B, N, L>(
    registries: &mut Registries<B, N, L>,
    applied: impl DoubleEndedIterator<Item = &'a Leg>,
    original: &TransferError,
) -> Result<(), PoolError>
where
    B: FungibleLedger,
    N: NftRegistry,
    L: LpShareLedger,
{
    for leg in applied.rev() {
        let inverse = leg.inverse();
        if let Err(compensation) = inverse.apply(registries) {
            tracing::error!(
                leg = ?inverse,
                original = %original,
                compensation = %compensation,
                "compensating leg failed; registries are inconsistent"
            );
            return Err(PoolError::RollbackFailed {
                original: original.clone(),
                compensation,
            });
        }
    }
    Ok(())
}

fn classify(leg: &Leg, err: TransferError) -> PoolError {
    match (leg, err) {
        (
            Leg::BurnLp { .. },
            TransferError::InsufficientBalance {
                required,
                available,
                ..
            },
        ) => PoolError::InsufficientLpBalance {
            required: LpShares::new(required),
            available: LpShares::new(available),
        },
        (_, err) => PoolError::Transfer(err),
    }
}
