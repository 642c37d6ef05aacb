//! Caller requests for the redemption and deposit paths.
//!
//! Both requests are ephemeral: they are validated at construction and
//! consumed by a single engine call.  Token ids and proofs are aligned by
//! position; for an open pool the proofs are ignored and may be omitted.

use super::{Amount, LpShares, TokenId};
use crate::error::{PoolError, Result};
use crate::merkle::MerkleProof;

static EMPTY_PROOF: MerkleProof = MerkleProof::empty();

/// Returns the proof at `index`, or an empty proof if none was supplied.
fn aligned_proof(proofs: &[MerkleProof], index: usize) -> &MerkleProof {
    proofs.get(index).unwrap_or(&EMPTY_PROOF)
}

/// A request to burn LP shares in exchange for base asset plus specific NFTs.
///
/// # Examples
///
/// ```
/// use nft_amm::domain::{Amount, LpShares, RedemptionRequest, TokenId};
///
/// let req = RedemptionRequest::new(
///     LpShares::new(1_000),
///     Amount::new(500),
///     vec![TokenId::new(7)],
///     vec![],
/// );
/// assert!(req.is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionRequest {
    lp_amount: LpShares,
    min_base_out: Amount,
    token_ids: Vec<TokenId>,
    proofs: Vec<MerkleProof>,
}

impl RedemptionRequest {
    /// Creates a redemption request.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidQuantity`] if `lp_amount` is zero.
    /// - [`PoolError::InvalidQuantity`] if more proofs than token ids are
    ///   supplied (positional alignment would be ambiguous).
    pub fn new(
        lp_amount: LpShares,
        min_base_out: Amount,
        token_ids: Vec<TokenId>,
        proofs: Vec<MerkleProof>,
    ) -> Result<Self> {
        if lp_amount.is_zero() {
            return Err(PoolError::InvalidQuantity(
                "redemption must burn a non-zero LP amount",
            ));
        }
        if proofs.len() > token_ids.len() {
            return Err(PoolError::InvalidQuantity(
                "more proofs than token ids",
            ));
        }
        Ok(Self {
            lp_amount,
            min_base_out,
            token_ids,
            proofs,
        })
    }

    /// LP shares to burn.
    #[must_use]
    pub const fn lp_amount(&self) -> LpShares {
        self.lp_amount
    }

    /// Caller's floor on the base-asset leg.
    pub const fn min_base_out(&self) -> Amount {
        self.min_base_out
    }

    /// NFTs to withdraw, in transfer order.
    #[must_use]
    pub fn token_ids(&self) -> &[TokenId] {
        &self.token_ids
    }

    /// Proof aligned with the token id at `index`.
    #[must_use]
    pub fn proof(&self, index: usize) -> &MerkleProof {
        aligned_proof(&self.proofs, index)
    }
}

/// A request to deposit base asset and NFTs in exchange for LP shares.
///
/// # Examples
///
/// ```
/// use nft_amm::domain::{Amount, DepositRequest, LpShares, TokenId};
///
/// let req = DepositRequest::new(
///     Amount::new(10_000),
///     vec![TokenId::new(1), TokenId::new(2)],
///     vec![],
///     LpShares::ZERO,
/// );
/// assert!(req.is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositRequest {
    base_amount: Amount,
    token_ids: Vec<TokenId>,
    proofs: Vec<MerkleProof>,
    min_lp_out: LpShares,
}

impl DepositRequest {
    /// Creates a deposit request.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidQuantity`] if neither base asset nor NFTs are
    ///   deposited.
    /// - [`PoolError::InvalidQuantity`] if more proofs than token ids are
    ///   supplied.
    pub fn new(
        base_amount: Amount,
        token_ids: Vec<TokenId>,
        proofs: Vec<MerkleProof>,
        min_lp_out: LpShares,
    ) -> Result<Self> {
        if base_amount.is_zero() && token_ids.is_empty() {
            return Err(PoolError::InvalidQuantity(
                "deposit must include base asset or NFTs",
            ));
        }
        if proofs.len() > token_ids.len() {
            return Err(PoolError::InvalidQuantity(
                "more proofs than token ids",
            ));
        }
        Ok(Self {
            base_amount,
            token_ids,
            proofs,
            min_lp_out,
        })
    }

    /// Base asset to deposit.
    pub const fn base_amount(&self) -> Amount {
        self.base_amount
    }

    /// NFTs to deposit.
    #[must_use]
    pub fn token_ids(&self) -> &[TokenId] {
        &self.token_ids
    }

    /// Proof aligned with the token id at `index`.
    #[must_use]
    pub fn proof(&self, index: usize) -> &MerkleProof {
        aligned_proof(&self.proofs, index)
    }

    /// Caller's floor on minted LP shares.
    #[must_use]
    pub const fn min_lp_out(&self) -> LpShares {
        self.min_lp_out
    }
}
