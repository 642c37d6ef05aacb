//! Unified error types for the pool engine.
//!
//! Every fallible operation returns [`PoolError`].  Each precondition
//! violation of a redemption or deposit surfaces as its own variant, so
//! callers can tell a slippage rejection from an eligibility rejection
//! from a balance rejection without parsing messages.
//!
//! Registry collaborators report failures with [`TransferError`]; the
//! engines wrap those in [`PoolError::Transfer`] (or map them to a more
//! specific variant where one exists, e.g. an LP burn that fails for lack
//! of balance becomes [`PoolError::InsufficientLpBalance`]).

use thiserror::Error;

use crate::domain::{AccountId, Amount, LpShares, TokenId};

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Failure reported by an asset registry primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The debited account holds less than the requested amount.
    #[error("insufficient balance for {account}: need {required}, have {available}")]
    InsufficientBalance {
        /// Account being debited.
        account: AccountId,
        /// Amount requested.
        required: u128,
        /// Amount actually held.
        available: u128,
    },

    /// The claimed sender does not own the token.
    #[error("token {token_id} is not owned by {claimed}")]
    NotOwner {
        /// Token being moved.
        token_id: TokenId,
        /// Account that tried to send it.
        claimed: AccountId,
        /// Current owner, if the token exists.
        actual: Option<AccountId>,
    },

    /// The token does not exist in the registry.
    #[error("token {0} does not exist")]
    UnknownToken(TokenId),

    /// The registry refused the transfer for its own reasons.
    #[error("transfer rejected: {0}")]
    Rejected(&'static str),
}

/// Error type for every pool operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The pool has no outstanding LP shares to redeem against.
    #[error("division by zero: pool has no outstanding LP supply")]
    DivisionByZero,

    /// A requested token id failed allow-list verification.
    #[error("token {token_id} at position {index} is not eligible for this pool")]
    EligibilityFailure {
        /// Position of the first rejected id in the request.
        index: usize,
        /// The rejected id.
        token_id: TokenId,
    },

    /// The supplied token ids do not match the proportional fractional entitlement.
    #[error("fractional slippage: token ids imply {expected}, LP burn entitles {actual}")]
    SlippageFractionalOut {
        /// `len(token_ids) * ONE_UNIT`.
        expected: Amount,
        /// Fractional amount the LP burn entitles the caller to.
        actual: Amount,
    },

    /// The base-asset entitlement is below the caller's floor.
    #[error("base slippage: entitled to {actual}, minimum is {minimum}")]
    SlippageBaseOut {
        /// Caller-supplied floor.
        minimum: Amount,
        /// Computed entitlement.
        actual: Amount,
    },

    /// A deposit would mint fewer LP shares than the caller's floor.
    #[error("LP slippage: would mint {actual}, minimum is {minimum}")]
    SlippageLpOut {
        /// Caller-supplied floor.
        minimum: LpShares,
        /// Shares the deposit would mint.
        actual: LpShares,
    },

    /// The pool's own custody account tried to deposit or redeem.
    #[error("custodian {0} cannot deposit into or redeem from its own pool")]
    CustodianCaller(AccountId),

    /// The caller holds fewer LP shares than it asked to burn.
    #[error("insufficient LP balance: need {required}, have {available}")]
    InsufficientLpBalance {
        /// Shares to burn.
        required: LpShares,
        /// Shares held.
        available: LpShares,
    },

    /// A registry transfer failed during settlement; all prior legs were undone.
    #[error("transfer failed: {0}")]
    Transfer(#[from] TransferError),

    /// A settlement leg failed and undoing an earlier leg failed as well.
    ///
    /// Registry state is inconsistent and must be repaired out of band.
    #[error("rollback failed: {compensation} (while undoing: {original})")]
    RollbackFailed {
        /// The failure that triggered the rollback.
        original: TransferError,
        /// The failure hit while compensating.
        compensation: TransferError,
    },

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// A quantity is zero, misaligned, or otherwise unusable.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// Pool configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl PoolError {
    /// Short, stable name of the failure kind, used as a log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "division_by_zero",
            Self::EligibilityFailure { .. } => "eligibility_failure",
            Self::SlippageFractionalOut { .. } => "slippage_fractional_out",
            Self::SlippageBaseOut { .. } => "slippage_base_out",
            Self::SlippageLpOut { .. } => "slippage_lp_out",
            Self::CustodianCaller(_) => "custodian_caller",
            Self::InsufficientLpBalance { .. } => "insufficient_lp_balance",
            Self::Transfer(_) => "transfer",
            Self::RollbackFailed { .. } => "rollback_failed",
            Self::Overflow(_) => "overflow",
            Self::Underflow(_) => "underflow",
            Self::InvalidQuantity(_) => "invalid_quantity",
            Self::InvalidConfiguration(_) => "invalid_configuration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slippage_messages_carry_amounts() {
        let err = PoolError::SlippageBaseOut {
            minimum: Amount::new(11),
            actual: Amount::new(10),
        };
        let msg = err.to_string();
        assert!(msg.contains("11"));
        assert!(msg.contains("10"));
        assert_eq!(err.kind(), "slippage_base_out");
    }

    #[test]
    fn transfer_error_converts() {
        let err: PoolError = TransferError::UnknownToken(TokenId::new(7)).into();
        assert!(matches!(
            err,
            PoolError::Transfer(TransferError::UnknownToken(_))
        ));
        assert_eq!(err.kind(), "transfer");
    }

    #[test]
    fn eligibility_message_names_position() {
        let err = PoolError::EligibilityFailure {
            index: 2,
            token_id: TokenId::new(42),
        };
        assert_eq!(
            err.to_string(),
            "token #42 at position 2 is not eligible for this pool"
        );
    }

    #[test]
    fn custodian_caller_kind() {
        let err = PoolError::CustodianCaller(AccountId::zero());
        assert_eq!(err.kind(), "custodian_caller");
        assert!(err.to_string().starts_with("custodian 0x"));
    }

    #[test]
    fn not_owner_message() {
        let err = TransferError::NotOwner {
            token_id: TokenId::new(1),
            claimed: AccountId::zero(),
            actual: None,
        };
        assert!(err.to_string().starts_with("token #1 is not owned by 0x"));
    }
}
