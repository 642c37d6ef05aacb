//! Liquidity deposits.
//!
//! A deposit brings base asset and whole NFTs into custody and mints LP
//! shares in proportion to the smaller of the two contributions (the
//! geometric mean on the first deposit).  It runs the same
//! check-commit-settle sequence as a redemption, with the legs reversed.

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, DepositRequest, LpShares};
use crate::error::{PoolError, Result};
use crate::ledger::ReserveLedger;
use crate::registry::Registries;
use crate::traits::{FungibleLedger, LpShareLedger, NftRegistry};

use super::{check_caller, check_eligibility, fractional_for, settle, Leg};

/// Executes deposits against one pool's ledger.
#[derive(Debug)]
pub struct DepositEngine<'a> {
    config: &'a PoolConfig,
    ledger: &'a mut ReserveLedger,
}

impl<'a> DepositEngine<'a> {
    /// Creates an engine over `ledger`, governed by `config`.
    pub fn new(config: &'a PoolConfig, ledger: &'a mut ReserveLedger) -> Self {
        Self { config, ledger }
    }

    /// Deposits `request` on behalf of `caller` and returns the shares minted.
    ///
    /// # Errors
    ///
    /// - [`PoolError::CustodianCaller`] if `caller` is the pool's custodian.
    /// - [`PoolError::EligibilityFailure`] for the first id failing the
    ///   allow-list.
    /// - [`PoolError::InvalidQuantity`] if the deposit mints no shares or
    ///   a first deposit lacks either leg.
    /// - [`PoolError::SlippageLpOut`] if fewer than `min_lp_out` shares
    ///   would be minted.
    /// - [`PoolError::Transfer`] or [`PoolError::RollbackFailed`] if a
    ///   settlement leg fails, e.g. the caller does not own an id.
    pub fn deposit<B, N, L>(
        &mut self,
        registries: &mut Registries<B, N, L>,
        caller: &AccountId,
        request: &DepositRequest,
    ) -> Result<LpShares>
    where
        B: FungibleLedger,
        N: NftRegistry,
        L: LpShareLedger,
    {
        match self.try_deposit(registries, caller, request) {
            Ok(minted) => {
                tracing::info!(
                    caller = %caller,
                    base_in = %request.base_amount(),
                    nfts_in = request.token_ids().len(),
                    lp_minted = %minted,
                    ledger = %self.ledger,
                    "deposit settled"
                );
                Ok(minted)
            }
            Err(err) => {
                tracing::warn!(
                    caller = %caller,
                    kind = err.kind(),
                    error = %err,
                    "deposit rejected"
                );
                Err(err)
            }
        }
    }

    fn try_deposit<B, N, L>(
        &mut self,
        registries: &mut Registries<B, N, L>,
        caller: &AccountId,
        request: &DepositRequest,
    ) -> Result<LpShares>
    where
        B: FungibleLedger,
        N: NftRegistry,
        L: LpShareLedger,
    {
        check_caller(self.config, caller)?;
        let base_in = request.base_amount();
        let fractional_in = fractional_for(request.token_ids().len())?;
        check_eligibility(self.config.allow_list(), request.token_ids(), |i| {
            request.proof(i)
        })?;

        let minted = self.ledger.quote_deposit(base_in, fractional_in)?;
        tracing::debug!(
            base_in = %base_in,
            fractional_in = %fractional_in,
            lp_out = %minted,
            "deposit quoted"
        );
        if minted < request.min_lp_out() {
            return Err(PoolError::SlippageLpOut {
                minimum: request.min_lp_out(),
                actual: minted,
            });
        }

        let snapshot = *self.ledger;
        self.ledger.commit_deposit(base_in, fractional_in, minted)?;

        let legs = self.intake_legs(caller, request, base_in, minted);
        if let Err(err) = settle(registries, &legs) {
            *self.ledger = snapshot;
            return Err(err);
        }
        Ok(minted)
    }

    fn intake_legs(
        &self,
        caller: &AccountId,
        request: &DepositRequest,
        base_in: Amount,
        minted: LpShares,
    ) -> Vec<Leg> {
        let custodian = *self.config.custodian();
        let mut legs = Vec::with_capacity(request.token_ids().len() + 2);
        if !base_in.is_zero() {
            legs.push(Leg::Base {
                from: *caller,
                to: custodian,
                amount: base_in,
            });
        }
        legs.extend(request.token_ids().iter().map(|token_id| Leg::Nft {
            token_id: *token_id,
            from: *caller,
            to: custodian,
        }));
        legs.push(Leg::MintLp {
            holder: *caller,
            amount: minted,
        });
        legs
    }
}
