//! Proportional LP redemption.
//!
//! # Algorithm
//!
//! For a request burning `lp` shares for `token_ids`, from any account
//! other than the pool's custodian:
//!
//! 1. Quote `(base_out, fractional_out)` from the ledger.
//! 2. Verify every id against the allow-list (first failure aborts).
//! 3. Require `fractional_out == len(token_ids) × 1e18`.
//! 4. Require `base_out ≥ min_base_out`.
//! 5. Require the caller to hold `lp` shares.
//! 6. Commit the ledger.
//! 7. Settle: burn `lp`, pay `base_out`, transfer each NFT.
//!
//! Steps 1–5 never mutate anything.  If step 7 fails the applied legs
//! are undone and the ledger snapshot from before step 6 is restored.

use crate::config::PoolConfig;
use crate::domain::{AccountId, ProportionalShare, RedemptionRequest};
use crate::error::{PoolError, Result};
use crate::ledger::ReserveLedger;
use crate::registry::Registries;
use crate::traits::{FungibleLedger, LpShareLedger, NftRegistry};

use super::{check_caller, check_eligibility, fractional_for, settle, Leg};

/// Executes redemptions against one pool's ledger.
#[derive(Debug)]
pub struct RedemptionEngine<'a> {
    config: &'a PoolConfig,
    ledger: &'a mut ReserveLedger,
}

impl<'a> RedemptionEngine<'a> {
    /// Creates an engine over `ledger`, governed by `config`.
    pub fn new(config: &'a PoolConfig, ledger: &'a mut ReserveLedger) -> Self {
        Self { config, ledger }
    }

    /// Redeems `request` on behalf of `caller`.
    ///
    /// Returns the `(base, fractional)` amounts paid out.
    ///
    /// # Errors
    ///
    /// - [`PoolError::CustodianCaller`] if `caller` is the pool's custodian.
    /// - [`PoolError::DivisionByZero`] if the pool has no LP supply.
    /// - [`PoolError::EligibilityFailure`] for the first id failing the
    ///   allow-list.
    /// - [`PoolError::SlippageFractionalOut`] if the id count does not
    ///   match the fractional entitlement.
    /// - [`PoolError::SlippageBaseOut`] if the base entitlement is below
    ///   the request's floor.
    /// - [`PoolError::InsufficientLpBalance`] if `caller` holds too few
    ///   shares.
    /// - [`PoolError::Transfer`] or [`PoolError::RollbackFailed`] if a
    ///   settlement leg fails.
    pub fn redeem<B, N, L>(
        &mut self,
        registries: &mut Registries<B, N, L>,
        caller: &AccountId,
        request: &RedemptionRequest,
    ) -> Result<ProportionalShare>
    where
        B: FungibleLedger,
        N: NftRegistry,
        L: LpShareLedger,
    {
        match self.try_redeem(registries, caller, request) {
            Ok(share) => {
                tracing::info!(
                    caller = %caller,
                    lp_burned = %request.lp_amount(),
                    base_out = %share.base(),
                    nfts_out = share.nft_count(),
                    ledger = %self.ledger,
                    "redemption settled"
                );
                Ok(share)
            }
            Err(err) => {
                tracing::warn!(
                    caller = %caller,
                    lp_amount = %request.lp_amount(),
                    kind = err.kind(),
                    error = %err,
                    "redemption rejected"
                );
                Err(err)
            }
        }
    }

    fn try_redeem<B, N, L>(
        &mut self,
        registries: &mut Registries<B, N, L>,
        caller: &AccountId,
        request: &RedemptionRequest,
    ) -> Result<ProportionalShare>
    where
        B: FungibleLedger,
        N: NftRegistry,
        L: LpShareLedger,
    {
        check_caller(self.config, caller)?;
        let lp_amount = request.lp_amount();
        let share = self.ledger.quote_redemption(lp_amount)?;
        tracing::debug!(
            lp_amount = %lp_amount,
            base_out = %share.base(),
            fractional_out = %share.fractional(),
            "redemption quoted"
        );

        let expected = fractional_for(request.token_ids().len())?;
        check_eligibility(self.config.allow_list(), request.token_ids(), |i| {
            request.proof(i)
        })?;
        if share.fractional() != expected {
            return Err(PoolError::SlippageFractionalOut {
                expected,
                actual: share.fractional(),
            });
        }
        if share.base() < request.min_base_out() {
            return Err(PoolError::SlippageBaseOut {
                minimum: request.min_base_out(),
                actual: share.base(),
            });
        }
        let available = registries.lp.balance_of(caller);
        if available < lp_amount {
            return Err(PoolError::InsufficientLpBalance {
                required: lp_amount,
                available,
            });
        }

        let snapshot = *self.ledger;
        self.ledger.commit_redemption(lp_amount, share)?;

        let legs = self.payout_legs(caller, request, share);
        if let Err(err) = settle(registries, &legs) {
            *self.ledger = snapshot;
            return Err(err);
        }
        Ok(share)
    }

    fn payout_legs(
        &self,
        caller: &AccountId,
        request: &RedemptionRequest,
        share: ProportionalShare,
    ) -> Vec<Leg> {
        let custodian = *self.config.custodian();
        let mut legs = Vec::with_capacity(request.token_ids().len() + 2);
        legs.push(Leg::BurnLp {
            holder: *caller,
            amount: request.lp_amount(),
        });
        if !share.base().is_zero() {
            legs.push(Leg::Base {
                from: custodian,
                to: *caller,
                amount: share.base(),
            });
        }
        legs.extend(request.token_ids().iter().map(|token_id| Leg::Nft {
            token_id: *token_id,
            from: custodian,
            to: *caller,
        }));
        legs
    }
}

#[cfg(all(test, feature = "in-memory"))]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Amount, LpShares, TokenId};
    use crate::error::TransferError;
    use crate::merkle::{AllowListTree, MerkleProof};
    use crate::registry::InMemoryRegistries;

    const UNIT: u128 = Amount::ONE_UNIT.get();

    fn acct(b: u8) -> AccountId {
        AccountId::from_bytes([b; 32])
    }

    fn custodian() -> AccountId {
        acct(0xC0)
    }

    fn alice() -> AccountId {
        acct(0xA1)
    }

    fn open_config() -> PoolConfig {
        let Ok(cfg) = PoolConfig::new(custodian(), acct(0xBA), acct(0xC1), None) else {
            panic!("config");
        };
        cfg
    }

    /// Pool holding ids `1..=4` and `4e18` base; Alice owns the whole
    /// `4e18` LP supply.
    fn seeded() -> (ReserveLedger, InMemoryRegistries) {
        let Ok(ledger) = ReserveLedger::from_reserves(
            Amount::new(4 * UNIT),
            Amount::new(4 * UNIT),
            LpShares::new(4 * UNIT),
        ) else {
            panic!("ledger");
        };
        let mut r = InMemoryRegistries::default();
        let Ok(()) = r.base.credit(&custodian(), Amount::new(4 * UNIT)) else {
            panic!("credit");
        };
        for id in 1..=4 {
            let Ok(()) = r.nfts.mint(TokenId::new(id), &custodian()) else {
                panic!("mint");
            };
        }
        let Ok(()) = r.lp.mint(&alice(), LpShares::new(4 * UNIT)) else {
            panic!("lp");
        };
        (ledger, r)
    }

    fn request(lp: u128, min_base: u128, ids: &[u128]) -> RedemptionRequest {
        let Ok(req) = RedemptionRequest::new(
            LpShares::new(lp),
            Amount::new(min_base),
            ids.iter().copied().map(TokenId::new).collect(),
            Vec::new(),
        ) else {
            panic!("request");
        };
        req
    }

    // -- success ------------------------------------------------------

    #[test]
    fn redeem_pays_out_and_updates_ledger() {
        let cfg = open_config();
        let (mut ledger, mut r) = seeded();
        let Ok(share) = RedemptionEngine::new(&cfg, &mut ledger).redeem(
            &mut r,
            &alice(),
            &request(2 * UNIT, 0, &[3, 1]),
        ) else {
            panic!("expected redemption");
        };
        assert_eq!(share.base(), Amount::new(2 * UNIT));
        assert_eq!(share.nft_count(), 2);
        assert_eq!(ledger.lp_total_supply(), LpShares::new(2 * UNIT));
        assert_eq!(ledger.nft_count(), 2);
        assert_eq!(r.base.balance_of(&alice()), Amount::new(2 * UNIT));
        assert_eq!(
            r.nfts.tokens_owned_by(&alice()),
            vec![TokenId::new(1), TokenId::new(3)]
        );
        assert_eq!(r.lp.balance_of(&alice()), LpShares::new(2 * UNIT));
    }

    #[test]
    fn zero_fractional_entitlement_pays_base_only() {
        let cfg = open_config();
        let Ok(mut ledger) = ReserveLedger::from_reserves(
            Amount::new(4 * UNIT),
            Amount::ZERO,
            LpShares::new(4 * UNIT),
        ) else {
            panic!("ledger");
        };
        let mut r = InMemoryRegistries::default();
        let Ok(()) = r.base.credit(&custodian(), Amount::new(4 * UNIT)) else {
            panic!("credit");
        };
        let Ok(()) = r.lp.mint(&alice(), LpShares::new(4 * UNIT)) else {
            panic!("lp");
        };
        let nfts_before = r.nfts.clone();

        let Ok(share) = RedemptionEngine::new(&cfg, &mut ledger).redeem(
            &mut r,
            &alice(),
            &request(UNIT, UNIT, &[]),
        ) else {
            panic!("expected base-only redemption");
        };
        assert_eq!(share.base(), Amount::new(UNIT));
        assert_eq!(share.fractional(), Amount::ZERO);
        assert_eq!(ledger.base_reserve(), Amount::new(3 * UNIT));
        assert_eq!(ledger.fractional_reserve(), Amount::ZERO);
        assert_eq!(ledger.lp_total_supply(), LpShares::new(3 * UNIT));
        // Only the burn and the base payout ran.
        assert_eq!(r.lp.balance_of(&alice()), LpShares::new(3 * UNIT));
        assert_eq!(r.base.balance_of(&alice()), Amount::new(UNIT));
        assert_eq!(r.base.balance_of(&custodian()), Amount::new(3 * UNIT));
        assert_eq!(r.nfts, nfts_before);
    }

    // -- rejections ---------------------------------------------------

    fn assert_rejected(req: &RedemptionRequest, caller: &AccountId) -> PoolError {
        let cfg = open_config();
        let (mut ledger, mut r) = seeded();
        let (ledger_before, r_before) = (ledger, r.clone());
        let Err(err) = RedemptionEngine::new(&cfg, &mut ledger).redeem(&mut r, caller, req) else {
            panic!("expected rejection");
        };
        assert_eq!(ledger, ledger_before);
        assert_eq!(r, r_before);
        err
    }

    #[test]
    fn too_many_ids_is_fractional_slippage() {
        let err = assert_rejected(&request(UNIT, 0, &[1, 2]), &alice());
        assert_eq!(
            err,
            PoolError::SlippageFractionalOut {
                expected: Amount::new(2 * UNIT),
                actual: Amount::new(UNIT),
            }
        );
    }

    #[test]
    fn partial_unit_entitlement_is_fractional_slippage() {
        let err = assert_rejected(&request(UNIT / 2, 0, &[]), &alice());
        assert!(matches!(err, PoolError::SlippageFractionalOut { .. }));
    }

    #[test]
    fn base_floor_is_enforced() {
        let err = assert_rejected(&request(UNIT, UNIT + 1, &[1]), &alice());
        assert_eq!(
            err,
            PoolError::SlippageBaseOut {
                minimum: Amount::new(UNIT + 1),
                actual: Amount::new(UNIT),
            }
        );
    }

    #[test]
    fn caller_without_shares() {
        let err = assert_rejected(&request(UNIT, 0, &[1]), &acct(0xB0));
        assert_eq!(
            err,
            PoolError::InsufficientLpBalance {
                required: LpShares::new(UNIT),
                available: LpShares::ZERO,
            }
        );
    }

    #[test]
    fn custodian_cannot_redeem() {
        let cfg = open_config();
        let (mut ledger, mut r) = seeded();
        let Ok(()) = r.lp.mint(&custodian(), LpShares::new(UNIT)) else {
            panic!("lp");
        };
        let (ledger_before, r_before) = (ledger, r.clone());
        let res = RedemptionEngine::new(&cfg, &mut ledger).redeem(
            &mut r,
            &custodian(),
            &request(UNIT, 0, &[1]),
        );
        assert_eq!(res, Err(PoolError::CustodianCaller(custodian())));
        assert_eq!(ledger, ledger_before);
        assert_eq!(r, r_before);
    }

    #[test]
    fn duplicate_id_fails_in_settlement() {
        let err = assert_rejected(&request(2 * UNIT, 0, &[2, 2]), &alice());
        assert!(matches!(
            err,
            PoolError::Transfer(TransferError::NotOwner { .. })
        ));
    }

    #[test]
    fn id_not_in_custody_fails_in_settlement() {
        let err = assert_rejected(&request(UNIT, 0, &[77]), &alice());
        assert_eq!(
            err,
            PoolError::Transfer(TransferError::UnknownToken(TokenId::new(77)))
        );
    }

    #[test]
    fn empty_pool_is_division_by_zero() {
        let cfg = open_config();
        let mut ledger = ReserveLedger::new();
        let mut r = InMemoryRegistries::default();
        let res =
            RedemptionEngine::new(&cfg, &mut ledger).redeem(&mut r, &alice(), &request(1, 0, &[]));
        assert_eq!(res, Err(PoolError::DivisionByZero));
    }

    // -- gating -------------------------------------------------------

    #[test]
    fn gated_pool_checks_eligibility_before_slippage() {
        let Ok(tree) = AllowListTree::new(&[TokenId::new(1), TokenId::new(2)]) else {
            panic!("tree");
        };
        let Ok(cfg) = PoolConfig::new(custodian(), acct(0xBA), acct(0xC1), Some(tree.root()))
        else {
            panic!("config");
        };
        let (mut ledger, mut r) = seeded();
        // Token 3 is in custody and the count would mismatch too; the
        // allow-list rejection wins.
        let Ok(req) = RedemptionRequest::new(
            LpShares::new(UNIT),
            Amount::ZERO,
            vec![TokenId::new(3), TokenId::new(4)],
            vec![MerkleProof::empty()],
        ) else {
            panic!("request");
        };
        let res = RedemptionEngine::new(&cfg, &mut ledger).redeem(&mut r, &alice(), &req);
        assert_eq!(
            res,
            Err(PoolError::EligibilityFailure {
                index: 0,
                token_id: TokenId::new(3),
            })
        );
    }

    #[test]
    fn gated_pool_accepts_valid_proof() {
        let Ok(tree) = AllowListTree::new(&[TokenId::new(1), TokenId::new(2)]) else {
            panic!("tree");
        };
        let Ok(cfg) = PoolConfig::new(custodian(), acct(0xBA), acct(0xC1), Some(tree.root()))
        else {
            panic!("config");
        };
        let Some(proof) = tree.proof(TokenId::new(2)) else {
            panic!("proof");
        };
        let (mut ledger, mut r) = seeded();
        let Ok(req) = RedemptionRequest::new(
            LpShares::new(UNIT),
            Amount::ZERO,
            vec![TokenId::new(2)],
            vec![proof],
        ) else {
            panic!("request");
        };
        let res = RedemptionEngine::new(&cfg, &mut ledger).redeem(&mut r, &alice(), &req);
        assert!(res.is_ok());
    }
}
