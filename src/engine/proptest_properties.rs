//! Property-based tests for the redemption engine.
//!
//! 1. **Unit-count law**: a redemption succeeds only when the id count
//!    matches the whole-unit fractional entitlement.
//! 2. **Proportionality**: `base_out = ⌊lp × B / S⌋`.
//! 3. **Conservation**: ledger and registries move by exactly the paid
//!    amounts.
//! 4. **Atomicity on failure**: any rejection leaves ledger and
//!    registries bit-identical.

#![allow(clippy::panic)]

use ethnum::U256;
use proptest::prelude::*;

use super::{DepositEngine, RedemptionEngine};
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, DepositRequest, LpShares, RedemptionRequest, TokenId};
use crate::error::PoolError;
use crate::ledger::ReserveLedger;
use crate::registry::InMemoryRegistries;
use crate::traits::{FungibleLedger, LpShareLedger};

const UNIT: u128 = Amount::ONE_UNIT.get();

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn custodian() -> AccountId {
    AccountId::from_bytes([0xC0; 32])
}

fn provider() -> AccountId {
    AccountId::from_bytes([0xA1; 32])
}

fn config() -> PoolConfig {
    let Ok(cfg) = PoolConfig::new(
        custodian(),
        AccountId::from_bytes([0xBA; 32]),
        AccountId::from_bytes([0xC1; 32]),
        None,
    ) else {
        panic!("valid config");
    };
    cfg
}

/// Pool seeded by a single provider depositing `base` and ids `1..=n`.
fn seeded(base: u128, n: u128) -> (ReserveLedger, InMemoryRegistries) {
    let cfg = config();
    let mut ledger = ReserveLedger::new();
    let mut r = InMemoryRegistries::default();
    let Ok(()) = r.base.credit(&provider(), Amount::new(base)) else {
        panic!("credit");
    };
    for id in 1..=n {
        let Ok(()) = r.nfts.mint(TokenId::new(id), &provider()) else {
            panic!("mint");
        };
    }
    let Ok(req) = DepositRequest::new(
        Amount::new(base),
        (1..=n).map(TokenId::new).collect(),
        Vec::new(),
        LpShares::ZERO,
    ) else {
        panic!("deposit request");
    };
    let Ok(_) = DepositEngine::new(&cfg, &mut ledger).deposit(&mut r, &provider(), &req) else {
        panic!("seed deposit");
    };
    (ledger, r)
}

/// `⌊a × b / d⌋` at 256-bit width.
fn floor_mul_div(a: u128, b: u128, d: u128) -> U256 {
    U256::from(a) * U256::from(b) / U256::from(d)
}

fn redemption(lp: u128, ids: Vec<TokenId>) -> RedemptionRequest {
    let Ok(req) = RedemptionRequest::new(LpShares::new(lp), Amount::ZERO, ids, Vec::new()) else {
        panic!("redemption request");
    };
    req
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Base reserve between 1 and 10⁹ whole units, not necessarily round.
fn base_strategy() -> impl Strategy<Value = u128> {
    UNIT..=1_000_000_000 * UNIT
}

/// NFTs in the pool.
fn nft_count_strategy() -> impl Strategy<Value = u128> {
    1u128..=16
}

/// Share of the supply to burn, in thousandths.
fn permille_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000
}

// ---------------------------------------------------------------------------
// Properties 1-3: unit-count law, proportionality, conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_redemption_unit_count_law(
        base in base_strategy(),
        n in nft_count_strategy(),
        permille in permille_strategy(),
        extra in 0u128..=2,
    ) {
        let cfg = config();
        let (mut ledger, mut r) = seeded(base, n);
        let before = (ledger, r.clone());
        let supply = ledger.lp_total_supply().get();
        let lp = (floor_mul_div(supply, permille, 1_000).as_u128()).max(1);

        let Ok(quote) = ledger.quote_redemption(LpShares::new(lp)) else {
            panic!("quote");
        };
        let claimed = quote.nft_count() + extra;
        let ids: Vec<TokenId> = (1..=claimed).map(TokenId::new).collect();
        let count_matches = quote.fractional().get() == claimed * UNIT;

        let res = RedemptionEngine::new(&cfg, &mut ledger)
            .redeem(&mut r, &provider(), &redemption(lp, ids));

        if count_matches {
            let Ok(share) = res else {
                panic!("expected success, got {res:?}");
            };
            // Proportionality.
            prop_assert_eq!(
                U256::from(share.base().get()),
                floor_mul_div(lp, before.0.base_reserve().get(), supply)
            );
            // Conservation.
            prop_assert_eq!(ledger.lp_total_supply().get(), supply - lp);
            prop_assert_eq!(
                ledger.base_reserve().get(),
                before.0.base_reserve().get() - share.base().get()
            );
            prop_assert_eq!(
                ledger.fractional_reserve().get(),
                before.0.fractional_reserve().get() - share.fractional().get()
            );
            prop_assert_eq!(r.lp.total_supply(), ledger.lp_total_supply());
            prop_assert_eq!(r.base.balance_of(&custodian()), ledger.base_reserve());
            prop_assert_eq!(
                r.nfts.tokens_owned_by(&custodian()).len() as u128,
                ledger.nft_count()
            );
        } else {
            let is_fractional_slippage = matches!(res, Err(PoolError::SlippageFractionalOut { .. }));
            prop_assert!(is_fractional_slippage, "got {:?}", res);
            prop_assert_eq!(ledger, before.0);
            prop_assert_eq!(&r, &before.1);
        }
    }

    #[test]
    fn prop_round_trip_k_of_n(
        root in 1u128..=1_000,
        n in nft_count_strategy(),
        k_seed in 1u128..=16,
    ) {
        // B = root² · n units makes the first mint S = root · n units, so
        // both S·k/n and B·k/n are exact.
        let base = root * root * n * UNIT;
        let k = (k_seed - 1) % n + 1;
        let cfg = config();
        let (mut ledger, mut r) = seeded(base, n);
        let supply = ledger.lp_total_supply().get();
        prop_assert_eq!(supply, root * n * UNIT);
        let lp = supply / n * k;

        let ids: Vec<TokenId> = (1..=k).map(TokenId::new).collect();
        let res = RedemptionEngine::new(&cfg, &mut ledger)
            .redeem(&mut r, &provider(), &redemption(lp, ids));
        let Ok(share) = res else {
            panic!("expected success, got {res:?}");
        };
        prop_assert_eq!(share.base().get(), base / n * k);
        prop_assert_eq!(share.fractional().get(), k * UNIT);
    }
}

// ---------------------------------------------------------------------------
// Property 4: atomicity on failure
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rejected_transfer_leaves_state_untouched(
        units in 1u128..=1_000_000,
        n in 2u128..=16,
        frozen_seed in 0u128..=15,
    ) {
        let base = units * n * UNIT;
        let cfg = config();
        let (mut ledger, mut r) = seeded(base, n);
        let frozen = TokenId::new(frozen_seed % n + 1);
        r.nfts.reject_transfers_of(frozen);
        let before = (ledger, r.clone());

        let supply = ledger.lp_total_supply().get();
        let ids: Vec<TokenId> = (1..=n).map(TokenId::new).collect();
        let res = RedemptionEngine::new(&cfg, &mut ledger)
            .redeem(&mut r, &provider(), &redemption(supply, ids));

        let is_transfer = matches!(res, Err(PoolError::Transfer(_)));
        prop_assert!(is_transfer, "got {:?}", res);
        prop_assert_eq!(ledger, before.0);
        prop_assert_eq!(&r, &before.1);
    }

    #[test]
    fn prop_base_floor_rejection_leaves_state_untouched(
        base in base_strategy(),
        n in nft_count_strategy(),
    ) {
        let cfg = config();
        let (mut ledger, mut r) = seeded(base, n);
        let before = (ledger, r.clone());
        let supply = ledger.lp_total_supply().get();
        let Ok(req) = RedemptionRequest::new(
            LpShares::new(supply),
            Amount::new(base + 1),
            (1..=n).map(TokenId::new).collect(),
            Vec::new(),
        ) else {
            panic!("request");
        };
        let res = RedemptionEngine::new(&cfg, &mut ledger).redeem(&mut r, &provider(), &req);
        let is_base_slippage = matches!(res, Err(PoolError::SlippageBaseOut { .. }));
        prop_assert!(is_base_slippage, "got {:?}", res);
        prop_assert_eq!(ledger, before.0);
        prop_assert_eq!(&r, &before.1);
    }
}
