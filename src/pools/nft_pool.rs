//! NFT/fungible pair pool.
//!
//! [`NftPool`] owns everything one pool needs: its fixed configuration,
//! its [`ReserveLedger`], and the registries it settles against.  Every
//! mutating operation takes `&mut self`, so a registry callback can never
//! re-enter the pool while a settlement is in flight.
//!
//! # Redemption
//!
//! 1. `(base_out, fractional_out) = ⌊lp × (B, F) / S⌋`
//! 2. every id passes the allow-list
//! 3. `fractional_out == len(ids) × 1e18`
//! 4. `base_out ≥ min_base_out`
//! 5. ledger commit, then LP burn and payouts from the custodian
//!
//! # Deposit
//!
//! - empty pool: `lp_out = ⌊√(base_in × fractional_in)⌋`
//! - otherwise: `lp_out = min(base_in × S / B, fractional_in × S / F)`

use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, DepositRequest, LpShares, ProportionalShare, RedemptionRequest,
};
use crate::engine::{DepositEngine, RedemptionEngine};
use crate::error::PoolError;
use crate::ledger::ReserveLedger;
use crate::registry::Registries;
use crate::traits::{FromConfig, FungibleLedger, LpShareLedger, NftLiquidityPool, NftRegistry};

/// A pool pairing one NFT collection with one fungible base asset.
///
/// Created from a [`PoolConfig`] via [`FromConfig`] (default registries)
/// or [`NftPool::with_registries`].  A new pool is empty; the first
/// deposit sets its initial price.
///
/// # Example
///
/// ```rust
/// use nft_amm::config::PoolConfig;
/// use nft_amm::domain::{AccountId, Amount, DepositRequest, LpShares, RedemptionRequest, TokenId};
/// use nft_amm::pools::InMemoryNftPool;
/// use nft_amm::traits::{FromConfig, NftLiquidityPool};
///
/// let custodian = AccountId::from_bytes([0xC0; 32]);
/// let alice = AccountId::from_bytes([0xA1; 32]);
/// let cfg = PoolConfig::new(
///     custodian,
///     AccountId::from_bytes([0xBA; 32]),
///     AccountId::from_bytes([0xC1; 32]),
///     None,
/// )
/// .expect("valid config");
///
/// let mut pool = InMemoryNftPool::from_config(&cfg).expect("pool created");
/// let unit = Amount::ONE_UNIT.get();
/// pool.registries_mut().base.credit(&alice, Amount::new(2 * unit)).expect("credit");
/// for id in [1, 2] {
///     pool.registries_mut().nfts.mint(TokenId::new(id), &alice).expect("mint");
/// }
///
/// let deposit = DepositRequest::new(
///     Amount::new(2 * unit),
///     vec![TokenId::new(1), TokenId::new(2)],
///     vec![],
///     LpShares::ZERO,
/// )
/// .expect("valid deposit");
/// let minted = pool.deposit(&alice, &deposit).expect("deposited");
///
/// let redeem = RedemptionRequest::new(
///     LpShares::new(minted.get() / 2),
///     Amount::ZERO,
///     vec![TokenId::new(2)],
///     vec![],
/// )
/// .expect("valid redemption");
/// let out = pool.redeem(&alice, &redeem).expect("redeemed");
/// assert_eq!(out.base(), Amount::new(unit));
/// assert_eq!(out.nft_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftPool<B, N, L> {
    config: PoolConfig,
    ledger: ReserveLedger,
    registries: Registries<B, N, L>,
}

impl<B, N, L> NftPool<B, N, L>
where
    B: FungibleLedger,
    N: NftRegistry,
    L: LpShareLedger,
{
    /// Creates an empty pool settling against `registries`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if `config` fails
    /// validation, or if `registries` already carries LP supply (an empty
    /// ledger cannot back outstanding shares).
    pub fn with_registries(
        config: PoolConfig,
        registries: Registries<B, N, L>,
    ) -> Result<Self, PoolError> {
        config.validate()?;
        if !registries.lp.total_supply().is_zero() {
            return Err(PoolError::InvalidConfiguration(
                "LP registry must start with zero supply",
            ));
        }
        tracing::debug!(
            custodian = %config.custodian(),
            gated = !config.allow_list().is_open(),
            "pool created"
        );
        Ok(Self {
            config,
            ledger: ReserveLedger::new(),
            registries,
        })
    }

    /// Returns the pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the registries the pool settles against.
    #[must_use]
    pub const fn registries(&self) -> &Registries<B, N, L> {
        &self.registries
    }

    /// Mutable access to the registries, for seeding balances and
    /// ownership.
    ///
    /// Moving pool custody or LP supply through this handle desynchronises
    /// the registries from the ledger.
    pub fn registries_mut(&mut self) -> &mut Registries<B, N, L> {
        &mut self.registries
    }

    /// Consumes the pool, returning its ledger and registries.
    #[must_use]
    pub fn into_parts(self) -> (ReserveLedger, Registries<B, N, L>) {
        (self.ledger, self.registries)
    }
}

impl<B, N, L> FromConfig<PoolConfig> for NftPool<B, N, L>
where
    B: FungibleLedger + Default,
    N: NftRegistry + Default,
    L: LpShareLedger + Default,
{
    /// Creates an empty pool with default-constructed registries.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if the configuration
    /// fails validation.
    fn from_config(config: &PoolConfig) -> Result<Self, PoolError> {
        Self::with_registries(config.clone(), Registries::default())
    }
}

impl<B, N, L> NftLiquidityPool for NftPool<B, N, L>
where
    B: FungibleLedger,
    N: NftRegistry,
    L: LpShareLedger,
{
    fn ledger(&self) -> &ReserveLedger {
        &self.ledger
    }

    fn quote_redemption(&self, lp_amount: LpShares) -> Result<ProportionalShare, PoolError> {
        let share = self.ledger.quote_redemption(lp_amount)?;
        tracing::debug!(lp_amount = %lp_amount, share = %share, "redemption preview");
        Ok(share)
    }

    fn redeem(
        &mut self,
        caller: &AccountId,
        request: &RedemptionRequest,
    ) -> Result<ProportionalShare, PoolError> {
        RedemptionEngine::new(&self.config, &mut self.ledger).redeem(
            &mut self.registries,
            caller,
            request,
        )
    }

    fn quote_deposit(&self, base_amount: Amount, nft_count: u128) -> Result<LpShares, PoolError> {
        let fractional = Amount::from_whole_units(nft_count)
            .ok_or(PoolError::Overflow("NFT count in fractional units"))?;
        let minted = self.ledger.quote_deposit(base_amount, fractional)?;
        tracing::debug!(base_in = %base_amount, nft_count, lp_out = %minted, "deposit preview");
        Ok(minted)
    }

    fn deposit(
        &mut self,
        caller: &AccountId,
        request: &DepositRequest,
    ) -> Result<LpShares, PoolError> {
        DepositEngine::new(&self.config, &mut self.ledger).deposit(
            &mut self.registries,
            caller,
            request,
        )
    }
}

#[cfg(all(test, feature = "in-memory"))]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::TokenId;
    use crate::pools::InMemoryNftPool;
    use crate::registry::InMemoryRegistries;

    const UNIT: u128 = Amount::ONE_UNIT.get();

    fn acct(b: u8) -> AccountId {
        AccountId::from_bytes([b; 32])
    }

    fn cfg() -> PoolConfig {
        let Ok(cfg) = PoolConfig::new(acct(0xC0), acct(0xBA), acct(0xC1), None) else {
            panic!("config");
        };
        cfg
    }

    fn make_pool() -> InMemoryNftPool {
        let Ok(pool) = InMemoryNftPool::from_config(&cfg()) else {
            panic!("pool");
        };
        pool
    }

    /// Alice deposits `4e18` base and ids `1..=4`.
    fn seeded_pool() -> InMemoryNftPool {
        let mut pool = make_pool();
        let alice = acct(0xA1);
        let Ok(()) = pool
            .registries_mut()
            .base
            .credit(&alice, Amount::new(4 * UNIT))
        else {
            panic!("credit");
        };
        for id in 1..=4 {
            let Ok(()) = pool.registries_mut().nfts.mint(TokenId::new(id), &alice) else {
                panic!("mint");
            };
        }
        let Ok(req) = DepositRequest::new(
            Amount::new(4 * UNIT),
            (1..=4).map(TokenId::new).collect(),
            vec![],
            LpShares::ZERO,
        ) else {
            panic!("request");
        };
        let Ok(_) = pool.deposit(&alice, &req) else {
            panic!("deposit");
        };
        pool
    }

    #[test]
    fn from_config_starts_empty() {
        let pool = make_pool();
        assert!(pool.ledger().is_empty());
        assert_eq!(pool.config(), &cfg());
    }

    #[test]
    fn with_registries_rejects_outstanding_supply() {
        let mut r = InMemoryRegistries::default();
        let Ok(()) = r.lp.mint(&acct(1), LpShares::new(1)) else {
            panic!("mint");
        };
        let res = NftPool::with_registries(cfg(), r);
        assert!(matches!(res, Err(PoolError::InvalidConfiguration(_))));
    }

    #[test]
    fn quote_on_empty_pool() {
        let pool = make_pool();
        assert_eq!(
            pool.quote_redemption(LpShares::new(1)),
            Err(PoolError::DivisionByZero)
        );
        assert_eq!(
            pool.quote_deposit(Amount::new(9 * UNIT), 4),
            Ok(LpShares::new(6 * UNIT))
        );
    }

    #[test]
    fn quotes_match_execution() {
        let mut pool = seeded_pool();
        let Ok(quote) = pool.quote_redemption(LpShares::new(UNIT)) else {
            panic!("quote");
        };
        let Ok(req) =
            RedemptionRequest::new(LpShares::new(UNIT), Amount::ZERO, vec![TokenId::new(4)], vec![])
        else {
            panic!("request");
        };
        let Ok(paid) = pool.redeem(&acct(0xA1), &req) else {
            panic!("redeem");
        };
        assert_eq!(quote, paid);
    }

    #[test]
    fn ledger_tracks_registries() {
        let pool = seeded_pool();
        let r = pool.registries();
        assert_eq!(r.lp.total_supply(), pool.ledger().lp_total_supply());
        assert_eq!(
            r.base.balance_of(pool.config().custodian()),
            pool.ledger().base_reserve()
        );
        let (ledger, registries) = pool.into_parts();
        assert_eq!(ledger.nft_count(), 4);
        assert_eq!(registries.nfts.tokens_owned_by(&acct(0xC0)).len(), 4);
    }

    #[test]
    fn redeem_everything_empties_pool() {
        let mut pool = seeded_pool();
        let Ok(req) = RedemptionRequest::new(
            LpShares::new(4 * UNIT),
            Amount::new(4 * UNIT),
            (1..=4).map(TokenId::new).collect(),
            vec![],
        ) else {
            panic!("request");
        };
        let Ok(_) = pool.redeem(&acct(0xA1), &req) else {
            panic!("redeem");
        };
        assert!(pool.ledger().is_empty());
        assert!(pool.registries().base.balance_of(&acct(0xC0)).is_zero());
    }
}
