//! # NFT AMM
//!
//! Liquidity engine for pools pairing an NFT collection with a fungible
//! base asset.  Liquidity providers hold LP shares; burning shares pays
//! out a proportional slice of both reserves, with the NFT side settled
//! as specific, whole tokens.
//!
//! This crate provides domain types, the reserve ledger, the redemption
//! and deposit engines, Merkle allow-list verification, and in-memory
//! asset registries for simulation and testing.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `in-memory` | yes | Map-backed registries and the [`InMemoryNftPool`](pools::InMemoryNftPool) alias |
//!
//! # Quick Start
//!
//! ```rust
//! use nft_amm::config::PoolConfig;
//! use nft_amm::domain::{AccountId, Amount, DepositRequest, LpShares, RedemptionRequest, TokenId};
//! use nft_amm::error::PoolError;
//! use nft_amm::pools::InMemoryNftPool;
//! use nft_amm::traits::{FromConfig, NftLiquidityPool};
//!
//! let custodian = AccountId::from_bytes([0xC0; 32]);
//! let lp = AccountId::from_bytes([0xA1; 32]);
//! let unit = Amount::ONE_UNIT.get();
//!
//! // 1. Configure an open pool
//! let cfg = PoolConfig::new(
//!     custodian,
//!     AccountId::from_bytes([0xBA; 32]),
//!     AccountId::from_bytes([0xC1; 32]),
//!     None,
//! )
//! .expect("valid config");
//! let mut pool = InMemoryNftPool::from_config(&cfg).expect("pool created");
//!
//! // 2. Seed the provider and deposit 4 NFTs plus 4 units of base asset
//! pool.registries_mut().base.credit(&lp, Amount::new(4 * unit)).expect("credit");
//! for id in 1..=4 {
//!     pool.registries_mut().nfts.mint(TokenId::new(id), &lp).expect("mint");
//! }
//! let deposit = DepositRequest::new(
//!     Amount::new(4 * unit),
//!     (1..=4).map(TokenId::new).collect(),
//!     vec![],
//!     LpShares::ZERO,
//! )
//! .expect("valid deposit");
//! let minted = pool.deposit(&lp, &deposit).expect("deposited");
//!
//! // 3. Burn a quarter of the shares for exactly one NFT
//! let quarter = LpShares::new(minted.get() / 4);
//! let ok = RedemptionRequest::new(quarter, Amount::ZERO, vec![TokenId::new(3)], vec![])
//!     .expect("valid request");
//! let out = pool.redeem(&lp, &ok).expect("redeemed");
//! assert_eq!(out.base(), Amount::new(unit));
//!
//! // 4. Asking for two NFTs against the same burn is rejected
//! let greedy = RedemptionRequest::new(
//!     quarter,
//!     Amount::ZERO,
//!     vec![TokenId::new(1), TokenId::new(2)],
//!     vec![],
//! )
//! .expect("valid request");
//! assert!(matches!(
//!     pool.redeem(&lp, &greedy),
//!     Err(PoolError::SlippageFractionalOut { .. })
//! ));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer   │  PoolConfig + FromConfig
//! └──────┬───────┘
//!        │ redeem / deposit
//!        ▼
//! ┌──────────────┐
//! │   NftPool    │  owns config, ledger, registries
//! └──────┬───────┘
//!        │ &mut ReserveLedger
//!        ▼
//! ┌──────────────┐
//! │   Engines    │  check → commit → settle (journal + rollback)
//! └──────┬───────┘
//!        │ FungibleLedger / NftRegistry / LpShareLedger
//!        ▼
//! ┌──────────────┐
//! │  Registries  │  custody of base asset, NFTs, LP shares
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`LpShares`](domain::LpShares), [`TokenId`](domain::TokenId), requests |
//! | [`ledger`] | [`ReserveLedger`](ledger::ReserveLedger): reserves and LP supply |
//! | [`merkle`] | Allow-list roots, proofs, and [`verify`](merkle::verify) |
//! | [`engine`] | [`RedemptionEngine`](engine::RedemptionEngine), [`DepositEngine`](engine::DepositEngine), settlement journal |
//! | [`traits`] | [`NftLiquidityPool`](traits::NftLiquidityPool), registry traits, [`FromConfig`](traits::FromConfig) |
//! | [`registry`] | [`Registries`](registry::Registries) bundle and in-memory registries |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) |
//! | [`pools`] | [`NftPool`](pools::NftPool) |
//! | [`math`] | Checked arithmetic, 256-bit `mul_div` and square root |
//! | [`error`] | [`PoolError`](error::PoolError) and [`TransferError`](error::TransferError) |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod math;
pub mod merkle;
pub mod pools;
pub mod prelude;
pub mod registry;
pub mod traits;
