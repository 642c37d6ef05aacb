//! Reserve ledger: the single mutable record of a pool.
//!
//! The ledger is an explicitly owned value.  Engines receive it by
//! `&mut` for the duration of one operation, which serialises every
//! state transition on a pool.

mod reserve_ledger;

pub use reserve_ledger::ReserveLedger;
