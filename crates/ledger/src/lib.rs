//! `ledgerd-ledger` — the balance ledger core.
//!
//! Owns charge/reset semantics and the optimistic-concurrency retry loop.
//! Depends only on the store traits in `ledgerd-store`; all mutual exclusion
//! is delegated to the store's watch/conditional-commit primitive.

pub mod balance;

pub use balance::{BalanceLedger, DEFAULT_BALANCE, LedgerConfig, LedgerError};
