//! Storage layer: the shared key-value store boundary.
//!
//! The ledger core talks to storage exclusively through the [`kv`] traits.
//! Implementations cover production (Redis, behind the `redis` feature) and
//! tests/dev (in-memory).

pub mod kv;

pub use kv::{InMemoryKvStore, KvSession, KvStore, StoreError};

#[cfg(feature = "redis")]
pub use kv::RedisKvStore;
