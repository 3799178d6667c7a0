//! Key-value store boundary.
//!
//! This module defines the store contract the ledger depends on (plain
//! get/set plus the watch-then-conditional-transaction primitive) without
//! making any storage assumptions.

pub mod in_memory;
pub mod r#trait;

#[cfg(feature = "redis")]
pub mod redis;

pub use in_memory::InMemoryKvStore;
pub use r#trait::{KvSession, KvStore, StoreError};

#[cfg(feature = "redis")]
pub use redis::RedisKvStore;
