//! Store traits and error model.

use async_trait::async_trait;
use thiserror::Error;

/// Store-communication failure.
///
/// Conflicts are not errors: an invalidated watch fence is reported through
/// [`KvSession::decr_and_get`] returning `Ok(None)` so callers can retry.
/// These variants are hard failures that must propagate.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to open or keep the connection behind a session.
    #[error("store connection error: {0}")]
    Connection(String),

    /// A command was rejected or returned an unusable reply.
    #[error("store command error: {0}")]
    Command(String),
}

/// Handle to a key-value store that opens per-operation sessions.
///
/// One session maps to one store connection and one logical ledger
/// operation. A session releases its connection on drop, on every exit
/// path.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn session(&self) -> Result<Box<dyn KvSession>, StoreError>;
}

/// A connection-scoped store session.
///
/// The watch fence is session-scoped: [`watch`](KvSession::watch) marks keys
/// on this session's connection, and a later
/// [`decr_and_get`](KvSession::decr_and_get) commits only if no writer
/// touched a watched key in between.
#[async_trait]
pub trait KvSession: Send {
    /// Begin the conflict-detection fence on `key`.
    async fn watch(&mut self, key: &str) -> Result<(), StoreError>;

    /// Plain read. `None` when the key is absent.
    async fn get(&mut self, key: &str) -> Result<Option<String>, StoreError>;

    /// Unconditional write (last-writer-wins).
    async fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Conditional transaction: atomically decrement `key` by `by` and read
    /// back the post-decrement value, committing only if every watched key
    /// is unchanged since the fence began.
    ///
    /// `Ok(None)` means the fence was invalidated and nothing was applied;
    /// the watch is consumed either way. Decrementing an absent key
    /// initializes it to 0 first, matching Redis `DECRBY`.
    async fn decr_and_get(&mut self, key: &str, by: i64) -> Result<Option<i64>, StoreError>;
}
