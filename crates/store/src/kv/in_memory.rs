//! In-memory key-value store.
//!
//! Intended for tests/dev. Emulates the production store's
//! watch/conditional-commit semantics: every write bumps a per-key version,
//! a watch snapshots versions, and the conditional transaction re-checks the
//! snapshots under the same lock that applies the write.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::r#trait::{KvSession, KvStore, StoreError};

#[derive(Debug, Default)]
struct State {
    values: HashMap<String, String>,
    /// Write counter per key. Counters are never removed, so a watch placed
    /// on an absent key still detects a later create.
    versions: HashMap<String, u64>,
}

impl State {
    fn version(&self, key: &str) -> u64 {
        self.versions.get(key).copied().unwrap_or(0)
    }

    fn bump(&mut self, key: &str) {
        *self.versions.entry(key.to_string()).or_insert(0) += 1;
    }
}

/// Shared in-memory store handle; cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKvStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn session(&self) -> Result<Box<dyn KvSession>, StoreError> {
        Ok(Box::new(InMemoryKvSession {
            state: self.state.clone(),
            watched: Vec::new(),
        }))
    }
}

struct InMemoryKvSession {
    state: Arc<Mutex<State>>,
    watched: Vec<(String, u64)>,
}

#[async_trait]
impl KvSession for InMemoryKvSession {
    async fn watch(&mut self, key: &str) -> Result<(), StoreError> {
        let state = self.state.lock().unwrap();
        self.watched.push((key.to_string(), state.version(key)));
        Ok(())
    }

    async fn get(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state.values.get(key).cloned())
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        state.values.insert(key.to_string(), value.to_string());
        state.bump(key);
        Ok(())
    }

    async fn decr_and_get(&mut self, key: &str, by: i64) -> Result<Option<i64>, StoreError> {
        // Fence check and write happen under one lock: this is the commit point.
        let mut state = self.state.lock().unwrap();

        let intact = self.watched.iter().all(|(k, v)| state.version(k) == *v);
        self.watched.clear();

        if !intact {
            return Ok(None);
        }

        let current = match state.values.get(key) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| StoreError::Command(format!("value at {key:?} is not an integer")))?,
            None => 0,
        };

        let next = current - by;
        state.values.insert(key.to_string(), next.to_string());
        state.bump(key);
        Ok(Some(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn conditional_commit_succeeds_when_watched_key_is_untouched() {
        let store = InMemoryKvStore::new();
        let mut session = store.session().await.unwrap();

        session.set("a/balance", "100").await.unwrap();
        session.watch("a/balance").await.unwrap();
        assert_eq!(
            session.get("a/balance").await.unwrap().as_deref(),
            Some("100")
        );
        assert_eq!(session.decr_and_get("a/balance", 30).await.unwrap(), Some(70));
    }

    #[tokio::test]
    async fn conditional_commit_detects_an_external_write() {
        let store = InMemoryKvStore::new();
        let mut writer = store.session().await.unwrap();
        writer.set("a/balance", "100").await.unwrap();

        let mut charging = store.session().await.unwrap();
        charging.watch("a/balance").await.unwrap();
        assert_eq!(
            charging.get("a/balance").await.unwrap().as_deref(),
            Some("100")
        );

        // Another writer lands between watch and commit.
        writer.set("a/balance", "100").await.unwrap();

        assert_eq!(charging.decr_and_get("a/balance", 30).await.unwrap(), None);
        // The rejected transaction applied nothing.
        assert_eq!(
            writer.get("a/balance").await.unwrap().as_deref(),
            Some("100")
        );
    }

    #[tokio::test]
    async fn watch_on_an_absent_key_detects_a_later_create() {
        let store = InMemoryKvStore::new();
        let mut charging = store.session().await.unwrap();
        charging.watch("new/balance").await.unwrap();

        let mut writer = store.session().await.unwrap();
        writer.set("new/balance", "100").await.unwrap();

        assert_eq!(charging.decr_and_get("new/balance", 10).await.unwrap(), None);
    }

    #[tokio::test]
    async fn decrement_initializes_an_absent_key_to_zero() {
        // Redis DECRBY parity: missing keys start at 0 and may go negative.
        let store = InMemoryKvStore::new();
        let mut session = store.session().await.unwrap();

        assert_eq!(
            session.decr_and_get("ghost/balance", 5).await.unwrap(),
            Some(-5)
        );
    }

    #[tokio::test]
    async fn non_integer_value_is_a_command_error() {
        let store = InMemoryKvStore::new();
        let mut session = store.session().await.unwrap();
        session.set("a/balance", "forty-two").await.unwrap();

        let err = session.decr_and_get("a/balance", 1).await.unwrap_err();
        match err {
            StoreError::Command(msg) => assert!(msg.contains("not an integer")),
            other => panic!("expected command error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn writes_are_visible_across_sessions() {
        let store = InMemoryKvStore::new();
        let mut first = store.session().await.unwrap();
        first.set("a/balance", "100").await.unwrap();

        let mut second = store.session().await.unwrap();
        assert_eq!(
            second.get("a/balance").await.unwrap().as_deref(),
            Some("100")
        );
    }
}
