//! Redis-backed key-value store.
//!
//! A session is a dedicated async connection: `WATCH` marks keys per
//! connection, so sharing a multiplexed connection between concurrent
//! charges would break the fence. The conditional transaction is a
//! `MULTI`/`EXEC` pipeline; a nil `EXEC` reply is Redis's
//! aborted-transaction signal and surfaces as `Ok(None)`.

use async_trait::async_trait;

use super::r#trait::{KvSession, KvStore, StoreError};

/// Redis store handle.
///
/// Holds the parsed client/URL only; connections are opened per session.
#[derive(Debug, Clone)]
pub struct RedisKvStore {
    client: redis::Client,
}

impl RedisKvStore {
    /// Parse `url` (e.g. `redis://localhost:6379`) without connecting yet.
    pub fn connect(url: impl AsRef<str>) -> Result<Self, StoreError> {
        let client = redis::Client::open(url.as_ref())
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl KvStore for RedisKvStore {
    async fn session(&self) -> Result<Box<dyn KvSession>, StoreError> {
        let conn = self
            .client
            .get_async_connection()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Box::new(RedisKvSession { conn }))
    }
}

/// One connection, one logical ledger operation. Dropping the session
/// closes the connection and with it any pending watch.
struct RedisKvSession {
    conn: redis::aio::Connection,
}

#[async_trait]
impl KvSession for RedisKvSession {
    async fn watch(&mut self, key: &str) -> Result<(), StoreError> {
        redis::cmd("WATCH")
            .arg(key)
            .query_async::<_, ()>(&mut self.conn)
            .await
            .map_err(map_redis_error)
    }

    async fn get(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        redis::cmd("GET")
            .arg(key)
            .query_async(&mut self.conn)
            .await
            .map_err(map_redis_error)
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .query_async::<_, ()>(&mut self.conn)
            .await
            .map_err(map_redis_error)
    }

    async fn decr_and_get(&mut self, key: &str, by: i64) -> Result<Option<i64>, StoreError> {
        let mut pipe = redis::pipe();
        pipe.atomic().decr(key, by).ignore().get(key);

        let reply: Option<(i64,)> = pipe
            .query_async(&mut self.conn)
            .await
            .map_err(map_redis_error)?;
        Ok(reply.map(|(remaining,)| remaining))
    }
}

fn map_redis_error(e: redis::RedisError) -> StoreError {
    if e.is_io_error() || e.is_connection_refusal() || e.is_connection_dropped() {
        StoreError::Connection(e.to_string())
    } else {
        StoreError::Command(e.to_string())
    }
}
