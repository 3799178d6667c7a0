//! Charge/reset business logic and the optimistic-concurrency retry loop.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use ledgerd_core::{AccountId, ChargeResult};
use ledgerd_store::{KvStore, StoreError};

/// Balance every account is reset to.
pub const DEFAULT_BALANCE: i64 = 100;

/// Tuning knobs for the ledger.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Balance written by [`BalanceLedger::reset`].
    pub default_balance: i64,
    /// Fixed pause between conflict retries, spreading out competing
    /// writers on the same key.
    pub retry_backoff: Duration,
    /// Upper bound on charge attempts. `None` retries until the conflict
    /// clears, favoring correctness over bounded latency.
    pub max_attempts: Option<u32>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_balance: DEFAULT_BALANCE,
            retry_backoff: Duration::from_millis(10),
            max_attempts: None,
        }
    }
}

/// Ledger-level failure.
///
/// Insufficient funds is not represented here: it is a regular
/// [`ChargeResult`] outcome, distinguishable by shape, never an `Err`.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The account has no stored balance (it was never reset).
    #[error("account {account} has no balance")]
    MissingBalance { account: AccountId },

    /// The stored balance is not an integer.
    #[error("account {account} has a malformed balance {raw:?}")]
    MalformedBalance { account: AccountId, raw: String },

    /// The conflict persisted through the configured attempt cap.
    #[error("charge on account {account} still conflicted after {attempts} attempts")]
    RetriesExhausted { account: AccountId, attempts: u32 },

    /// Store-communication failure; never retried.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

/// The balance ledger: charge/reset semantics over an injected store.
///
/// Holds no per-account state between calls. Every operation opens a fresh
/// store session, and the store remains the single owner of durable
/// balances.
#[derive(Clone)]
pub struct BalanceLedger {
    store: Arc<dyn KvStore>,
    config: LedgerConfig,
}

impl BalanceLedger {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::with_config(store, LedgerConfig::default())
    }

    pub fn with_config(store: Arc<dyn KvStore>, config: LedgerConfig) -> Self {
        Self { store, config }
    }

    /// Unconditionally set `account`'s balance to the default.
    ///
    /// Last-writer-wins: a reset committing after a concurrent charge's
    /// write overwrites it, and a charge still inside its fence observes
    /// the conflict and retries.
    #[instrument(skip(self), fields(account = %account))]
    pub async fn reset(&self, account: &AccountId) -> Result<(), LedgerError> {
        let mut session = self.store.session().await?;
        session
            .set(
                &account.balance_key(),
                &self.config.default_balance.to_string(),
            )
            .await?;
        Ok(())
    }

    /// Deduct `amount` from `account` if sufficient balance exists.
    ///
    /// Watch, read, check, then conditionally decrement, restarting from
    /// scratch whenever the watched key changes under us. The loop is
    /// iterative: recursing here would grow the stack under heavy
    /// contention. Each attempt runs on a fresh session, released on every
    /// exit path by drop.
    #[instrument(skip(self), fields(account = %account, amount))]
    pub async fn charge(
        &self,
        account: &AccountId,
        amount: i64,
    ) -> Result<ChargeResult, LedgerError> {
        let key = account.balance_key();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            let mut session = self.store.session().await?;
            session.watch(&key).await?;

            let balance = match session.get(&key).await? {
                None => {
                    return Err(LedgerError::MissingBalance {
                        account: account.clone(),
                    });
                }
                Some(raw) => {
                    raw.parse::<i64>()
                        .map_err(|_| LedgerError::MalformedBalance {
                            account: account.clone(),
                            raw,
                        })?
                }
            };

            if balance < amount {
                // No conditional write on this path; the balance stays as is.
                debug!(balance, "charge declined, insufficient balance");
                return Ok(ChargeResult::declined(balance));
            }

            match session.decr_and_get(&key, amount).await? {
                Some(remaining) => {
                    debug!(remaining, attempts, "charge authorized");
                    return Ok(ChargeResult::authorized(remaining, amount));
                }
                None => {
                    // Another writer touched the key inside our fence.
                    debug!(attempts, "conflict on balance key, retrying");
                }
            }

            drop(session);

            if let Some(max) = self.config.max_attempts {
                if attempts >= max {
                    warn!(attempts, "giving up charge under sustained contention");
                    return Err(LedgerError::RetriesExhausted {
                        account: account.clone(),
                        attempts,
                    });
                }
            }

            tokio::time::sleep(self.config.retry_backoff).await;
        }
    }
}
