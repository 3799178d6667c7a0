//! Request DTOs and the gateway defaulting rules.

use serde::{Deserialize, Deserializer};

use ledgerd_core::AccountId;

/// Account used when a request names none.
pub const DEFAULT_ACCOUNT: &str = "account";

/// Amount charged when a request carries no usable `charges` value.
pub const DEFAULT_CHARGES: i64 = 10;

#[derive(Debug, Default, Deserialize)]
pub struct ResetRequest {
    pub account: Option<String>,
}

impl ResetRequest {
    pub fn account(&self) -> AccountId {
        account_or_default(self.account.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct ChargeRequest {
    pub account: Option<String>,
    /// Defaulting happens at this boundary: missing, `null`, and
    /// non-integer values all charge [`DEFAULT_CHARGES`]. The ledger itself
    /// never defaults.
    #[serde(default = "default_charges", deserialize_with = "lenient_charges")]
    pub charges: i64,
}

impl Default for ChargeRequest {
    fn default() -> Self {
        Self {
            account: None,
            charges: DEFAULT_CHARGES,
        }
    }
}

impl ChargeRequest {
    pub fn account(&self) -> AccountId {
        account_or_default(self.account.as_deref())
    }

    pub fn charges(&self) -> i64 {
        self.charges
    }
}

fn account_or_default(account: Option<&str>) -> AccountId {
    match account {
        Some(a) => AccountId::new(a),
        None => AccountId::new(DEFAULT_ACCOUNT),
    }
}

fn default_charges() -> i64 {
    DEFAULT_CHARGES
}

fn lenient_charges<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64().unwrap_or(DEFAULT_CHARGES))
}
