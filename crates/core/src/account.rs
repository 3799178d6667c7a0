//! Account identity and store-key namespacing.

use serde::{Deserialize, Serialize};

/// Identifier of an account (opaque string key).
///
/// Accounts have no explicit creation step: an account exists once its
/// balance key has been written by a reset, and has an undefined balance
/// before that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Store key holding this account's balance.
    ///
    /// Balances live under the `<account>/balance` namespace so further
    /// per-account keys can share the account prefix.
    pub fn balance_key(&self) -> String {
        format!("{}/balance", self.0)
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_key_is_namespaced_under_the_account() {
        let account = AccountId::new("alice");
        assert_eq!(account.balance_key(), "alice/balance");
    }
}
