//! Outcome of a charge request.

use serde::{Deserialize, Serialize};

/// Result of a single charge request (transient, never persisted).
///
/// Insufficient funds is not an error: it is the `is_authorized == false`
/// shape of this record, with the stored balance left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeResult {
    pub is_authorized: bool,
    /// Balance after the decrement for an authorized charge; the balance as
    /// read at decision time for a declined one.
    pub remaining_balance: i64,
    /// Amount actually deducted: the requested amount when authorized, 0
    /// when declined.
    pub charges: i64,
}

impl ChargeResult {
    pub fn authorized(remaining_balance: i64, charges: i64) -> Self {
        Self {
            is_authorized: true,
            remaining_balance,
            charges,
        }
    }

    pub fn declined(balance: i64) -> Self {
        Self {
            is_authorized: false,
            remaining_balance: balance,
            charges: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(ChargeResult::authorized(90, 10)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isAuthorized": true,
                "remainingBalance": 90,
                "charges": 10,
            })
        );
    }

    #[test]
    fn declined_reports_zero_charges() {
        let res = ChargeResult::declined(40);
        assert!(!res.is_authorized);
        assert_eq!(res.remaining_balance, 40);
        assert_eq!(res.charges, 0);
    }
}
