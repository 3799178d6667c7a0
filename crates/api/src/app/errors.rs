use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use ledgerd_ledger::LedgerError;

/// Map a ledger failure onto the wire.
///
/// Everything reaching this mapping is a server-side hard failure:
/// conflicts are retried inside the ledger and insufficient funds is a
/// normal 200-level outcome, so neither shows up here.
pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    let code = match &err {
        LedgerError::MissingBalance { .. } => "missing_balance",
        LedgerError::MalformedBalance { .. } => "malformed_balance",
        LedgerError::RetriesExhausted { .. } => "contention",
        LedgerError::Store(_) => "store_error",
    };
    json_error(StatusCode::INTERNAL_SERVER_ERROR, code, err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
