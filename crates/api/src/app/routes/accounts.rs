use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use ledgerd_ledger::BalanceLedger;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/reset", post(reset_account))
        .route("/charge", post(charge_account))
}

pub async fn reset_account(
    Extension(ledger): Extension<Arc<BalanceLedger>>,
    body: Option<Json<dto::ResetRequest>>,
) -> axum::response::Response {
    let req = body.map(|Json(b)| b).unwrap_or_default();
    let account = req.account();

    match ledger.reset(&account).await {
        Ok(()) => {
            tracing::info!(%account, "reset account");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::error!(%account, error = %e, "failed to reset account");
            errors::ledger_error_to_response(e)
        }
    }
}

pub async fn charge_account(
    Extension(ledger): Extension<Arc<BalanceLedger>>,
    body: Option<Json<dto::ChargeRequest>>,
) -> axum::response::Response {
    let req = body.map(|Json(b)| b).unwrap_or_default();
    let account = req.account();
    let charges = req.charges();

    if charges < 0 {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation",
            "charges must not be negative",
        );
    }

    match ledger.charge(&account, charges).await {
        Ok(result) => {
            tracing::info!(%account, authorized = result.is_authorized, "charged account");
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => {
            tracing::error!(%account, error = %e, "failed to charge account");
            errors::ledger_error_to_response(e)
        }
    }
}
