//! HTTP API application wiring (Axum router + service wiring).
//!
//! Folder layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs, the gateway defaulting rules, JSON mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use ledgerd_ledger::BalanceLedger;
use ledgerd_store::KvStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(store: Arc<dyn KvStore>) -> Router {
    build_app_with_ledger(BalanceLedger::new(store))
}

/// Router over a pre-configured ledger, for callers that tune the retry
/// knobs.
pub fn build_app_with_ledger(ledger: BalanceLedger) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_id_middleware))
                .layer(Extension(Arc::new(ledger))),
        )
}
