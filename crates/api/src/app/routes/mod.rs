use axum::Router;

pub mod accounts;
pub mod system;

/// Router for the ledger operations.
pub fn router() -> Router {
    Router::new().merge(accounts::router())
}
