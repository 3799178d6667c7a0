use axum::{middleware::Next, response::Response};
use tracing::Instrument;

use crate::context::RequestId;

/// Attach a fresh [`RequestId`] to the request and wrap the rest of the
/// stack in a tracing span carrying it.
pub async fn request_id_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let request_id = RequestId::new();
    req.extensions_mut().insert(request_id);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    next.run(req).instrument(span).await
}
