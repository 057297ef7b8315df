use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::tracing::RequestId;

/// Header name for the request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Ensures every request and response carries an `x-request-id`.
///
/// An inbound id is reused; otherwise a fresh UUID is minted. The id is
/// stored in request extensions and scoped into the task-local so handlers
/// and log lines see the same value.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(RequestId::new)
        .unwrap_or_default();

    // Request IDs are UUIDs or validated inbound ASCII, so the header
    // conversions below cannot fail in practice.
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        request
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value.clone());
        request.extensions_mut().insert(request_id.clone());

        let mut response =
            crate::tracing::scope_request_id(request_id, async move { next.run(request).await })
                .await;
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        response
    } else {
        // Unusable inbound id: drop it and continue without correlation.
        next.run(request).await
    }
}
