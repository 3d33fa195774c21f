//! Response handling and transformation.
//!
//! # Responsibilities
//! - Relay upstream status, headers and body to the caller
//! - Force `Access-Control-Allow-Origin: *`
//! - Append `Origin` to `Vary` without dropping existing values
//!
//! # Design Decisions
//! - Body is streamed, never collected
//! - Upstream headers otherwise pass through unchanged

use axum::{
    body::Body,
    http::{
        header::{ACCESS_CONTROL_ALLOW_ORIGIN, VARY},
        HeaderMap, HeaderValue,
    },
    response::Response,
};
use futures_util::TryStreamExt;

/// Add the permissive CORS headers to a relayed response.
pub fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.append(VARY, HeaderValue::from_static("Origin"));
}

/// Turn an upstream response into the response for the original caller.
pub fn relay_response(mut upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let mut headers = std::mem::take(upstream.headers_mut());
    apply_cors(&mut headers);

    let url = upstream.url().clone();
    let stream = upstream.bytes_stream().inspect_err(move |e| {
        tracing::warn!(target_url = %url, error = %e, "Upstream body aborted mid-stream");
    });

    let mut response = Response::new(Body::from_stream(stream));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
