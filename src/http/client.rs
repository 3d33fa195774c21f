//! Outbound HTTP client.
//!
//! # Responsibilities
//! - Build one reqwest client from `ClientConfig` at startup
//! - Forward method, headers and streaming body to the target
//! - Follow redirects so callers only see the final hop
//!
//! # Design Decisions
//! - Headers are copied as-is, `Host` included
//! - No retries; a failure is reported once
//! - Dropping the returned future aborts the in-flight call

use std::time::Duration;

use axum::{
    body::{Body, HttpBody},
    http::{HeaderMap, Method},
};
use reqwest::redirect::Policy;

use crate::config::ClientConfig;
use crate::http::error::RelayError;
use crate::http::request::RelayTarget;

/// Handle to the outbound client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    inner: reqwest::Client,
}

impl UpstreamClient {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let redirect = if config.max_redirects == 0 {
            Policy::none()
        } else {
            Policy::limited(config.max_redirects)
        };

        let mut builder = reqwest::Client::builder().redirect(redirect);
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            inner: builder.build()?,
        })
    }

    /// Forward a request to `target` and return the upstream response.
    ///
    /// Only response headers are awaited; the body is left for the caller to stream.
    pub async fn forward(
        &self,
        method: Method,
        target: RelayTarget,
        headers: HeaderMap,
        body: Body,
    ) -> Result<reqwest::Response, RelayError> {
        let mut request = self
            .inner
            .request(method, target.into_url())
            .headers(headers);

        // An empty body stays empty so GET/HEAD are not sent chunked.
        if !body.is_end_stream() {
            request = request.body(reqwest::Body::wrap_stream(body.into_data_stream()));
        }

        Ok(request.send().await?)
    }
}
