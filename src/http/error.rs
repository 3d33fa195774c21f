//! Relay error taxonomy and its mapping onto HTTP responses.

use std::error::Error as _;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body used when a failure carries no readable message.
pub const FALLBACK_MESSAGE: &str = "Request processing failed";

/// Errors surfaced to the caller of a relay request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Target string is empty or does not start with `http`.
    #[error("Invalid URL. Must start with http or https.")]
    InvalidTargetSyntax,

    /// Target string is not a well-formed absolute URL.
    #[error(transparent)]
    TargetParse(#[from] url::ParseError),

    /// Target parsed, but with a scheme other than http/https.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// Network, DNS, TLS or timeout failure while talking to the target.
    #[error(transparent)]
    Dispatch(#[from] reqwest::Error),
}

impl RelayError {
    /// Status code returned to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidTargetSyntax => StatusCode::BAD_REQUEST,
            RelayError::TargetParse(_)
            | RelayError::UnsupportedScheme(_)
            | RelayError::Dispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message including the cause chain.
    ///
    /// reqwest keeps the interesting part ("connection refused", "dns error")
    /// in its sources, so they are folded into the message.
    pub fn message(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !text.is_empty() && !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }

        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), self.message()).into_response()
    }
}
