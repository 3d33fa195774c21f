//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, address parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: RelayConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RelayConfig;

/// Upper bound on redirect hops.
pub const MAX_REDIRECT_LIMIT: usize = 50;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("client.max_redirects {0} exceeds {limit}", limit = MAX_REDIRECT_LIMIT)]
    TooManyRedirects(usize),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.client.max_redirects > MAX_REDIRECT_LIMIT {
        errors.push(ValidationError::TooManyRedirects(config.client.max_redirects));
    }

    if config.client.connect_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("client.connect_timeout_secs"));
    }
    if config.client.request_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("client.request_timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
