//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Outbound client behavior.
    pub client: ClientConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Outbound client configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Redirect hops followed before giving up. 0 disables following.
    pub max_redirects: usize,

    /// Connection establishment timeout in seconds. Unset means no limit.
    pub connect_timeout_secs: Option<u64>,

    /// Total request timeout in seconds. Unset means no limit.
    pub request_timeout_secs: Option<u64>,

    /// Honor HTTP_PROXY / HTTPS_PROXY for outbound calls.
    pub use_system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_redirects: 10,
            connect_timeout_secs: None,
            request_timeout_secs: None,
            use_system_proxy: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "cors_relay=info,tower_http=info".to_string(),
        }
    }
}
