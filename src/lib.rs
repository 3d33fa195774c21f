//! CORS Relay Library
//!
//! Forwards `/<segment>/<absolute-url>` requests to the embedded URL and
//! relays the answer back with `Access-Control-Allow-Origin: *`.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::schema::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
