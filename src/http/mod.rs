//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, landing vs. relay dispatch)
//!     → request.rs (path → RelayTarget, 400/500 on bad input)
//!     → client.rs (forward to target, follow redirects)
//!     → response.rs (CORS + Vary rewrite, stream body back)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - Every request is independent; the only shared values are the
//!   immutable client handle and config
//! - Bodies stream in both directions, never buffered
//! - Every failure is turned into a plain-text response at the handler

pub mod client;
pub mod error;
pub mod landing;
pub mod request;
pub mod response;
pub mod server;

pub use client::UpstreamClient;
pub use error::RelayError;
pub use request::{extract_target, RelayTarget};
pub use server::HttpServer;
