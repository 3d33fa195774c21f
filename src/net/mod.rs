//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig.bind_address
//!     → listener.rs (parse, bind)
//!     → TcpListener handed to the HTTP layer
//! ```

pub mod listener;

pub use listener::{bind, ListenerError};
