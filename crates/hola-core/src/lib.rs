//! hola-core: fixed-response HTTP server core
//!
//! The whole contract: bind a TCP listener on the configured port and
//! answer every HTTP request with the same plaintext greeting. Connection
//! handling sits on tokio/hyper; there is no routing, no state, and no
//! per-request branching.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod response;
pub mod server;

// Re-exports
pub use config::{ServerConfig, DEFAULT_PORT, PORT_ENV};
pub use error::{Error, Result};
pub use response::{greeting_response, GREETING_BODY, GREETING_CONTENT_TYPE};
pub use server::Server;
