//! Server configuration
//!
//! The only configuration input is the `PORT` environment variable, read
//! once at process start. Everything else is fixed.

use std::env;

/// Environment variable holding the listen port
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: &str = "3000";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port, kept as the raw string taken from the environment.
    ///
    /// A non-numeric value is not rejected here; it fails inside
    /// [`Server::bind`](crate::Server::bind) when the address is parsed,
    /// which is the fatal-startup behavior callers rely on.
    pub port: String,
    /// Hostname to bind to
    pub hostname: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            hostname: "0.0.0.0".to_string(),
        }
    }
}

impl ServerConfig {
    /// Resolve configuration from the process environment.
    ///
    /// `PORT` present and non-empty is used verbatim; otherwise the
    /// default `3000` applies.
    pub fn from_env() -> Self {
        Self::with_raw_port(env::var(PORT_ENV).ok())
    }

    fn with_raw_port(raw: Option<String>) -> Self {
        let port = raw
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_PORT.to_string());
        Self {
            port,
            ..Self::default()
        }
    }

    /// The configured port string
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Address string handed to the listener, e.g. `0.0.0.0:3000`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }
}
