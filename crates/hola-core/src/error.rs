//! Error types for hola-core

use thiserror::Error;

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the hola HTTP server
#[derive(Debug, Error)]
pub enum Error {
    /// The configured listen address did not parse as `host:port`.
    ///
    /// This is where a malformed `PORT` value surfaces; the resolver
    /// passes the raw string through without validating it.
    #[error("Invalid listen address {addr:?}: {source}")]
    Addr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Socket setup, bind, or listen failed (port in use, privilege, ...)
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let source = "0.0.0.0:banana".parse::<std::net::SocketAddr>().unwrap_err();
        let error = Error::Addr {
            addr: "0.0.0.0:banana".to_string(),
            source,
        };
        assert!(error
            .to_string()
            .starts_with("Invalid listen address \"0.0.0.0:banana\":"));

        let error = Error::Bind {
            addr: "0.0.0.0:3000".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to bind 0.0.0.0:3000: address in use"
        );

        let error = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(error.to_string(), "IO error: boom");
    }
}
