//! HTTP listener
//!
//! Binds a TCP listener and serves every request the fixed greeting over
//! HTTP/1.1. Framing, parsing, and keep-alive are hyper's; this module
//! only owns the socket and the accept loop.

use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::response::greeting_response;
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::convert::Infallible;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, warn};

/// A bound listener, ready to serve
#[derive(Debug)]
pub struct Server {
    listener: std::net::TcpListener,
    local_addr: SocketAddr,
}

impl Server {
    /// Bind the listener for the given configuration.
    ///
    /// Every failure here is fatal to startup and nothing is retried: an
    /// unparseable `host:port` (the malformed-`PORT` case), a port held by
    /// another process, or missing privilege all surface as an [`Error`].
    pub fn bind(config: &ServerConfig) -> Result<Self> {
        let addr_str = config.bind_addr();
        let addr: SocketAddr = addr_str.parse().map_err(|source| Error::Addr {
            addr: addr_str.clone(),
            source,
        })?;

        let socket = create_listen_socket(&addr).map_err(|source| Error::Bind {
            addr: addr_str,
            source,
        })?;

        let listener: std::net::TcpListener = socket.into();
        let local_addr = listener.local_addr()?;

        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// The address the listener is bound to.
    ///
    /// When the configured port is `0` this carries the port the kernel
    /// actually assigned.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections forever, one spawned task per connection.
    ///
    /// Per-connection errors are logged and absorbed; neither a malformed
    /// request nor a client disconnect takes the accept loop down.
    pub async fn serve(self) -> Result<()> {
        let listener = TcpListener::from_std(self.listener)?;

        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    warn!("accept failed: {}", e);
                    continue;
                }
            };

            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                if let Err(e) = http1::Builder::new()
                    .serve_connection(io, service_fn(greet))
                    .await
                {
                    // Only log if not a normal connection close
                    if !e.to_string().contains("connection closed") {
                        debug!("connection from {} ended with error: {}", peer, e);
                    }
                }
            });
        }
    }
}

/// Respond to any request with the fixed greeting
async fn greet(
    _req: hyper::Request<Incoming>,
) -> std::result::Result<hyper::Response<Full<Bytes>>, Infallible> {
    Ok(greeting_response())
}

/// Create the TCP listening socket.
///
/// SO_REUSEADDR allows rebinding an address stuck in TIME_WAIT; a port
/// actively held by another process still fails the bind. The socket is
/// left nonblocking for the tokio listener.
fn create_listen_socket(addr: &SocketAddr) -> std::io::Result<Socket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;

    // TCP_NODELAY - disable Nagle's algorithm for lower latency
    socket.set_nodelay(true)?;

    socket.set_nonblocking(true)?;

    // Bind
    socket.bind(&(*addr).into())?;

    // Listen with backlog
    socket.listen(1024)?;

    Ok(socket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::GREETING_BODY;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn loopback_config(port: &str) -> ServerConfig {
        ServerConfig {
            port: port.to_string(),
            hostname: "127.0.0.1".to_string(),
        }
    }

    #[test]
    fn test_bind_ephemeral_port() {
        let server = Server::bind(&loopback_config("0")).unwrap();
        assert_ne!(server.local_addr().port(), 0);
    }

    #[test]
    fn test_bind_occupied_port_fails() {
        let first = Server::bind(&loopback_config("0")).unwrap();
        let port = first.local_addr().port().to_string();

        let second = Server::bind(&loopback_config(&port));
        assert!(matches!(second, Err(Error::Bind { .. })));
    }

    #[test]
    fn test_malformed_port_fails_at_bind() {
        let err = Server::bind(&loopback_config("banana")).unwrap_err();
        assert!(matches!(err, Error::Addr { .. }));
    }

    #[test]
    fn test_out_of_range_port_fails_at_bind() {
        let err = Server::bind(&loopback_config("99999")).unwrap_err();
        assert!(matches!(err, Error::Addr { .. }));
    }

    #[tokio::test]
    async fn test_serves_the_greeting() {
        let server = Server::bind(&loopback_config("0")).unwrap();
        let addr = server.local_addr();
        tokio::spawn(server.serve());

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();

        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();
        let response = String::from_utf8_lossy(&response);

        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.ends_with(GREETING_BODY));
    }
}
