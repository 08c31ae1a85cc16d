//! hola server binary
//!
//! Resolves the port from the environment, binds the listener, prints the
//! startup banner, and serves the fixed greeting until the process is
//! killed.

use hola_core::{Server, ServerConfig};
use tracing::error;

// Use mimalloc for better performance
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout is reserved for the startup banner.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env();

    let server = match Server::bind(&config) {
        Ok(server) => server,
        Err(e) => {
            error!("server failed to start: {}", e);
            std::process::exit(1);
        }
    };

    println!("Cambio test 1");
    println!("Servidor corriendo en puerto {}", config.port());

    if let Err(e) = server.serve().await {
        error!("server stopped: {}", e);
        std::process::exit(1);
    }
}
