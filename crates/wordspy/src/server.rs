//! Binding and running the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::{handlers, AppState, ServerConfig, ServerError};

/// A bound, ready-to-run wordspy server.
///
/// Splitting bind from run lets callers (and tests) learn the actual
/// listening address before serving — port 0 binds ephemerally.
#[derive(Debug)]
pub struct WordspyServer {
    listener: TcpListener,
    router: Router,
}

impl WordspyServer {
    /// Validates the configuration, builds the application state, and
    /// binds the listener.
    ///
    /// # Errors
    /// [`ServerError::Config`] for an invalid configuration,
    /// [`ServerError::Io`] if the port cannot be bound.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        config.validate()?;

        let state = Arc::new(AppState::new(&config));
        let router = handlers::router(state);
        let listener =
            TcpListener::bind(("0.0.0.0", config.port)).await?;

        Ok(Self { listener, router })
    }

    /// The address the server is listening on.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until the process is terminated.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!("wordspy server running");
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port_reports_address() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        let server = WordspyServer::bind(config).await.unwrap();
        assert_ne!(server.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_rejects_invalid_vocabulary() {
        let config = ServerConfig {
            port: 0,
            words: vec!["dom".into()],
            ..ServerConfig::default()
        };
        let err = WordspyServer::bind(config).await.unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
