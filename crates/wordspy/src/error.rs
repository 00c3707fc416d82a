//! Error types for the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use wordspy_auth::AuthError;
use wordspy_lobby::{ErrorKind, LobbyError};
use wordspy_protocol::ErrorBody;

use crate::ConfigError;

/// A failed API request.
///
/// Wraps the sub-crate errors so handlers can use `?` on both, and maps
/// each error kind onto the status code the front end expects. Every
/// failure body is the `{ok:false, error}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad administrator credential.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A domain rejection from the lobby core.
    #[error(transparent)]
    Lobby(#[from] LobbyError),

    /// The request body could not be parsed.
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Lobby(err) => match err.kind() {
                ErrorKind::Validation | ErrorKind::Conflict => {
                    StatusCode::BAD_REQUEST
                }
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// A failure during server startup.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid process configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Binding or serving the listener failed.
    #[error("server i/o error: {0}")]
    Io(#[from] std::io::Error),
}
