//! Error types for the authorization layer.

/// Errors that can occur while checking an administrator credential.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The presented credential does not match the administrator secret.
    /// Surfaced by the boundary as 401.
    #[error("wrong administrator password")]
    BadCredential,
}
