//! The [`Authorizer`] trait and the shared-secret implementation.

use crate::AuthError;

/// Proof that the caller presented a valid administrator credential.
///
/// The private unit field means the only way to obtain one is through an
/// [`Authorizer`]. Privileged core operations take this by value; holding
/// one *is* the authorization.
#[derive(Debug, Clone, Copy)]
pub struct AdminGrant(());

/// Validates an administrator credential.
///
/// Implementations decide what a valid credential looks like — the
/// production server uses [`SharedSecretAuthorizer`], tests can accept or
/// reject everything. `Send + Sync` so one authorizer can be shared across
/// request tasks.
pub trait Authorizer: Send + Sync + 'static {
    /// Checks the presented credential.
    ///
    /// # Errors
    /// [`AuthError::BadCredential`] if the credential is not accepted.
    fn authorize(&self, credential: &str) -> Result<AdminGrant, AuthError>;
}

/// Exact-match comparison against a single shared secret.
///
/// This preserves the deployed behavior: one plaintext secret for all
/// administrators, compared verbatim. Suitable for small ephemeral
/// deployments where the secret travels over a trusted channel.
pub struct SharedSecretAuthorizer {
    secret: String,
}

impl SharedSecretAuthorizer {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Authorizer for SharedSecretAuthorizer {
    fn authorize(&self, credential: &str) -> Result<AdminGrant, AuthError> {
        if credential == self.secret {
            Ok(AdminGrant(()))
        } else {
            Err(AuthError::BadCredential)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_matching_secret_grants() {
        let auth = SharedSecretAuthorizer::new("hunter2");
        assert!(auth.authorize("hunter2").is_ok());
    }

    #[test]
    fn test_authorize_wrong_secret_rejects() {
        let auth = SharedSecretAuthorizer::new("hunter2");
        let err = auth.authorize("hunter3").unwrap_err();
        assert!(matches!(err, AuthError::BadCredential));
    }

    #[test]
    fn test_authorize_is_case_sensitive_exact_match() {
        let auth = SharedSecretAuthorizer::new("Admin");
        assert!(auth.authorize("admin").is_err());
        assert!(auth.authorize("Admin ").is_err());
        assert!(auth.authorize("").is_err());
    }
}
