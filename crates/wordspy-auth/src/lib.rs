//! Administrator-secret authorization for wordspy.
//!
//! Creating a lobby and starting a game are privileged operations gated by
//! a single shared administrator secret. This crate keeps that secret out
//! of the domain core:
//!
//! 1. The HTTP boundary hands the presented credential to an
//!    [`Authorizer`].
//! 2. On success the authorizer returns an [`AdminGrant`] — a zero-sized
//!    proof token that cannot be constructed anywhere else.
//! 3. The core's privileged operations take an `AdminGrant` parameter, so
//!    they are uncallable without a boundary-validated credential and
//!    never observe the raw secret.

mod auth;
mod error;

pub use auth::{AdminGrant, Authorizer, SharedSecretAuthorizer};
pub use error::AuthError;
