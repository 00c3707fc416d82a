//! # wordspy
//!
//! HTTP server for a social-deduction word game: players gather in
//! code-addressed lobbies, and when the game starts one of them is
//! secretly dealt the impostor role while everyone else shares a secret
//! word.
//!
//! The interesting parts live in [`wordspy_lobby`]; this crate is the
//! thin boundary around them:
//!
//! - [`ServerConfig`] — process configuration from the environment
//! - [`router`] — the axum router for the six `/api` endpoints plus the
//!   static front-end fallback
//! - [`WordspyServer`] — bind + run
//! - [`ApiError`] — error-kind → HTTP status mapping with the
//!   `{ok:false, error}` envelope

mod config;
mod error;
mod handlers;
mod server;
mod static_files;

pub use config::{ConfigError, ServerConfig, DEFAULT_WORDS};
pub use error::{ApiError, ServerError};
pub use handlers::{router, AppState};
pub use server::WordspyServer;
