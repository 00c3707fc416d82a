//! Lobby lifecycle management for wordspy.
//!
//! This crate is the domain core: everything with non-trivial invariants
//! or concurrency exposure lives here, behind plain async functions over
//! well-typed inputs. The HTTP boundary above it only translates.
//!
//! # Key types
//!
//! - [`LobbyManager`] — the state machine: create/join/start/query
//! - [`LobbyRegistry`] — concurrency-safe code → lobby store; the only
//!   sanctioned mutation path
//! - [`Lobby`] — one game session and its transition rules
//! - [`CodeGenerator`] / [`RoleAssigner`] — unique codes and random roles
//! - [`RandomSource`] — injectable uniform randomness (CSPRNG in
//!   production, scripted in tests)
//!
//! Each lobby moves through exactly two states: open (accepting joins)
//! and started (roles fixed, terminal). Lobbies are never deleted; the
//! registry lives for the process lifetime.

mod codes;
mod error;
mod lobby;
mod manager;
mod registry;
mod rng;
mod roles;

pub use codes::{CodeGenerator, CODE_LENGTH};
pub use error::{ErrorKind, LobbyError};
pub use lobby::{Lobby, Player, RoleView, MAX_NAME_LEN, MIN_PLAYERS};
pub use manager::{CreateLobby, LobbyManager};
pub use registry::LobbyRegistry;
pub use rng::{RandomSource, SystemRandom};
pub use roles::{Assignment, RoleAssigner};
