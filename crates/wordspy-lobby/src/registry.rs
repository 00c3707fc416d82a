//! The concurrency-safe lobby store.
//!
//! Two locking levels:
//!
//! - an outer `RwLock` over the code → lobby map, held only long enough
//!   to look up (or insert) an entry;
//! - an inner `RwLock` per lobby, serializing writers while letting
//!   readers share.
//!
//! `read` and `mutate` clone the per-lobby handle and release the map
//! lock *before* awaiting the lobby lock, so operations on different
//! codes never contend and a slow mutation on one lobby cannot stall the
//! whole registry. `insert` is the one registry-wide critical section:
//! code-uniqueness requires check-and-insert under a single write lock.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use wordspy_protocol::LobbyCode;

use crate::{Lobby, LobbyError};

type SharedLobby = Arc<RwLock<Lobby>>;

/// Maps lobby codes to lobbies. Lobbies are inserted once and never
/// removed; the registry lives for the process lifetime.
#[derive(Default)]
pub struct LobbyRegistry {
    lobbies: RwLock<HashMap<LobbyCode, SharedLobby>>,
}

impl LobbyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new lobby under its code.
    ///
    /// Check-and-insert happens under one map write lock, so two
    /// concurrent creations can never claim the same code.
    ///
    /// # Errors
    /// [`LobbyError::CodeTaken`] if the code is already registered.
    pub async fn insert(&self, lobby: Lobby) -> Result<(), LobbyError> {
        let mut map = self.lobbies.write().await;
        match map.entry(lobby.code().clone()) {
            Entry::Occupied(taken) => {
                Err(LobbyError::CodeTaken(taken.key().clone()))
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(RwLock::new(lobby)));
                Ok(())
            }
        }
    }

    /// Runs `f` with shared access to the lobby.
    ///
    /// Readers run concurrently with each other and always observe a
    /// fully-formed lobby, never one mid-mutation.
    ///
    /// # Errors
    /// [`LobbyError::LobbyNotFound`] for an unknown code.
    pub async fn read<T>(
        &self,
        code: &LobbyCode,
        f: impl FnOnce(&Lobby) -> T,
    ) -> Result<T, LobbyError> {
        let lobby = self.handle(code).await?;
        let guard = lobby.read().await;
        Ok(f(&guard))
    }

    /// Runs `f` with exclusive access to the lobby. This is the only
    /// sanctioned way to mutate one: for a given code, at most one
    /// `mutate` body executes at a time.
    ///
    /// # Errors
    /// [`LobbyError::LobbyNotFound`] for an unknown code.
    pub async fn mutate<T>(
        &self,
        code: &LobbyCode,
        f: impl FnOnce(&mut Lobby) -> T,
    ) -> Result<T, LobbyError> {
        let lobby = self.handle(code).await?;
        let mut guard = lobby.write().await;
        Ok(f(&mut guard))
    }

    /// Number of lobbies ever created in this process.
    pub async fn len(&self) -> usize {
        self.lobbies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.lobbies.read().await.is_empty()
    }

    /// Looks up the per-lobby handle, releasing the map lock on return.
    async fn handle(
        &self,
        code: &LobbyCode,
    ) -> Result<SharedLobby, LobbyError> {
        self.lobbies
            .read()
            .await
            .get(code)
            .cloned()
            .ok_or_else(|| LobbyError::LobbyNotFound(code.clone()))
    }
}
