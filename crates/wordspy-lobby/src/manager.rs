//! The lobby state machine: create, join, start, and query operations.
//!
//! Every write goes through [`LobbyRegistry::mutate`], so per-lobby
//! serialization is inherited from the registry; this module only adds
//! the domain rules. Callers arrive with already-authorized, well-typed
//! arguments — privileged operations take an [`AdminGrant`] proof rather
//! than a credential.

use std::sync::Arc;

use wordspy_auth::AdminGrant;
use wordspy_protocol::{Difficulty, LobbyCode, LobbySummary, PlayerId};

use crate::lobby::{clamp_max_players, clean_name};
use crate::{
    CodeGenerator, Lobby, LobbyError, LobbyRegistry, RandomSource,
    RoleAssigner, RoleView, SystemRandom,
};

/// Validated-at-the-boundary parameters for lobby creation.
///
/// `max_players` and `difficulty` arrive raw: the creation operation
/// normalizes them (clamp to [3,12], unknown difficulty → easiest) as
/// documented behavior, not error recovery.
#[derive(Debug, Clone)]
pub struct CreateLobby {
    pub admin_name: String,
    pub max_players: Option<i64>,
    pub difficulty: Option<String>,
}

/// Coordinates all lobby operations over a shared [`LobbyRegistry`].
///
/// One instance per process, shared across request tasks. Holds the
/// vocabulary the role assigner draws secret words from.
pub struct LobbyManager {
    registry: LobbyRegistry,
    codes: CodeGenerator,
    roles: RoleAssigner,
    words: Vec<String>,
}

impl LobbyManager {
    /// Creates a manager using the production CSPRNG.
    pub fn new(words: Vec<String>) -> Self {
        Self::with_random(words, Arc::new(SystemRandom))
    }

    /// Creates a manager with an injected random source. Tests use this
    /// to script code draws and role picks.
    pub fn with_random(
        words: Vec<String>,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            registry: LobbyRegistry::new(),
            codes: CodeGenerator::new(Arc::clone(&rng)),
            roles: RoleAssigner::new(rng),
            words,
        }
    }

    /// Creates a new open lobby with the caller as its admin (id 1).
    ///
    /// Draws codes until one inserts cleanly; the registry's atomic
    /// check-and-insert makes the draw-check-insert loop race-free.
    ///
    /// # Errors
    /// [`LobbyError::InvalidName`] if the admin name is empty after
    /// normalization.
    pub async fn create_lobby(
        &self,
        _grant: AdminGrant,
        params: CreateLobby,
    ) -> Result<(PlayerId, LobbySummary), LobbyError> {
        let admin_name = clean_name(&params.admin_name)?;
        let max_players = clamp_max_players(params.max_players);
        let difficulty =
            Difficulty::normalize(params.difficulty.as_deref());

        loop {
            let code = self.codes.generate();
            let lobby = Lobby::new(
                code.clone(),
                admin_name.clone(),
                max_players,
                difficulty,
            );
            let summary = lobby.summary();

            match self.registry.insert(lobby).await {
                Ok(()) => {
                    let lobbies = self.registry.len().await;
                    tracing::info!(
                        %code,
                        max_players,
                        %difficulty,
                        lobbies,
                        "lobby created"
                    );
                    return Ok((PlayerId(1), summary));
                }
                Err(LobbyError::CodeTaken(code)) => {
                    tracing::debug!(%code, "code collision, redrawing");
                }
                Err(other) => return Err(other),
            }
        }
    }

    /// Adds a player to an open lobby.
    ///
    /// # Errors
    /// [`LobbyError::LobbyNotFound`], or any rejection from
    /// [`Lobby::join`] (started, full, invalid or duplicate name).
    pub async fn join_lobby(
        &self,
        code: &LobbyCode,
        name: &str,
    ) -> Result<(PlayerId, LobbySummary), LobbyError> {
        let (player_id, summary) = self
            .registry
            .mutate(code, |lobby| {
                let player_id = lobby.join(name)?;
                Ok::<_, LobbyError>((player_id, lobby.summary()))
            })
            .await??;

        tracing::info!(
            %code,
            %player_id,
            players = summary.players.len(),
            "player joined"
        );
        Ok((player_id, summary))
    }

    /// Starts the game: picks the impostor and the secret word, then
    /// locks the lobby into its terminal state.
    ///
    /// # Errors
    /// [`LobbyError::LobbyNotFound`], or any rejection from
    /// [`Lobby::start`] (already started, not enough players).
    pub async fn start_game(
        &self,
        _grant: AdminGrant,
        code: &LobbyCode,
    ) -> Result<LobbySummary, LobbyError> {
        let summary = self
            .registry
            .mutate(code, |lobby| {
                lobby.start(&self.roles, &self.words)?;
                Ok::<_, LobbyError>(lobby.summary())
            })
            .await??;

        tracing::info!(
            %code,
            players = summary.players.len(),
            "game started"
        );
        Ok(summary)
    }

    /// The public view of a lobby, available in any state.
    ///
    /// # Errors
    /// [`LobbyError::LobbyNotFound`] for an unknown code.
    pub async fn summary(
        &self,
        code: &LobbyCode,
    ) -> Result<LobbySummary, LobbyError> {
        self.registry.read(code, |lobby| lobby.summary()).await
    }

    /// What `player` learns about their role once the game has started.
    ///
    /// # Errors
    /// [`LobbyError::LobbyNotFound`], [`LobbyError::NotStarted`], or
    /// [`LobbyError::PlayerNotFound`].
    pub async fn role(
        &self,
        code: &LobbyCode,
        player: PlayerId,
    ) -> Result<RoleView, LobbyError> {
        self.registry
            .read(code, |lobby| lobby.role_of(player))
            .await?
    }

    /// Number of lobbies created so far in this process.
    pub async fn lobby_count(&self) -> usize {
        self.registry.len().await
    }
}

// =========================================================================
// Tests
// =========================================================================
