//! The lobby model and its transition rules.
//!
//! A lobby has exactly two states: open (accepting joins) and started
//! (roles fixed, terminal). Every transition method checks all of its
//! preconditions before touching any field, so a failed call leaves the
//! lobby exactly as it was.

use chrono::{DateTime, Utc};
use wordspy_protocol::{
    Difficulty, LobbyCode, LobbySummary, PlayerEntry, PlayerId,
};

use crate::{Assignment, LobbyError, RoleAssigner};

/// Minimum players required to start a game.
pub const MIN_PLAYERS: usize = 3;

/// Maximum length of a player name, in characters.
pub const MAX_NAME_LEN: usize = 32;

/// Bounds the `maxPlayers` setting is clamped into at creation.
const MAX_PLAYERS_RANGE: std::ops::RangeInclusive<usize> = 3..=12;

/// One participant in a lobby.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Sequential within the lobby, starting at 1 in join order.
    pub id: PlayerId,
    /// Trimmed, 1–32 characters, unique case-insensitively per lobby.
    pub name: String,
    /// True only for the creator (always id 1).
    pub is_admin: bool,
}

/// What a player learns about their role after the game has started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleView {
    pub is_impostor: bool,
    /// The shared secret word; `None` exactly for the impostor.
    pub word: Option<String>,
}

/// A single game session.
///
/// Fields are private: the only ways to change a lobby are [`Lobby::join`]
/// and [`Lobby::start`], and the only ways to observe it are the secret-free
/// [`Lobby::summary`] and the per-player [`Lobby::role_of`].
#[derive(Debug, Clone)]
pub struct Lobby {
    code: LobbyCode,
    difficulty: Difficulty,
    max_players: usize,
    players: Vec<Player>,
    started: bool,
    impostor_id: Option<PlayerId>,
    secret_word: Option<String>,
    created_at: DateTime<Utc>,
}

impl Lobby {
    /// Creates an open lobby whose first player is the admin (id 1).
    ///
    /// `admin_name` must already be cleaned (see [`clean_name`]);
    /// `max_players` must already be clamped (see [`clamp_max_players`]).
    pub(crate) fn new(
        code: LobbyCode,
        admin_name: String,
        max_players: usize,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            code,
            difficulty,
            max_players,
            players: vec![Player {
                id: PlayerId(1),
                name: admin_name,
                is_admin: true,
            }],
            started: false,
            impostor_id: None,
            secret_word: None,
            created_at: Utc::now(),
        }
    }

    pub fn code(&self) -> &LobbyCode {
        &self.code
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Adds a player, assigning the next sequential id.
    ///
    /// # Errors
    /// - [`LobbyError::AlreadyStarted`] once the game has begun
    /// - [`LobbyError::LobbyFull`] at the player limit
    /// - [`LobbyError::InvalidName`] if `name` is empty after trimming
    /// - [`LobbyError::NameTaken`] on a case-insensitive name clash
    pub fn join(&mut self, name: &str) -> Result<PlayerId, LobbyError> {
        if self.started {
            return Err(LobbyError::AlreadyStarted(self.code.clone()));
        }
        if self.players.len() >= self.max_players {
            return Err(LobbyError::LobbyFull(self.code.clone()));
        }
        let name = clean_name(name)?;
        let lowered = name.to_lowercase();
        if self
            .players
            .iter()
            .any(|p| p.name.to_lowercase() == lowered)
        {
            return Err(LobbyError::NameTaken(name, self.code.clone()));
        }

        let id = PlayerId(self.players.len() as u32 + 1);
        self.players.push(Player {
            id,
            name,
            is_admin: false,
        });
        Ok(id)
    }

    /// Starts the game: assigns the impostor and the secret word, then
    /// flips the lobby into its terminal state.
    ///
    /// # Errors
    /// - [`LobbyError::AlreadyStarted`] — starting is one-shot
    /// - [`LobbyError::NotEnoughPlayers`] below [`MIN_PLAYERS`]
    pub fn start(
        &mut self,
        assigner: &RoleAssigner,
        words: &[String],
    ) -> Result<(), LobbyError> {
        if self.started {
            return Err(LobbyError::AlreadyStarted(self.code.clone()));
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(LobbyError::NotEnoughPlayers {
                have: self.players.len(),
            });
        }

        let Assignment { impostor, word } =
            assigner.assign(&self.players, words)?;
        self.impostor_id = Some(impostor);
        self.secret_word = Some(word);
        self.started = true;
        Ok(())
    }

    /// The public, secret-free view of this lobby.
    pub fn summary(&self) -> LobbySummary {
        LobbySummary {
            code: self.code.clone(),
            difficulty: self.difficulty,
            max_players: self.max_players,
            players: self
                .players
                .iter()
                .map(|p| PlayerEntry {
                    id: p.id,
                    name: p.name.clone(),
                    is_admin: p.is_admin,
                })
                .collect(),
            started: self.started,
            filled: self.players.len() >= self.max_players,
            created_at: self.created_at,
        }
    }

    /// What `player` learns about their role.
    ///
    /// Checked in the order the deployed boundary always used: started
    /// before player lookup, so a pre-start query with a bogus id reports
    /// the not-started conflict.
    ///
    /// # Errors
    /// - [`LobbyError::NotStarted`] before the game begins
    /// - [`LobbyError::PlayerNotFound`] for an unknown player id
    pub fn role_of(&self, player: PlayerId) -> Result<RoleView, LobbyError> {
        if !self.started {
            return Err(LobbyError::NotStarted(self.code.clone()));
        }
        if !self.players.iter().any(|p| p.id == player) {
            return Err(LobbyError::PlayerNotFound(
                player,
                self.code.clone(),
            ));
        }

        let is_impostor = self.impostor_id == Some(player);
        Ok(RoleView {
            is_impostor,
            word: if is_impostor {
                None
            } else {
                self.secret_word.clone()
            },
        })
    }
}

/// Trims surrounding whitespace and truncates to [`MAX_NAME_LEN`]
/// characters.
///
/// # Errors
/// [`LobbyError::InvalidName`] if nothing remains after trimming.
pub(crate) fn clean_name(raw: &str) -> Result<String, LobbyError> {
    let name: String = raw.trim().chars().take(MAX_NAME_LEN).collect();
    if name.is_empty() {
        Err(LobbyError::InvalidName)
    } else {
        Ok(name)
    }
}

/// Clamps the requested player limit into [3, 12]; absent defaults to 3.
pub(crate) fn clamp_max_players(requested: Option<i64>) -> usize {
    let lo = *MAX_PLAYERS_RANGE.start() as i64;
    let hi = *MAX_PLAYERS_RANGE.end() as i64;
    requested.unwrap_or(lo).clamp(lo, hi) as usize
}
