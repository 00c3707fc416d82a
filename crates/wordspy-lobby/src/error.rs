//! Error types for the lobby core.

use wordspy_protocol::{LobbyCode, PlayerId};

use crate::MIN_PLAYERS;

/// Coarse classification of a [`LobbyError`], used by the boundary to
/// pick an HTTP status without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or empty input.
    Validation,
    /// Unknown lobby or player.
    NotFound,
    /// The operation is invalid for the lobby's current state.
    Conflict,
    /// Unexpected failure inside the core.
    Internal,
}

/// Errors that can occur during lobby operations.
///
/// Every violated invariant is a hard rejection: no operation mutates any
/// state before all of its checks have passed.
#[derive(Debug, thiserror::Error)]
pub enum LobbyError {
    /// No lobby is registered under this code.
    #[error("lobby {0} not found")]
    LobbyNotFound(LobbyCode),

    /// The lobby exists but has no player with this id.
    #[error("player {0} not found in lobby {1}")]
    PlayerNotFound(PlayerId, LobbyCode),

    /// The player name is empty after trimming.
    #[error("player name must not be empty")]
    InvalidName,

    /// The lobby has reached its player limit.
    #[error("lobby {0} is full")]
    LobbyFull(LobbyCode),

    /// Another player already uses this name (case-insensitively).
    #[error("name {0:?} is already taken in lobby {1}")]
    NameTaken(String, LobbyCode),

    /// The game has already started; joins and restarts are rejected.
    #[error("game in lobby {0} has already started")]
    AlreadyStarted(LobbyCode),

    /// The game has not started yet; roles are not assigned.
    #[error("game in lobby {0} has not started yet")]
    NotStarted(LobbyCode),

    /// Starting requires at least [`MIN_PLAYERS`] players.
    #[error("need at least {MIN_PLAYERS} players to start, have {have}")]
    NotEnoughPlayers { have: usize },

    /// The code is already registered. Creation redraws on this; it is
    /// never surfaced to callers of the state machine.
    #[error("code {0} is already registered")]
    CodeTaken(LobbyCode),

    /// Unexpected internal failure, e.g. an empty vocabulary reaching
    /// role assignment.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LobbyError {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LobbyNotFound(_) | Self::PlayerNotFound(_, _) => {
                ErrorKind::NotFound
            }
            Self::InvalidName => ErrorKind::Validation,
            Self::LobbyFull(_)
            | Self::NameTaken(_, _)
            | Self::AlreadyStarted(_)
            | Self::NotStarted(_)
            | Self::NotEnoughPlayers { .. } => ErrorKind::Conflict,
            Self::CodeTaken(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code() -> LobbyCode {
        LobbyCode::from("00001234")
    }

    #[test]
    fn test_kind_classifies_not_found() {
        assert_eq!(
            LobbyError::LobbyNotFound(code()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            LobbyError::PlayerNotFound(PlayerId(9), code()).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_kind_classifies_state_conflicts() {
        assert_eq!(LobbyError::LobbyFull(code()).kind(), ErrorKind::Conflict);
        assert_eq!(
            LobbyError::AlreadyStarted(code()).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            LobbyError::NotStarted(code()).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            LobbyError::NotEnoughPlayers { have: 2 }.kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            LobbyError::NameTaken("Ala".into(), code()).kind(),
            ErrorKind::Conflict
        );
    }

    #[test]
    fn test_kind_classifies_validation_and_internal() {
        assert_eq!(LobbyError::InvalidName.kind(), ErrorKind::Validation);
        assert_eq!(
            LobbyError::Internal("boom".into()).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_messages_name_the_lobby() {
        let msg = LobbyError::AlreadyStarted(code()).to_string();
        assert!(msg.contains("00001234"));
    }
}
