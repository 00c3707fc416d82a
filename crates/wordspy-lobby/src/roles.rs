//! Role assignment at game start.

use std::sync::Arc;

use wordspy_protocol::PlayerId;

use crate::{LobbyError, Player, RandomSource};

/// The outcome of a role assignment: who plays blind, and the word
/// everyone else shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub impostor: PlayerId,
    pub word: String,
}

/// Picks the impostor and the secret word when a game starts.
///
/// Both picks are uniform over their inputs. Side-effect-free: applying
/// the assignment to the lobby is the state machine's job.
pub struct RoleAssigner {
    rng: Arc<dyn RandomSource>,
}

impl RoleAssigner {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Selects one impostor from `players` and one word from `words`.
    ///
    /// # Errors
    /// [`LobbyError::Internal`] if either input is empty. The state
    /// machine never calls this below the minimum player count, and the
    /// configuration layer guarantees a non-trivial vocabulary, so an
    /// empty input here is a bug upstream — rejected, not papered over.
    pub fn assign(
        &self,
        players: &[Player],
        words: &[String],
    ) -> Result<Assignment, LobbyError> {
        if players.is_empty() {
            return Err(LobbyError::Internal(
                "role assignment over an empty player list".into(),
            ));
        }
        if words.is_empty() {
            return Err(LobbyError::Internal(
                "role assignment with an empty vocabulary".into(),
            ));
        }

        let impostor =
            players[self.rng.pick(players.len() as u64) as usize].id;
        let word =
            words[self.rng.pick(words.len() as u64) as usize].clone();

        Ok(Assignment { impostor, word })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::rng::testing::ScriptedRandom;
    use crate::SystemRandom;

    use super::*;

    fn players(n: u32) -> Vec<Player> {
        (1..=n)
            .map(|id| Player {
                id: PlayerId(id),
                name: format!("player-{id}"),
                is_admin: id == 1,
            })
            .collect()
    }

    fn words() -> Vec<String> {
        vec!["dom".into(), "chmura".into(), "silnik".into()]
    }

    #[test]
    fn test_assign_uses_scripted_picks() {
        let assigner = RoleAssigner::new(Arc::new(ScriptedRandom::new([
            2, // third player
            1, // second word
        ])));

        let assignment = assigner.assign(&players(3), &words()).unwrap();
        assert_eq!(assignment.impostor, PlayerId(3));
        assert_eq!(assignment.word, "chmura");
    }

    #[test]
    fn test_assign_impostor_is_an_existing_player() {
        let assigner = RoleAssigner::new(Arc::new(SystemRandom));
        let roster = players(5);
        for _ in 0..50 {
            let assignment = assigner.assign(&roster, &words()).unwrap();
            assert!(roster.iter().any(|p| p.id == assignment.impostor));
            assert!(words().contains(&assignment.word));
        }
    }

    #[test]
    fn test_assign_empty_players_is_internal_error() {
        let assigner = RoleAssigner::new(Arc::new(SystemRandom));
        let err = assigner.assign(&[], &words()).unwrap_err();
        assert!(matches!(err, LobbyError::Internal(_)));
    }

    #[test]
    fn test_assign_empty_vocabulary_is_internal_error() {
        let assigner = RoleAssigner::new(Arc::new(SystemRandom));
        let err = assigner.assign(&players(3), &[]).unwrap_err();
        assert!(matches!(err, LobbyError::Internal(_)));
    }
}
