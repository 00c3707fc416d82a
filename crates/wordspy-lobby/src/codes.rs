//! Lobby code generation.

use std::sync::Arc;

use wordspy_protocol::LobbyCode;

use crate::RandomSource;

/// Length of a lobby code in characters.
pub const CODE_LENGTH: usize = 8;

/// Number of distinct codes: `10^CODE_LENGTH`.
const CODE_SPACE: u64 = 100_000_000;

/// Produces uniformly-random 8-digit lobby codes.
///
/// Purely functional: uniqueness against the registry is the creation
/// operation's job, which redraws on collision rather than assuming the
/// 10^8 space is collision-free.
pub struct CodeGenerator {
    rng: Arc<dyn RandomSource>,
}

impl CodeGenerator {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Draws one code, leading zeros preserved.
    pub fn generate(&self) -> LobbyCode {
        LobbyCode::new(format!("{:08}", self.rng.pick(CODE_SPACE)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use crate::rng::testing::ScriptedRandom;
    use crate::SystemRandom;

    use super::*;

    #[test]
    fn test_generate_pads_leading_zeros() {
        let codes =
            CodeGenerator::new(Arc::new(ScriptedRandom::new([7])));
        assert_eq!(codes.generate().as_str(), "00000007");
    }

    #[test]
    fn test_generate_formats_max_value_without_overflow() {
        let codes = CodeGenerator::new(Arc::new(ScriptedRandom::new([
            CODE_SPACE - 1,
        ])));
        assert_eq!(codes.generate().as_str(), "99999999");
    }

    #[test]
    fn test_generate_is_eight_digits() {
        let codes = CodeGenerator::new(Arc::new(SystemRandom));
        for _ in 0..100 {
            let code = codes.generate();
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            assert!(code.as_str().chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generate_draws_spread_over_the_space() {
        // Not a statistical test; just guards against a constant output.
        let codes = CodeGenerator::new(Arc::new(SystemRandom));
        let distinct: HashSet<String> = (0..50)
            .map(|_| codes.generate().as_str().to_owned())
            .collect();
        assert!(distinct.len() > 1);
    }
}
