//! Process configuration.
//!
//! Everything the server needs from its environment: the listening port,
//! the shared administrator secret, the secret-word vocabulary, and the
//! front-end directory. Unset variables fall back to the defaults the
//! game has always shipped with.

use std::env;
use std::path::PathBuf;

/// The built-in secret-word vocabulary.
pub const DEFAULT_WORDS: [&str; 5] =
    ["dom", "chmura", "kałamarz", "silnik", "prąd"];

/// Smallest vocabulary that still makes the game playable: with one word
/// the impostor could infer it from any hint.
const MIN_WORDS: usize = 2;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ADMIN_PASSWORD: &str = "admin";
const DEFAULT_STATIC_DIR: &str = "public";

/// Errors produced while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` was set to something that is not a port number.
    #[error("PORT must be a number in 1-65535, got {0:?}")]
    InvalidPort(String),

    /// The vocabulary is too small to play with.
    #[error("vocabulary needs at least {MIN_WORDS} words, got {0}")]
    NotEnoughWords(usize),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening port (`PORT`, default 3000).
    pub port: u16,
    /// Shared administrator secret (`ADMIN_PASSWORD`, default `admin`).
    pub admin_password: String,
    /// Secret-word vocabulary (`WORDS`, comma-separated, default
    /// [`DEFAULT_WORDS`]). At least two entries.
    pub words: Vec<String>,
    /// Directory the static fallback serves the front end from
    /// (`STATIC_DIR`, default `public`).
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            admin_password: DEFAULT_ADMIN_PASSWORD.to_owned(),
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    /// [`ConfigError::InvalidPort`] for a non-numeric `PORT`;
    /// [`ConfigError::NotEnoughWords`] if `WORDS` holds fewer than two
    /// non-empty entries.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("PORT").ok().as_deref(),
            env::var("ADMIN_PASSWORD").ok().as_deref(),
            env::var("WORDS").ok().as_deref(),
            env::var("STATIC_DIR").ok().as_deref(),
        )
    }

    /// Checks the invariants a hand-built config must also satisfy.
    ///
    /// # Errors
    /// [`ConfigError::NotEnoughWords`] below the two-word minimum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.words.len() < MIN_WORDS {
            return Err(ConfigError::NotEnoughWords(self.words.len()));
        }
        Ok(())
    }

    fn from_vars(
        port: Option<&str>,
        admin_password: Option<&str>,
        words: Option<&str>,
        static_dir: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = port {
            config.port = raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?;
        }
        if let Some(password) = admin_password {
            config.admin_password = password.to_owned();
        }
        if let Some(raw) = words {
            config.words = raw
                .split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_owned)
                .collect();
        }
        if let Some(dir) = static_dir {
            config.static_dir = PathBuf::from(dir);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vars_all_absent_uses_defaults() {
        let config =
            ServerConfig::from_vars(None, None, None, None).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.admin_password, "admin");
        assert_eq!(config.words.len(), DEFAULT_WORDS.len());
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_from_vars_overrides_apply() {
        let config = ServerConfig::from_vars(
            Some("8080"),
            Some("hunter2"),
            Some("jeden, dwa ,trzy"),
            Some("www"),
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.admin_password, "hunter2");
        assert_eq!(config.words, vec!["jeden", "dwa", "trzy"]);
        assert_eq!(config.static_dir, PathBuf::from("www"));
    }

    #[test]
    fn test_from_vars_non_numeric_port_rejected() {
        let err = ServerConfig::from_vars(Some("http"), None, None, None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn test_from_vars_one_word_vocabulary_rejected() {
        let err =
            ServerConfig::from_vars(None, None, Some("dom"), None)
                .unwrap_err();
        assert!(matches!(err, ConfigError::NotEnoughWords(1)));
    }

    #[test]
    fn test_from_vars_empty_entries_are_dropped() {
        let config =
            ServerConfig::from_vars(None, None, Some("dom,,chmura,"), None)
                .unwrap();
        assert_eq!(config.words, vec!["dom", "chmura"]);
    }

    #[test]
    fn test_validate_rejects_hand_built_empty_vocabulary() {
        let config = ServerConfig {
            words: vec![],
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotEnoughWords(0))
        ));
    }
}
