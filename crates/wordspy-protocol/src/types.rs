//! Core wire types for the lobby API.
//!
//! Everything in this module crosses the HTTP boundary as JSON. The serde
//! attributes are load-bearing: `camelCase` keys, Polish difficulty tags,
//! and millisecond timestamps all match what the front end already parses.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A player's identifier within a single lobby.
///
/// Ids are assigned sequentially starting at 1 in join order; the lobby
/// creator is always id 1. Serializes as a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

/// A lobby's join code: an 8-character numeric string, leading zeros
/// preserved. Unique across the registry for the process lifetime.
///
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LobbyCode(String);

impl LobbyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LobbyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LobbyCode {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// The lobby's difficulty tag.
///
/// Three fixed values with no behavioral effect in the core beyond storage
/// and display. The wire tags are the original Polish labels — changing
/// them would break every deployed client.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default,
)]
pub enum Difficulty {
    /// Easy — the default when the input is absent or unrecognized.
    #[default]
    #[serde(rename = "latwy")]
    Easy,

    #[serde(rename = "sredni")]
    Medium,

    #[serde(rename = "trudny")]
    Hard,
}

impl Difficulty {
    /// Normalizes a raw difficulty string from a create request.
    ///
    /// Unrecognized or absent input falls back to [`Difficulty::Easy`];
    /// this is documented normalization at lobby creation, not error
    /// recovery.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some("latwy") => Self::Easy,
            Some("sredni") => Self::Medium,
            Some("trudny") => Self::Hard,
            _ => Self::Easy,
        }
    }

    /// The wire tag for this difficulty.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "latwy",
            Self::Medium => "sredni",
            Self::Hard => "trudny",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Public views
// ---------------------------------------------------------------------------

/// One player as shown to every client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    pub id: PlayerId,
    pub name: String,
    pub is_admin: bool,
}

/// The public, secret-free view of a lobby.
///
/// This is the only lobby representation that ever leaves the server.
/// It deliberately has no field for the impostor id or the secret word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbySummary {
    pub code: LobbyCode,
    pub difficulty: Difficulty,
    pub max_players: usize,
    pub players: Vec<PlayerEntry>,
    pub started: bool,
    /// `true` once the lobby has reached `max_players`.
    pub filled: bool,
    /// Creation time as a millisecond epoch, matching `Date.now()` on
    /// the client side.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of `POST /api/lobby/create`.
///
/// `difficulty` stays a raw string here: the core normalizes unknown tags
/// to the default instead of rejecting them, so the boundary must not
/// parse it strictly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLobbyRequest {
    pub admin_password: String,
    pub admin_name: String,
    #[serde(default)]
    pub max_players: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Body of `POST /api/lobby/join`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinLobbyRequest {
    pub code: LobbyCode,
    pub name: String,
}

/// Body of `POST /api/lobby/start`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameRequest {
    pub code: LobbyCode,
    pub admin_password: String,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Success body of `POST /api/lobby/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLobbyResponse {
    pub ok: bool,
    pub code: LobbyCode,
    pub player_id: PlayerId,
    pub lobby: LobbySummary,
}

/// Success body of `POST /api/lobby/join`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinLobbyResponse {
    pub ok: bool,
    pub player_id: PlayerId,
    pub lobby: LobbySummary,
}

/// Success body of `POST /api/lobby/start` and `GET /api/lobby/state`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyResponse {
    pub ok: bool,
    pub lobby: LobbySummary,
}

/// Success body of `GET /api/lobby/role`.
///
/// `word` is `None` exactly when the asking player is the impostor —
/// a gameplay mechanic, not an information leak.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub ok: bool,
    pub is_impostor: bool,
    pub word: Option<String>,
}

/// The failure envelope used by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
