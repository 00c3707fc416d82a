//! Wire types for the wordspy lobby API.
//!
//! This crate defines the "language" that the browser front end and the
//! server speak over HTTP+JSON:
//!
//! - **Identity** ([`PlayerId`], [`LobbyCode`]) — who and where.
//! - **Public views** ([`LobbySummary`], [`PlayerEntry`]) — everything a
//!   client may see about a lobby. Never the secret word, never the
//!   impostor id.
//! - **Requests/responses** — one record per endpoint, plus the
//!   `{ok:false, error}` failure envelope.
//!
//! Field names and enum tags are pinned with serde attributes: the JSON
//! shapes here are a compatibility contract with the deployed front end,
//! so every type carries a shape test.

mod types;

pub use types::{
    CreateLobbyRequest, CreateLobbyResponse, Difficulty, ErrorBody,
    HealthResponse, JoinLobbyRequest, JoinLobbyResponse, LobbyCode,
    LobbyResponse, LobbySummary, PlayerEntry, PlayerId, RoleResponse,
    StartGameRequest,
};
