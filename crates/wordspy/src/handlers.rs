//! Request handlers and router for the lobby API.
//!
//! Handlers translate between the wire types and the lobby core; the
//! rules themselves live in `wordspy-lobby`. The administrator secret is
//! checked here, at the boundary — the core only ever sees the resulting
//! [`AdminGrant`](wordspy_auth::AdminGrant).

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Query, Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use wordspy_auth::{Authorizer, SharedSecretAuthorizer};
use wordspy_lobby::{CreateLobby, LobbyManager};
use wordspy_protocol::{
    CreateLobbyRequest, CreateLobbyResponse, ErrorBody, HealthResponse,
    JoinLobbyRequest, JoinLobbyResponse, LobbyCode, LobbyResponse,
    PlayerId, RoleResponse, StartGameRequest,
};

use crate::{static_files, ApiError, ServerConfig};

/// Shared server state, one per process, cloned into each handler as an
/// `Arc`.
pub struct AppState {
    pub(crate) lobbies: LobbyManager,
    pub(crate) auth: Box<dyn Authorizer>,
    pub(crate) static_dir: std::path::PathBuf,
}

impl AppState {
    /// Builds the production state: shared-secret authorization and the
    /// CSPRNG-backed lobby manager.
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_authorizer(
            config,
            Box::new(SharedSecretAuthorizer::new(
                config.admin_password.clone(),
            )),
        )
    }

    /// Same, but with a custom [`Authorizer`].
    pub fn with_authorizer(
        config: &ServerConfig,
        auth: Box<dyn Authorizer>,
    ) -> Self {
        Self {
            lobbies: LobbyManager::new(config.words.clone()),
            auth,
            static_dir: config.static_dir.clone(),
        }
    }
}

/// Builds the full application router: the six `/api` endpoints plus the
/// static front-end fallback.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/lobby/state", get(lobby_state))
        .route("/api/lobby/role", get(lobby_role))
        .route("/api/lobby/create", post(create_lobby))
        .route("/api/lobby/join", post(join_lobby))
        .route("/api/lobby/start", post(start_game))
        .fallback(fallback)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Body extraction
// ---------------------------------------------------------------------------

/// `Json` with the failure envelope: a malformed body answers
/// `400 {ok:false, error}` like every other rejection, instead of axum's
/// default plain-text 4xx.
#[derive(Debug)]
pub(crate) struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                Err(ApiError::BadRequest(rejection.body_text()))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct StateQuery {
    code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleQuery {
    code: String,
    player_id: u32,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

async fn lobby_state(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StateQuery>,
) -> Result<Json<LobbyResponse>, ApiError> {
    let lobby = state
        .lobbies
        .summary(&LobbyCode::from(query.code.as_str()))
        .await?;
    Ok(Json(LobbyResponse { ok: true, lobby }))
}

async fn lobby_role(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RoleQuery>,
) -> Result<Json<RoleResponse>, ApiError> {
    let view = state
        .lobbies
        .role(
            &LobbyCode::from(query.code.as_str()),
            PlayerId(query.player_id),
        )
        .await?;
    Ok(Json(RoleResponse {
        ok: true,
        is_impostor: view.is_impostor,
        word: view.word,
    }))
}

async fn create_lobby(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateLobbyRequest>,
) -> Result<Json<CreateLobbyResponse>, ApiError> {
    let grant = state.auth.authorize(&req.admin_password)?;
    let (player_id, lobby) = state
        .lobbies
        .create_lobby(
            grant,
            CreateLobby {
                admin_name: req.admin_name,
                max_players: req.max_players,
                difficulty: req.difficulty,
            },
        )
        .await?;
    Ok(Json(CreateLobbyResponse {
        ok: true,
        code: lobby.code.clone(),
        player_id,
        lobby,
    }))
}

async fn join_lobby(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<JoinLobbyRequest>,
) -> Result<Json<JoinLobbyResponse>, ApiError> {
    let (player_id, lobby) =
        state.lobbies.join_lobby(&req.code, &req.name).await?;
    Ok(Json(JoinLobbyResponse {
        ok: true,
        player_id,
        lobby,
    }))
}

async fn start_game(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<StartGameRequest>,
) -> Result<Json<LobbyResponse>, ApiError> {
    // Existence before credentials: an unknown lobby answers 404 even to
    // a bad password, matching the deployed boundary.
    state.lobbies.summary(&req.code).await?;
    let grant = state.auth.authorize(&req.admin_password)?;
    let lobby = state.lobbies.start_game(grant, &req.code).await?;
    Ok(Json(LobbyResponse { ok: true, lobby }))
}

/// Everything outside `/api` serves the browser front end; unknown API
/// paths answer the JSON envelope.
async fn fallback(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Response {
    if uri.path() == "/api" || uri.path().starts_with("/api/") {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new("not found")),
        )
            .into_response();
    }
    static_files::serve(&state.static_dir, uri.path()).await
}

// =========================================================================
// Tests
// =========================================================================
