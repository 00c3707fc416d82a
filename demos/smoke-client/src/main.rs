//! Drives a running wordspy server through a full game:
//! create a lobby, fill it to three players, start, and show each
//! player's role.
//!
//! ```text
//! cargo run -p smoke-client -- http://127.0.0.1:3000
//! ```
//!
//! The administrator password comes from `ADMIN_PASSWORD` (default
//! `admin`, like the server).

use reqwest::Client;
use serde_json::json;
use wordspy_protocol::{
    CreateLobbyResponse, HealthResponse, JoinLobbyResponse, LobbyResponse,
    RoleResponse,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:3000".into());
    let password = std::env::var("ADMIN_PASSWORD")
        .unwrap_or_else(|_| "admin".into());
    let client = Client::new();

    let health: HealthResponse = client
        .get(format!("{base}/api/health"))
        .send()
        .await?
        .json()
        .await?;
    println!("health: ok={}", health.ok);

    let created: CreateLobbyResponse = client
        .post(format!("{base}/api/lobby/create"))
        .json(&json!({
            "adminPassword": &password,
            "adminName": "Ala",
            "maxPlayers": 5,
            "difficulty": "sredni",
        }))
        .send()
        .await?
        .json()
        .await?;
    let code = created.code;
    println!("created lobby {code} as player {}", created.player_id);

    for name in ["Ola", "Jan"] {
        let joined: JoinLobbyResponse = client
            .post(format!("{base}/api/lobby/join"))
            .json(&json!({ "code": &code, "name": name }))
            .send()
            .await?
            .json()
            .await?;
        println!("{name} joined as player {}", joined.player_id);
    }

    let started: LobbyResponse = client
        .post(format!("{base}/api/lobby/start"))
        .json(&json!({ "code": &code, "adminPassword": &password }))
        .send()
        .await?
        .json()
        .await?;
    println!(
        "game started with {} players",
        started.lobby.players.len()
    );

    for player in &started.lobby.players {
        let role: RoleResponse = client
            .get(format!(
                "{base}/api/lobby/role?code={code}&playerId={}",
                player.id.0
            ))
            .send()
            .await?
            .json()
            .await?;
        match role.word {
            Some(word) => {
                println!("{} ({}): word is {word:?}", player.name, player.id)
            }
            None => println!(
                "{} ({}): impostor — no word",
                player.name, player.id
            ),
        }
    }

    Ok(())
}
