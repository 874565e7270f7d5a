use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;

/// User bodies keyed by lowercased login. Bodies are served verbatim, so a
/// fixture may omit fields the client requires.
pub type Users = Arc<HashMap<String, Value>>;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    users: Users,
    latency: Duration,
}

impl AppState {
    /// A server that knows no users.
    pub fn new() -> Self {
        Self::default()
    }

    /// A server preloaded with the fixtures used across the workspace tests.
    pub fn seeded() -> Self {
        Self::new()
            .with_user(
                "octocat",
                json!({
                    "login": "octocat",
                    "id": 583231,
                    "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
                    "html_url": "https://github.com/octocat",
                    "type": "User",
                    "name": "The Octocat",
                    "company": "@github",
                    "bio": null,
                    "public_repos": 8,
                    "followers": 9000,
                    "following": 9,
                    "created_at": "2011-01-25T18:44:36Z"
                }),
            )
            .with_user(
                "mona",
                json!({
                    "login": "mona",
                    "id": 1,
                    "avatar_url": "https://avatars.githubusercontent.com/u/1?v=4",
                    "bio": "Octocat's friend"
                }),
            )
            .with_user(
                "broken",
                json!({
                    "avatar_url": "https://avatars.githubusercontent.com/u/2?v=4",
                    "bio": "this body has no login"
                }),
            )
    }

    pub fn with_user(mut self, username: &str, body: Value) -> Self {
        Arc::make_mut(&mut self.users).insert(username.to_ascii_lowercase(), body);
        self
    }

    /// Delay every response by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

pub fn app() -> Router {
    router(AppState::seeded())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users/{username}", get(get_user))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, AppState::seeded()).await
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, router(state)).await
}

/// Usernames are matched case-insensitively, like the real provider.
async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if !state.latency.is_zero() {
        tokio::time::sleep(state.latency).await;
    }
    debug!(%username, "user lookup");
    state
        .users
        .get(&username.to_ascii_lowercase())
        .cloned()
        .map(Json)
        .ok_or_else(not_found)
}

fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/users/users#get-a-user",
            "status": "404"
        })),
    )
}
