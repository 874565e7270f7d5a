//! End-to-end lookups over real HTTP against the mock server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mock_server::AppState;
use profile_core::{HttpMethod, HttpRequest, LookupError, Phase, ProfileClient};
use profile_shell::{fetch_user_profile, ReqwestTransport, Session, Transport};

async fn start_mock_server(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::serve(listener, state));
    addr
}

fn transport(timeout: Duration) -> ReqwestTransport {
    ReqwestTransport::new(timeout).unwrap()
}

#[tokio::test]
async fn known_user_is_fetched() {
    let addr = start_mock_server(AppState::seeded()).await;
    let client = ProfileClient::new(&format!("http://{addr}"));

    let profile = fetch_user_profile(&transport(Duration::from_secs(5)), &client, "octocat")
        .await
        .unwrap();
    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.name.as_deref(), Some("The Octocat"));
    assert!(profile.bio.is_none());
}

#[tokio::test]
async fn transport_returns_status_and_body_only() {
    let addr = start_mock_server(AppState::seeded()).await;
    let request = HttpRequest {
        method: HttpMethod::Get,
        url: format!("http://{addr}/users/mona"),
        headers: Vec::new(),
    };

    let response = transport(Duration::from_secs(5)).execute(request).await.unwrap();
    assert_eq!(response.status, 200);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["login"], "mona");
    assert!(response.headers.is_empty());
}

#[tokio::test]
async fn unknown_user_is_invalid_response() {
    let addr = start_mock_server(AppState::seeded()).await;
    let client = ProfileClient::new(&format!("http://{addr}"));

    let err = fetch_user_profile(&transport(Duration::from_secs(5)), &client, "no-such-user")
        .await
        .unwrap_err();
    match err {
        LookupError::InvalidResponse { status, body } => {
            assert_eq!(status, 404);
            let body: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(body["message"], "Not Found");
        }
        other => panic!("expected InvalidResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn body_without_login_is_invalid_data() {
    let addr = start_mock_server(AppState::seeded()).await;
    let client = ProfileClient::new(&format!("http://{addr}"));

    let err = fetch_user_profile(&transport(Duration::from_secs(5)), &client, "broken")
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::InvalidData(_)));
}

#[tokio::test]
async fn slow_provider_trips_the_timeout() {
    let addr = start_mock_server(AppState::seeded().with_latency(Duration::from_secs(2))).await;
    let client = ProfileClient::new(&format!("http://{addr}"));

    let err = fetch_user_profile(&transport(Duration::from_millis(200)), &client, "octocat")
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn session_against_mock_server() {
    let addr = start_mock_server(AppState::seeded()).await;
    let session = Session::new(
        ProfileClient::new(&format!("http://{addr}")),
        Arc::new(transport(Duration::from_secs(5))),
    );

    assert!(session.search("").await.is_none());
    assert_eq!(session.phase().await, Phase::Idle);

    let handle = session.search("mona").await.unwrap();
    assert!(session.is_loading().await);
    assert!(handle.await.unwrap());
    let view = session.view().await;
    assert!(!view.loading);
    assert_eq!(view.title, "mona");
    assert_eq!(view.bio, "Octocat's friend");

    let handle = session.search("no-such-user").await.unwrap();
    assert!(handle.await.unwrap());
    let view = session.view().await;
    assert_eq!(view.title, "mona");
    assert_eq!(view.error.as_deref(), Some("User not found."));
}

#[tokio::test]
async fn newer_search_wins_over_slow_one() {
    let addr = start_mock_server(AppState::seeded().with_latency(Duration::from_millis(300))).await;
    let session = Session::new(
        ProfileClient::new(&format!("http://{addr}")),
        Arc::new(transport(Duration::from_secs(5))),
    );

    let first = session.search("octocat").await.unwrap();
    let second = session.search("mona").await.unwrap();

    assert!(!first.await.unwrap());
    assert!(second.await.unwrap());
    assert_eq!(session.view().await.title, "mona");
}
