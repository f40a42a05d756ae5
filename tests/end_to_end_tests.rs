//! End-to-End Tests
//!
//! Runs the real server on an ephemeral port and drives it through
//! `MemoraClient`.

use std::net::SocketAddr;

use memora::cache::current_timestamp;
use memora::error::{CacheError, ClientError};
use memora::{api::create_router, AppState, MemoraClient};
use serde_json::{json, Value};

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::default());

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_session_lifecycle() {
    let base = spawn_server().await;
    let mut client = MemoraClient::new(&base);

    let connected = client.connect(Some("10.0.0.5")).await.unwrap();
    assert!(connected.success);
    assert!(connected.session_key.starts_with("10.0.0.5-"));

    client.set("user:1", b"Alice", 0).await.unwrap();
    assert_eq!(client.get("user:1").await.unwrap(), b"Alice");

    assert!(client.delete("user:1").await.unwrap());
    assert!(matches!(
        client.get("user:1").await,
        Err(ClientError::Cache(CacheError::NotFound(_)))
    ));
    assert!(!client.delete("user:1").await.unwrap());
}

#[tokio::test]
async fn test_expiry_over_the_wire() {
    let base = spawn_server().await;
    let mut client = MemoraClient::new(&base);
    client.connect(Some("10.0.0.5")).await.unwrap();

    client
        .set("stale", b"v", current_timestamp() - 30)
        .await
        .unwrap();
    client
        .set("fresh", b"v", current_timestamp() + 3600)
        .await
        .unwrap();

    assert!(client.get("stale").await.is_err());
    assert_eq!(client.get("fresh").await.unwrap(), b"v");
}

#[tokio::test]
async fn test_validation_reported_to_client() {
    let base = spawn_server().await;
    let mut client = MemoraClient::new(&base);
    client.connect(Some("10.0.0.5")).await.unwrap();

    client.set("k", b"original", 0).await.unwrap();
    assert!(matches!(client.set("k", b"", 0).await, Err(ClientError::Rejected(_))));
    assert!(matches!(client.set("k", b"x", -1).await, Err(ClientError::Rejected(_))));
    assert_eq!(client.get("k").await.unwrap(), b"original");
}

#[tokio::test]
async fn test_connect_uses_peer_address_when_omitted() {
    let base = spawn_server().await;
    let mut first = MemoraClient::new(&base);
    let mut second = MemoraClient::new(&base);

    let a = first.connect(None).await.unwrap();
    assert!(a.session_key.starts_with("127.0.0.1-"));

    // Same peer IP, so the second client shares the first one's session
    let b = second.connect(None).await.unwrap();
    assert!(b.already_connected);
    assert_eq!(a.session_key, b.session_key);

    first.set("shared", b"from-first", 0).await.unwrap();
    assert_eq!(second.get("shared").await.unwrap(), b"from-first");
}

#[tokio::test]
async fn test_forged_session_rejected() {
    let base = spawn_server().await;
    let client = MemoraClient::new(&base).with_session_key("127.0.0.1-1690000000000000000");

    assert!(matches!(
        client.get("anything").await,
        Err(ClientError::Cache(CacheError::Unauthorized))
    ));
}

#[tokio::test]
async fn test_bodyless_connect_over_http() {
    let base = spawn_server().await;

    let resp: Value = reqwest::Client::new()
        .post(format!("{}/connect", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(resp["success"], json!(true));
    assert!(resp["sessionKey"].as_str().unwrap().starts_with("127.0.0.1-"));
}

#[tokio::test]
async fn test_health_over_http() {
    let base = spawn_server().await;

    let health: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], json!("healthy"));
}
