//! Client Module
//!
//! Typed HTTP client for a Memora server. Connect once, and the client keeps
//! the session key and attaches it to every later call. Status bodies come
//! back as `Result`s.

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{CacheError, ClientError};
use crate::models::{
    ConnectRequest, ConnectResponse, DeleteRequest, DeleteResponse, GetRequest, GetResponse,
    SetRequest, SetResponse, Status,
};

// == Memora Client ==
/// Client for the `/connect`, `/set`, `/get` and `/delete` endpoints.
///
/// The underlying connection pool is released when the client is dropped.
#[derive(Debug, Clone)]
pub struct MemoraClient {
    http: reqwest::Client,
    base_url: String,
    session_key: Option<String>,
}

impl MemoraClient {
    /// Creates a client for the server at `base_url`, e.g. `http://127.0.0.1:1212`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client on top of a preconfigured reqwest client (timeouts, proxies).
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            session_key: None,
        }
    }

    /// Resumes a session with a key obtained earlier.
    pub fn with_session_key(mut self, session_key: impl Into<String>) -> Self {
        self.session_key = Some(session_key.into());
        self
    }

    pub fn session_key(&self) -> Option<&str> {
        self.session_key.as_deref()
    }

    async fn call<Req, Resp>(&self, operation: &str, body: &Req) -> Result<Resp, ClientError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, operation);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    fn require_session(&self) -> Result<String, ClientError> {
        self.session_key.clone().ok_or(ClientError::NotConnected)
    }

    // == Connect ==
    /// Obtains a session key and remembers it.
    ///
    /// With `None`, the server identifies the client by its peer IP. Calling
    /// this again for the same address returns the same key with
    /// `already_connected` set.
    pub async fn connect(
        &mut self,
        client_address: Option<&str>,
    ) -> Result<ConnectResponse, ClientError> {
        let req = ConnectRequest {
            client_address: client_address.map(str::to_string),
        };
        let resp: ConnectResponse = self.call("connect", &req).await?;
        if !resp.success {
            return Err(ClientError::ConnectRejected);
        }

        debug!(already_connected = resp.already_connected, "session established");
        self.session_key = Some(resp.session_key.clone());
        Ok(resp)
    }

    // == Set ==
    /// Stores `value` under `key`, expiring at absolute Unix second `ttl` (0 = never).
    pub async fn set(&self, key: &str, value: &[u8], ttl: i64) -> Result<(), ClientError> {
        let req = SetRequest {
            session_key: self.require_session()?,
            key: key.to_string(),
            value: value.to_vec(),
            ttl,
        };
        let resp: SetResponse = self.call("set", &req).await?;

        match resp.status {
            _ if resp.success => Ok(()),
            Status::Unauthorized => Err(CacheError::Unauthorized.into()),
            status => Err(ClientError::Rejected(
                resp.message.unwrap_or_else(|| status.to_string()),
            )),
        }
    }

    // == Get ==
    /// Returns the value under `key`; missing and expired keys are `NotFound`.
    pub async fn get(&self, key: &str) -> Result<Vec<u8>, ClientError> {
        let req = GetRequest {
            session_key: self.require_session()?,
            key: key.to_string(),
        };
        let resp: GetResponse = self.call("get", &req).await?;

        match (resp.status, resp.value) {
            (Status::Found, Some(value)) => Ok(value),
            (Status::Unauthorized, _) => Err(CacheError::Unauthorized.into()),
            _ => Err(CacheError::NotFound(key.to_string()).into()),
        }
    }

    // == Delete ==
    /// Removes `key`, returning whether it was present.
    pub async fn delete(&self, key: &str) -> Result<bool, ClientError> {
        let req = DeleteRequest {
            session_key: self.require_session()?,
            key: key.to_string(),
        };
        let resp: DeleteResponse = self.call("delete", &req).await?;

        match resp.status {
            Status::Unauthorized => Err(CacheError::Unauthorized.into()),
            _ => Ok(resp.found),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{create_router, AppState};

    async fn spawn_server() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = create_router(AppState::default());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = MemoraClient::new("http://localhost:1212/");
        assert_eq!(client.base_url, "http://localhost:1212");
        assert!(client.session_key().is_none());
    }

    #[tokio::test]
    async fn test_operations_require_connect() {
        let client = MemoraClient::new("http://127.0.0.1:9");

        assert!(matches!(client.get("k").await, Err(ClientError::NotConnected)));
        assert!(matches!(client.set("k", b"v", 0).await, Err(ClientError::NotConnected)));
        assert!(matches!(client.delete("k").await, Err(ClientError::NotConnected)));
    }

    #[tokio::test]
    async fn test_connect_remembers_key() {
        let base = spawn_server().await;
        let mut client = MemoraClient::new(base);

        let first = client.connect(Some("10.0.0.5")).await.unwrap();
        assert_eq!(client.session_key(), Some(first.session_key.as_str()));

        let second = client.connect(Some("10.0.0.5")).await.unwrap();
        assert!(second.already_connected);
        assert_eq!(second.session_key, first.session_key);
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let base = spawn_server().await;
        let mut client = MemoraClient::new(base);
        client.connect(Some("10.0.0.5")).await.unwrap();

        let err = client.set("k", b"", 0).await.unwrap_err();
        assert!(matches!(err, ClientError::Rejected(ref msg) if msg == "cannot insert empty value"));

        let err = client.get("missing").await.unwrap_err();
        assert!(matches!(err, ClientError::Cache(CacheError::NotFound(ref key)) if key == "missing"));

        assert!(!client.delete("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_session_is_unauthorized() {
        let base = spawn_server().await;
        let client = MemoraClient::new(base).with_session_key("10.0.0.5-1690000000000000000");

        assert!(matches!(
            client.set("k", b"v", 0).await,
            Err(ClientError::Cache(CacheError::Unauthorized))
        ));
        assert!(matches!(
            client.get("k").await,
            Err(ClientError::Cache(CacheError::Unauthorized))
        ));
        assert!(matches!(
            client.delete("k").await,
            Err(ClientError::Cache(CacheError::Unauthorized))
        ));
    }

    #[tokio::test]
    async fn test_connect_rejected_without_address() {
        // Server started without connect info has no peer fallback
        let base = spawn_server().await;
        let mut client = MemoraClient::new(base);

        assert!(matches!(client.connect(None).await, Err(ClientError::ConnectRejected)));
        assert!(client.session_key().is_none());
    }
}
