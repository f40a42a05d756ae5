//! Cache Service
//!
//! Gates every data operation on a session key, then delegates to the store
//! and renders the result as a response body.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::CacheStore;
use crate::models::{ConnectResponse, DeleteResponse, GetResponse, SetResponse};
use crate::session::{ConnectOutcome, SessionRegistry};

// == Cache Service ==
/// Stateless dispatcher over a shared store and session registry.
///
/// Cloning is cheap; clones share the same store and registry. No method
/// returns an error: authorization, validation and lookup failures are all
/// reported through the response status.
#[derive(Debug, Clone)]
pub struct CacheService {
    store: Arc<CacheStore>,
    sessions: Arc<SessionRegistry>,
}

impl CacheService {
    pub fn new(store: Arc<CacheStore>, sessions: Arc<SessionRegistry>) -> Self {
        Self { store, sessions }
    }

    /// Returns the shared store, e.g. for the expiry sweep.
    pub fn store(&self) -> &Arc<CacheStore> {
        &self.store
    }

    pub fn sessions(&self) -> &Arc<SessionRegistry> {
        &self.sessions
    }

    fn authorize(&self, session_key: &str) -> bool {
        let valid = self.sessions.is_valid(session_key);
        if !valid {
            warn!(session_key, "rejected unknown session key");
        }
        valid
    }

    // == Connect ==
    /// Issues or returns the session key for `client_address`.
    pub fn connect(&self, client_address: &str) -> ConnectResponse {
        if client_address.is_empty() {
            warn!("connect without client address");
            return ConnectResponse::rejected();
        }

        let outcome = self.sessions.connect(client_address);
        match &outcome {
            ConnectOutcome::Connected(_) => info!(client_address, "client connected"),
            ConnectOutcome::AlreadyConnected(_) => {
                debug!(client_address, "client already connected")
            }
        }

        let already_connected = outcome.is_already_connected();
        ConnectResponse {
            success: true,
            session_key: outcome.into_session_key(),
            already_connected,
        }
    }

    // == Set ==
    /// Stores `value` under `key` with absolute expiry `ttl` (0 = never).
    pub fn set(&self, session_key: &str, key: &str, value: Vec<u8>, ttl: i64) -> SetResponse {
        if !self.authorize(session_key) {
            return SetResponse::unauthorized();
        }

        match self.store.set(key, value, ttl) {
            Ok(()) => {
                debug!(key, ttl, "set");
                SetResponse::stored()
            }
            Err(err) if err.is_validation() => {
                debug!(key, error = %err, "set rejected");
                SetResponse::invalid(err.to_string())
            }
            Err(err) => {
                warn!(key, error = %err, "set failed");
                SetResponse::invalid(err.to_string())
            }
        }
    }

    // == Get ==
    pub fn get(&self, session_key: &str, key: &str) -> GetResponse {
        if !self.authorize(session_key) {
            return GetResponse::unauthorized();
        }

        match self.store.get(key) {
            Ok(value) => {
                debug!(key, "get hit");
                GetResponse::found(value)
            }
            Err(_) => {
                debug!(key, "get miss");
                GetResponse::not_found()
            }
        }
    }

    // == Delete ==
    pub fn delete(&self, session_key: &str, key: &str) -> DeleteResponse {
        if !self.authorize(session_key) {
            return DeleteResponse::unauthorized();
        }

        if self.store.delete(key) {
            debug!(key, "deleted");
            DeleteResponse::deleted()
        } else {
            debug!(key, "delete miss");
            DeleteResponse::not_found()
        }
    }
}

impl Default for CacheService {
    fn default() -> Self {
        Self::new(
            Arc::new(CacheStore::new()),
            Arc::new(SessionRegistry::new()),
        )
    }
}
