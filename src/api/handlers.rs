//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint. Each handler
//! unpacks its body, calls the service and answers 200 with the result.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, State},
    Json,
};

use crate::cache::CacheStore;
use crate::config::Config;
use crate::models::{
    ConnectRequest, ConnectResponse, DeleteRequest, DeleteResponse, GetRequest, GetResponse,
    HealthResponse, SetRequest, SetResponse,
};
use crate::service::CacheService;
use crate::session::SessionRegistry;

/// Application state shared across all handlers.
#[derive(Clone, Default)]
pub struct AppState {
    pub service: CacheService,
}

impl AppState {
    /// Creates a new AppState around an existing service.
    pub fn new(service: CacheService) -> Self {
        Self { service }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Initializes the store with the configured shard count.
    pub fn from_config(config: &Config) -> Self {
        let store = Arc::new(CacheStore::with_shards(config.store_shards));
        Self::new(CacheService::new(store, Arc::new(SessionRegistry::new())))
    }
}

/// Handler for POST /connect
///
/// Uses the address in the body if given, else the peer IP of the connection.
/// The body is optional; a missing or unreadable body counts as no address.
pub async fn connect_handler(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    body: Option<Json<ConnectRequest>>,
) -> Json<ConnectResponse> {
    let address = body
        .and_then(|Json(req)| req.client_address)
        .filter(|address| !address.is_empty())
        .or_else(|| peer.map(|ConnectInfo(addr)| addr.ip().to_string()))
        .unwrap_or_default();

    Json(state.service.connect(&address))
}

/// Handler for POST /set
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Json<SetResponse> {
    Json(
        state
            .service
            .set(&req.session_key, &req.key, req.value, req.ttl),
    )
}

/// Handler for POST /get
pub async fn get_handler(
    State(state): State<AppState>,
    Json(req): Json<GetRequest>,
) -> Json<GetResponse> {
    Json(state.service.get(&req.session_key, &req.key))
}

/// Handler for POST /delete
pub async fn delete_handler(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> Json<DeleteResponse> {
    Json(state.service.delete(&req.session_key, &req.key))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
