//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming request bodies. Field names are
//! camelCase on the wire.

use serde::{Deserialize, Serialize};

use super::encoding::{base64_bytes, null_as_default};

/// Request body for the CONNECT operation (POST /connect)
///
/// `client_address` may be omitted, in which case the peer address of the
/// HTTP connection is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    #[serde(default)]
    pub client_address: Option<String>,
}

/// Request body for the SET operation (POST /set)
///
/// # Fields
/// - `session_key`: Key returned by connect
/// - `key`: The cache key to store the value under
/// - `value`: Base64-encoded bytes; missing or null means empty (rejected)
/// - `ttl`: Absolute expiry in Unix seconds, 0, null or missing = never
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRequest {
    pub session_key: String,
    pub key: String,
    #[serde(default, with = "base64_bytes")]
    pub value: Vec<u8>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ttl: i64,
}

/// Request body for the GET operation (POST /get)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRequest {
    pub session_key: String,
    pub key: String,
}

/// Request body for the DELETE operation (POST /delete)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub session_key: String,
    pub key: String,
}
