//! Error types for the cache server
//!
//! Provides unified error handling using thiserror. None of these errors
//! reach the transport: the service front renders each one as a status field.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the store and the session gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Value was missing or empty
    #[error("cannot insert empty value")]
    EmptyValue,

    /// Expiry timestamp was negative
    #[error("cannot insert entry with negative ttl: {0}")]
    NegativeTtl(i64),

    /// Key absent, or present but expired
    #[error("key not found: {0}")]
    NotFound(String),

    /// Session key was never issued by Connect
    #[error("client key not found")]
    Unauthorized,
}

impl CacheError {
    /// Returns true for errors raised by input validation before any mutation.
    pub fn is_validation(&self) -> bool {
        matches!(self, CacheError::EmptyValue | CacheError::NegativeTtl(_))
    }
}

// == Client Error Enum ==
/// Errors surfaced by [`crate::client::MemoraClient`].
///
/// Status bodies from the server are mapped onto these; `Transport` covers
/// everything below the status layer (connection, HTTP status, decoding).
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a readable status body
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A data operation was attempted before `connect`
    #[error("client not connected")]
    NotConnected,

    /// The server declined to issue a session key
    #[error("connection failed")]
    ConnectRejected,

    /// The server rejected a write, with its reason
    #[error("set rejected: {0}")]
    Rejected(String),

    /// Not found or unauthorized, as reported by the server
    #[error(transparent)]
    Cache(#[from] CacheError),
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
