//! Request and Response models for the cache server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing request and response bodies.

pub mod encoding;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ConnectRequest, DeleteRequest, GetRequest, SetRequest};
pub use responses::{
    ConnectResponse, DeleteResponse, GetResponse, HealthResponse, SetResponse, Status,
};
