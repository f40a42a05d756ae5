//! API Module
//!
//! HTTP handlers and routing for the cache server.
//!
//! # Endpoints
//! - `POST /connect` - Obtain a session key
//! - `POST /set` - Store a value
//! - `POST /get` - Retrieve a value
//! - `POST /delete` - Delete a key
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
