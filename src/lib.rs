//! Memora - A small in-memory key-value cache server
//!
//! Clients connect once to obtain a session key, then set, get and delete
//! byte values gated by that key. Entries carry an optional absolute expiry
//! that is checked lazily on read. [`MemoraClient`] speaks the same
//! protocol from the caller's side.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod session;
pub mod tasks;

pub use api::AppState;
pub use client::MemoraClient;
pub use config::Config;
pub use service::CacheService;
pub use tasks::spawn_sweep_task;
