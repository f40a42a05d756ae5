//! Session Module
//!
//! Tracks which client addresses have connected and the session key issued
//! to each of them.

mod registry;

pub use registry::{ConnectOutcome, SessionRegistry};
