//! Service Module
//!
//! The session-gated front over the store. Transport layers call into
//! [`CacheService`] and serialize whatever it returns.

mod dispatcher;

pub use dispatcher::CacheService;
