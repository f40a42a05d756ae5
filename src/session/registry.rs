//! Session Registry
//!
//! Issues one session key per client address and answers whether a key was
//! issued.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

/// Result of a connect call.
///
/// Both variants are successes; `AlreadyConnected` marks that the address had
/// a live session and the existing key was returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// A new session key was minted for the address
    Connected(String),
    /// The address already held this session key
    AlreadyConnected(String),
}

impl ConnectOutcome {
    /// Returns the session key regardless of variant.
    pub fn session_key(&self) -> &str {
        match self {
            ConnectOutcome::Connected(key) | ConnectOutcome::AlreadyConnected(key) => key,
        }
    }

    pub fn is_already_connected(&self) -> bool {
        matches!(self, ConnectOutcome::AlreadyConnected(_))
    }

    pub fn into_session_key(self) -> String {
        match self {
            ConnectOutcome::Connected(key) | ConnectOutcome::AlreadyConnected(key) => key,
        }
    }
}

#[derive(Debug, Default)]
struct Sessions {
    /// Client address -> issued key
    by_address: HashMap<String, String>,
    /// Reverse index for O(1) validation
    keys: HashSet<String>,
}

// == Session Registry ==
/// Map of client address to issued session key, guarded by its own lock.
///
/// Session keys are `<address>-<issuance nanoseconds>`. They track one session
/// per address and are not secrets: anyone who learns a key can use it.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    inner: Mutex<Sessions>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // == Connect ==
    /// Returns the session key for `client_address`, minting one on first use.
    ///
    /// Lookup and insert happen under one lock acquisition, so concurrent
    /// connects from the same address all observe a single key.
    pub fn connect(&self, client_address: &str) -> ConnectOutcome {
        let mut sessions = self.inner.lock();

        if let Some(existing) = sessions.by_address.get(client_address) {
            return ConnectOutcome::AlreadyConnected(existing.clone());
        }

        let key = generate_session_key(client_address);
        sessions.keys.insert(key.clone());
        sessions
            .by_address
            .insert(client_address.to_string(), key.clone());
        ConnectOutcome::Connected(key)
    }

    // == Is Valid ==
    /// Returns true iff `session_key` was issued by `connect`.
    pub fn is_valid(&self, session_key: &str) -> bool {
        self.inner.lock().keys.contains(session_key)
    }

    /// Returns the number of connected addresses.
    pub fn len(&self) -> usize {
        self.inner.lock().by_address.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn generate_session_key(client_address: &str) -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{}-{}", client_address, nanos)
}
