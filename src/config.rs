//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Number of lock shards in the store (1 = single coarse lock)
    pub store_shards: usize,
    /// Expiry sweep interval in seconds, 0 disables the sweep
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 1212)
    /// - `STORE_SHARDS` - Store lock shards (default: 16, minimum 1)
    /// - `SWEEP_INTERVAL` - Expired entry sweep frequency in seconds (default: 60, 0 = off)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            store_shards: parse_var("STORE_SHARDS")
                .unwrap_or(defaults.store_shards)
                .max(1),
            sweep_interval: parse_var("SWEEP_INTERVAL").unwrap_or(defaults.sweep_interval),
        }
    }

    /// Returns true if the background expiry sweep should run.
    pub fn sweep_enabled(&self) -> bool {
        self.sweep_interval > 0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 1212,
            store_shards: 16,
            sweep_interval: 60,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
