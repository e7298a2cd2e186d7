//! Server configuration.

use crate::history::DEFAULT_HISTORY_CAPACITY;
use std::net::IpAddr;

/// Number of entries returned by `GET /api/history`.
pub const DEFAULT_HISTORY_VIEW_LIMIT: usize = 50;

/// Configuration for the HTTP API.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host IP address to bind to
    pub host: IpAddr,
    /// Maximum number of history entries kept in memory
    pub history_capacity: usize,
    /// Maximum number of history entries returned per request
    pub history_view_limit: usize,
    /// Allowed CORS origin for `/api/*`; any origin when `None`
    pub cors_origin: Option<String>,
    /// Maximum request body size in KiB
    pub max_body_size_kb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: [127, 0, 0, 1].into(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            history_view_limit: DEFAULT_HISTORY_VIEW_LIMIT,
            cors_origin: None,
            max_body_size_kb: 64,
        }
    }
}

impl ServerConfig {
    /// Get maximum payload size in bytes
    pub fn max_payload_size(&self) -> usize {
        self.max_body_size_kb * 1024
    }
}
