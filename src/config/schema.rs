//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Cross-origin policy advertised on every response.
    pub cors: CorsConfig,

    /// Upstream dataset endpoint used by the dataset proxy.
    pub upstream: UpstreamConfig,

    /// Authorization stage settings.
    pub auth: AuthConfig,

    /// Persistent storage connectivity.
    pub storage: StorageConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Static CORS policy. One policy applies to every path.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// The single origin advertised in `Access-Control-Allow-Origin`.
    pub allowed_origin: String,

    /// Methods advertised in `Access-Control-Allow-Methods`.
    pub allowed_methods: Vec<String>,

    /// Headers advertised in `Access-Control-Allow-Headers`.
    pub allowed_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "https://wad2-proj.vercel.app".to_string(),
            allowed_methods: vec!["GET".to_string(), "POST".to_string()],
            allowed_headers: vec!["Content-Type".to_string()],
        }
    }
}

/// Upstream dataset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the datastore search endpoint.
    pub base_url: String,

    /// Dataset resource identifier sent as `resource_id`.
    pub dataset_id: String,

    /// Page size sent as `limit`.
    pub limit: u32,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://data.gov.sg/api/action/datastore_search".to_string(),
            dataset_id: "d_688b934f82c1059ed0a6993d2a829089".to_string(),
            limit: 500,
        }
    }
}

/// Authorization stage configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// Enable bearer-token authorization. Disabled by default.
    pub enabled: bool,

    /// Token expected in `Authorization: Bearer <token>`.
    pub bearer_token: String,
}

/// Storage connectivity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Connection string (`mongodb://` or `mongodb+srv://`).
    ///
    /// Environment variable: `MONGO_URI`
    pub connection_string: Option<String>,

    /// Timeout for the initial connection attempt in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
            connect_timeout_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines instead of the human-readable format.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.cors.allowed_methods, vec!["GET", "POST"]);
        assert_eq!(config.cors.allowed_headers, vec!["Content-Type"]);
        assert_eq!(config.upstream.limit, 500);
        assert!(!config.auth.enabled);
        assert!(config.storage.connection_string.is_none());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [cors]
            allowed_origin = "http://localhost:5173"

            [upstream]
            limit = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.cors.allowed_origin, "http://localhost:5173");
        assert_eq!(config.cors.allowed_methods, vec!["GET", "POST"]);
        assert_eq!(config.upstream.limit, 50);
        assert_eq!(config.upstream.dataset_id, "d_688b934f82c1059ed0a6993d2a829089");
    }
}
