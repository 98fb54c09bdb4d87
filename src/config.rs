//! Application configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;
use url::Url;

use crate::error::ServerError;
use crate::types::VersionResponse;

/// Version reported when no `APP_VERSION` binding is set.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Name reported when no `APP_NAME` binding is set.
pub const DEFAULT_NAME: &str = "server";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP listen address.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Optional port for the Prometheus exporter.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    // === Bindings ===
    /// Version reported by `/version`.
    #[serde(default)]
    pub app_version: Option<String>,

    /// Name reported by `/version`.
    #[serde(default)]
    pub app_name: Option<String>,

    // === Client ===
    /// Base URL the client calls.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8787
}

fn default_server_url() -> String {
    "http://localhost:8787".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            metrics_port: None,
            app_version: None,
            app_name: None,
            server_url: default_server_url(),
            rust_log: default_log_level(),
            log_json: false,
            verbose: false,
        }
    }
}

/// Resolved `/version` bindings, fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: String,
    pub name: String,
}

impl VersionInfo {
    pub fn new(version: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            name: name.into(),
        }
    }

    /// The response body served by `/version`.
    pub fn to_response(&self) -> VersionResponse {
        VersionResponse {
            version: self.version.clone(),
            name: self.name.clone(),
        }
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION, DEFAULT_NAME)
    }
}

fn binding_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(default)
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Load configuration from explicit key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        envy::from_iter(pairs.into_iter().map(|(k, v)| (k.into(), v.into())))
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.port == 0 {
            return Err(ServerError::InvalidConfig("PORT must be non-zero".to_string()));
        }

        if self.metrics_port == Some(self.port) {
            return Err(ServerError::InvalidConfig(
                "METRICS_PORT must differ from PORT".to_string(),
            ));
        }

        match Url::parse(&self.server_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(ServerError::InvalidConfig(format!(
                    "SERVER_URL must be an absolute http(s) URL, got {:?}",
                    self.server_url
                )))
            }
        }

        Ok(())
    }

    /// Socket address the server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Bindings for `/version`. Unset or blank bindings fall back to the defaults.
    pub fn version_info(&self) -> VersionInfo {
        VersionInfo::new(
            binding_or(self.app_version.as_deref(), DEFAULT_VERSION),
            binding_or(self.app_name.as_deref(), DEFAULT_NAME),
        )
    }
}
