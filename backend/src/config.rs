//! Configuration for the dashboard service.

use std::path::Path;
use std::time::Duration;

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use dashboard_common::{FirebaseConfig, Theme};
use serde::Deserialize;

/// Main configuration structure for the dashboard service.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub firebase: FirebaseSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Firebase project settings plus the REST endpoints to reach it.
#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseSettings {
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    pub project_id: String,
    #[serde(default)]
    pub storage_bucket: String,
    #[serde(default)]
    pub messaging_sender_id: String,
    #[serde(default)]
    pub app_id: String,
    /// Identity Toolkit base URL (overridable for the auth emulator).
    #[serde(default = "default_identity_base_url")]
    pub identity_base_url: String,
    /// Firestore base URL (overridable for the Firestore emulator).
    #[serde(default = "default_firestore_base_url")]
    pub firestore_base_url: String,
    /// Timeout applied to every provider request.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl FirebaseSettings {
    /// Settings pointing at the production endpoints.
    pub fn from_client_config(client: FirebaseConfig) -> Self {
        Self {
            api_key: client.api_key,
            auth_domain: client.auth_domain,
            project_id: client.project_id,
            storage_bucket: client.storage_bucket,
            messaging_sender_id: client.messaging_sender_id,
            app_id: client.app_id,
            identity_base_url: default_identity_base_url(),
            firestore_base_url: default_firestore_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }

    pub fn client_config(&self) -> FirebaseConfig {
        FirebaseConfig {
            api_key: self.api_key.clone(),
            auth_domain: self.auth_domain.clone(),
            project_id: self.project_id.clone(),
            storage_bucket: self.storage_bucket.clone(),
            messaging_sender_id: self.messaging_sender_id.clone(),
            app_id: self.app_id.clone(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Theme used until the user toggles it.
    #[serde(default)]
    pub default_theme: Theme,
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_identity_base_url() -> String {
    "https://identitytoolkit.googleapis.com".to_string()
}
fn default_firestore_base_url() -> String {
    "https://firestore.googleapis.com".to_string()
}
fn default_request_timeout() -> u64 {
    15
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. Environment variables (DASHBOARD__SECTION__KEY format)
    /// 2. config.toml file (if present)
    /// 3. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            // Set defaults
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("logging.level", default_log_level())?
            // Load from config.toml if exists
            .add_source(File::with_name("config").required(false))
            // Override with environment variables (DASHBOARD__SECTION__KEY format)
            .add_source(
                Environment::with_prefix("DASHBOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load from an explicit file, without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        ConfigLoader::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }
}
