//! Application configuration
//!
//! Loads configuration from a TOML file with environment variable fallback.
//! The configuration is stored in a global `OnceLock` and read through
//! `get_config()` after `init_config()` has run once at startup.

use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store backend: "memory" or "rest"
    #[serde(default = "default_store_backend")]
    pub backend: String,
    /// Base URL of the object store API (rest backend)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Application id, part of the API route (rest backend)
    #[serde(default)]
    pub app_id: String,
    /// Bucket holding this user's objects
    #[serde(default = "default_bucket")]
    pub bucket: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path; empty or absent means stderr
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    /// "plain" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_store_backend() -> String {
    "memory".to_string()
}

fn default_endpoint() -> String {
    "https://api.kii.com/api".to_string()
}

fn default_bucket() -> String {
    "myBucket".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_backups() -> u32 {
    7
}

fn default_log_format() -> String {
    "plain".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            backend: default_store_backend(),
            endpoint: default_endpoint(),
            app_id: String::new(),
            bucket: default_bucket(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            file: None,
            enable_rotation: false,
            max_backups: default_max_backups(),
            format: default_log_format(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file with environment variable fallback
    pub fn load() -> Self {
        let mut config = Self::load_from_file();
        config.override_with_env();
        config
    }

    fn load_from_file() -> Self {
        let config_paths = ["config.toml", "bucketlist.toml", "config/config.toml"];

        for path in &config_paths {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<AppConfig>(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            warn!("Failed to parse config file {}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file {}: {}", path, e);
                    }
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    /// Override configuration with environment variables
    fn override_with_env(&mut self) {
        if let Ok(backend) = env::var("STORE_BACKEND") {
            self.store.backend = backend;
        }
        if let Ok(endpoint) = env::var("STORE_ENDPOINT") {
            self.store.endpoint = endpoint;
        }
        if let Ok(app_id) = env::var("STORE_APP_ID") {
            self.store.app_id = app_id;
        }
        if let Ok(bucket) = env::var("STORE_BUCKET") {
            self.store.bucket = bucket;
        }

        if let Ok(username) = env::var("AUTH_USERNAME") {
            self.auth.username = username;
        }
        if let Ok(password) = env::var("AUTH_PASSWORD") {
            self.auth.password = password;
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(file) = env::var("LOG_FILE") {
            self.logging.file = Some(file);
        }
    }
}

/// Initialize the global configuration once at startup
pub fn init_config() {
    CONFIG.get_or_init(AppConfig::load);
}

/// Get the global configuration instance
///
/// Panics if `init_config()` has not been called.
pub fn get_config() -> &'static AppConfig {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.store.backend, "memory");
        assert_eq!(config.store.bucket, "myBucket");
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
[store]
backend = "rest"
app_id = "abcd1234"

[auth]
username = "alice"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store.backend, "rest");
        assert_eq!(config.store.app_id, "abcd1234");
        // Unspecified fields fall back to defaults
        assert_eq!(config.store.bucket, "myBucket");
        assert_eq!(config.auth.username, "alice");
        assert_eq!(config.logging.max_backups, 7);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.store.backend, "memory");
        assert_eq!(config.logging.format, "plain");
    }
}
