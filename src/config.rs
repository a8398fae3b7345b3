//! Configuration for the rentease server.
//!
//! Supports a YAML file and environment variable overrides.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub simulation: SimulationConfig,
    pub reminders: ReminderConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_workers: 8,
        }
    }
}

/// Storage configuration. Only the session record is persisted here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "rentease.sqlite3".to_string(),
        }
    }
}

/// Fixed pauses standing in for network round-trips.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub login_delay_ms: u64,
    pub payment_delay_ms: u64,
    pub reply_delay_ms: u64,
    pub maintenance_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1000,
            payment_delay_ms: 2000,
            reply_delay_ms: 1500,
            maintenance_delay_ms: 2000,
        }
    }
}

impl SimulationConfig {
    /// No pauses at all. Used by tests.
    pub fn instant() -> Self {
        Self {
            login_delay_ms: 0,
            payment_delay_ms: 0,
            reply_delay_ms: 0,
            maintenance_delay_ms: 0,
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn maintenance_delay(&self) -> Duration {
        Duration::from_millis(self.maintenance_delay_ms)
    }
}

/// Periodic due-date re-check.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Seconds between scheduled re-checks. Zero disables the scheduler.
    pub check_interval_secs: u64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: 60 * 60,
        }
    }
}

impl ReminderConfig {
    pub fn check_interval(&self) -> Option<Duration> {
        (self.check_interval_secs > 0).then(|| Duration::from_secs(self.check_interval_secs))
    }
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("RENTEASE_CONFIG").unwrap_or_else(|_| "rentease.yaml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Socket address string for the listener, e.g. "127.0.0.1:3000".
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("RENTEASE_HOST") {
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("RENTEASE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(workers) = std::env::var("RENTEASE_WORKERS") {
            if let Ok(w) = workers.parse() {
                self.server.max_workers = w;
            }
        }

        if let Ok(path) = std::env::var("RENTEASE_DB") {
            self.storage.path = path;
        }

        if let Ok(secs) = std::env::var("RENTEASE_CHECK_INTERVAL_SECS") {
            if let Ok(s) = secs.parse() {
                self.reminders.check_interval_secs = s;
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
