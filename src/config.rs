//! Configuration Module
//!
//! Loads server configuration from a YAML file, then applies environment
//! variable overrides for the upstream API keys.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Config file used when `CONFIG_PATH` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "/app/config.yaml";

/// Overrides `ninjas.def_api_key`.
pub const API_KEY_ENV: &str = "NINJAS_API_KEY";

/// Overrides `ninjas.rand_word_api_key`.
pub const RAND_WORD_API_KEY_ENV: &str = "NINJAS_RAND_WORD_API_KEY";

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(alias = "redis")]
    pub cache: CacheConfig,
    pub ninjas: NinjasConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: ListenPort,
}

/// `server.port` as either a number or a Go-style listen address.
///
/// `":8080"` binds `server.host` on that port; `"127.0.0.1:8080"` is used
/// as given and overrides `server.host`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListenPort {
    Number(u16),
    Address(String),
}

/// Which cache adapter backs the lookup path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    #[default]
    Redis,
    Memory,
}

/// Cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,
    #[serde(default = "default_cache_host")]
    pub host: String,
    #[serde(default = "default_cache_port")]
    pub port: u16,
    /// Entry TTL in seconds
    pub cache_time: u64,
    /// Sweep interval in seconds for the memory backend
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval: u64,
}

/// Upstream API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NinjasConfig {
    pub definition_url: String,
    #[serde(default)]
    pub def_api_key: String,
    pub word_generator_url: String,
    /// Falls back to `def_api_key` when absent
    #[serde(default)]
    pub rand_word_api_key: Option<String>,
    /// Accept invalid TLS certificates from the upstream APIs.
    ///
    /// Disables certificate and hostname verification for every upstream
    /// call. Only meant for environments with intercepting proxies.
    #[serde(default)]
    pub insecure_skip_verify: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> ListenPort {
    ListenPort::Number(8080)
}

fn default_cache_host() -> String {
    "localhost".to_string()
}

fn default_cache_port() -> u16 {
    6379
}

fn default_cleanup_interval() -> u64 {
    1
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Loads the file named by `CONFIG_PATH` (or the default path) and
    /// applies environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    /// Loads and validates the config file at `path`.
    ///
    /// # Environment Variables
    /// - `NINJAS_API_KEY` - replaces `ninjas.def_api_key` when set
    /// - `NINJAS_RAND_WORD_API_KEY` - replaces `ninjas.rand_word_api_key` when set
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let mut config = Self::from_yaml(&raw)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parses YAML without applying overrides or validation.
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(key) = non_empty_env(API_KEY_ENV) {
            self.ninjas.def_api_key = key;
        }
        if let Some(key) = non_empty_env(RAND_WORD_API_KEY_ENV) {
            self.ninjas.rand_word_api_key = Some(key);
        }
    }

    /// Checks the invariants the lookup path relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let ListenPort::Address(addr) = &self.server.port {
            let port = addr.rsplit_once(':').map(|(_, port)| port);
            if port.and_then(|p| p.parse::<u16>().ok()).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "server.port must be a number, \":PORT\" or \"HOST:PORT\", got \"{}\"",
                    addr
                )));
            }
        }
        if self.cache.cache_time == 0 {
            return Err(ConfigError::Invalid(
                "cache.cache_time must be greater than zero".to_string(),
            ));
        }
        if self.ninjas.definition_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "ninjas.definition_url is required".to_string(),
            ));
        }
        if self.ninjas.word_generator_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "ninjas.word_generator_url is required".to_string(),
            ));
        }
        if self.ninjas.def_api_key.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "ninjas.def_api_key is required (or set {})",
                API_KEY_ENV
            )));
        }
        Ok(())
    }

    /// Address the HTTP server binds to.
    pub fn listen_addr(&self) -> String {
        match &self.server.port {
            ListenPort::Number(port) => format!("{}:{}", self.server.host, port),
            ListenPort::Address(addr) if addr.starts_with(':') => {
                format!("{}{}", self.server.host, addr)
            }
            ListenPort::Address(addr) => addr.clone(),
        }
    }

    /// Connection URL for the Redis backend.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}", self.cache.host, self.cache.port)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.cache_time)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.ninjas.timeout_secs)
    }
}

impl NinjasConfig {
    /// Key sent to the word generator.
    pub fn word_generator_api_key(&self) -> &str {
        match self.rand_word_api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => &self.def_api_key,
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_CONFIG: &str = r#"
server:
  host: 127.0.0.1
  port: 9090
cache:
  backend: memory
  host: cache.local
  port: 6380
  cache_time: 120
  cleanup_interval: 5
ninjas:
  definition_url: https://api.example.com/v1/dictionary
  def_api_key: file-key
  word_generator_url: https://api.example.com/v1/randomword
  rand_word_api_key: rand-key
  insecure_skip_verify: true
  timeout_secs: 3
"#;

    const LEGACY_CONFIG: &str = r#"
server:
  port: ":8080"
redis:
  host: redis
  port: 6379
  cache_time: 3600
ninjas:
  definition_url: https://api.example.com/v1/dictionary
  def_api_key: file-key
  word_generator_url: https://api.example.com/v1/randomword
"#;

    #[test]
    fn test_config_full_yaml() {
        let config = Config::from_yaml(FULL_CONFIG).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:9090");
        assert_eq!(config.cache.backend, CacheBackend::Memory);
        assert_eq!(config.redis_url(), "redis://cache.local:6380");
        assert_eq!(config.cache_ttl(), Duration::from_secs(120));
        assert_eq!(config.cache.cleanup_interval, 5);
        assert!(config.ninjas.insecure_skip_verify);
        assert_eq!(config.upstream_timeout(), Duration::from_secs(3));
        assert_eq!(config.ninjas.word_generator_api_key(), "rand-key");
    }

    #[test]
    fn test_config_legacy_redis_section_and_defaults() {
        let config = Config::from_yaml(LEGACY_CONFIG).unwrap();
        assert_eq!(config.cache.backend, CacheBackend::Redis);
        assert_eq!(config.redis_url(), "redis://redis:6379");
        assert_eq!(config.server.port, ListenPort::Address(":8080".to_string()));
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert!(config.validate().is_ok());
        assert_eq!(config.cache.cleanup_interval, 1);
        assert!(!config.ninjas.insecure_skip_verify);
        assert_eq!(config.ninjas.timeout_secs, 10);
        // Falls back to the definition key
        assert_eq!(config.ninjas.word_generator_api_key(), "file-key");
    }

    #[test]
    fn test_server_defaults_without_section() {
        let yaml = LEGACY_CONFIG.replace("server:\n  port: \":8080\"\n", "");
        let config = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.server.port, ListenPort::Number(8080));
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_port_as_host_and_port() {
        let mut config = Config::from_yaml(LEGACY_CONFIG).unwrap();
        config.server.port = ListenPort::Address("127.0.0.1:9000".to_string());
        assert!(config.validate().is_ok());
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_validate_rejects_bad_port_string() {
        let mut config = Config::from_yaml(LEGACY_CONFIG).unwrap();
        for bad in ["8080x", ":http", "localhost:"] {
            config.server.port = ListenPort::Address(bad.to_string());
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn test_validate_rejects_zero_cache_time() {
        let mut config = Config::from_yaml(LEGACY_CONFIG).unwrap();
        config.cache.cache_time = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_missing_api_key() {
        let mut config = Config::from_yaml(LEGACY_CONFIG).unwrap();
        config.ninjas.def_api_key = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = Config::from_yaml("server: [not, a, map");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/vocab/config.yaml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    // Only test touching the override variables, so no cross-test races.
    #[test]
    fn test_load_applies_env_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LEGACY_CONFIG.as_bytes()).unwrap();

        env::set_var(API_KEY_ENV, "env-key");
        env::set_var(RAND_WORD_API_KEY_ENV, "");
        let config = Config::load(file.path()).unwrap();
        env::remove_var(API_KEY_ENV);
        env::remove_var(RAND_WORD_API_KEY_ENV);

        assert_eq!(config.ninjas.def_api_key, "env-key");
        // Empty override is ignored
        assert_eq!(config.ninjas.rand_word_api_key, None);
        assert_eq!(config.ninjas.word_generator_api_key(), "env-key");
    }
}
