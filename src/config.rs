use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings read from `uuidguard.toml`. Validation itself is not
/// configurable; only the service around it is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UuidGuardConfig {
    pub server: ServerConfig,
    pub rate_limiting: RateLimitingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface the guard service listens on; an unparsable value binds all interfaces
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitingConfig {
    /// Sustained lookups per second allowed from one peer IP. Must be non-zero.
    pub requests_per_second: u32,
    /// Requests a peer may make back to back before the per-second quota applies
    pub burst_size: u32,
    /// Seconds between sweeps that forget peers with no recent requests
    pub cleanup_interval_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset. Rejected
    /// identifiers are logged at `debug`.
    pub filter: String,
}

impl Default for RateLimitingConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 10,
            burst_size: 20,
            cleanup_interval_seconds: 60,
        }
    }
}

impl Default for UuidGuardConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            rate_limiting: RateLimitingConfig::default(),
            logging: LoggingConfig {
                filter: "uuidguard=info,tower_http=warn,hyper=warn".to_string(),
            },
        }
    }
}

impl UuidGuardConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: UuidGuardConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like [`Self::from_file`], but a missing or broken file only logs a
    /// warning and the service starts on defaults.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path.as_ref()) {
            Ok(config) => {
                tracing::info!(path = %path.as_ref().display(), "Loaded configuration");
                config
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    %err,
                    "Failed to load config, using defaults"
                );
                Self::default()
            }
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Writes the defaults to `path` on first start so operators have a file to edit.
    pub fn create_default_config_if_missing<P: AsRef<Path>>(path: P) -> Result<(), Box<dyn std::error::Error>> {
        if !path.as_ref().exists() {
            Self::default().save_to_file(&path)?;
            tracing::info!(path = %path.as_ref().display(), "Created default configuration");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_default_config() {
        let config = UuidGuardConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.rate_limiting.requests_per_second, 10);
        assert_eq!(config.rate_limiting.burst_size, 20);
        assert_eq!(config.rate_limiting.cleanup_interval_seconds, 60);
        assert!(config.logging.filter.starts_with("uuidguard=info"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        let mut original = UuidGuardConfig::default();
        original.server.port = 8081;
        original.rate_limiting.burst_size = 3;
        original.save_to_file(config_path).unwrap();

        let loaded = UuidGuardConfig::from_file(config_path).unwrap();
        assert_eq!(loaded.server.host, original.server.host);
        assert_eq!(loaded.server.port, 8081);
        assert_eq!(loaded.rate_limiting.burst_size, 3);
        assert_eq!(loaded.logging.filter, original.logging.filter);
    }

    #[test]
    fn test_from_file_or_default_with_missing_file() {
        let config = UuidGuardConfig::from_file_or_default("nonexistent-uuidguard.toml");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "server = 12").unwrap();
        assert!(UuidGuardConfig::from_file(temp_file.path()).is_err());
    }

    #[test]
    fn test_create_default_config_if_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("uuidguard.toml");

        UuidGuardConfig::create_default_config_if_missing(&path).unwrap();
        assert!(path.exists());

        let mut edited = UuidGuardConfig::from_file(&path).unwrap();
        edited.server.port = 9999;
        edited.save_to_file(&path).unwrap();

        // An existing file is left alone
        UuidGuardConfig::create_default_config_if_missing(&path).unwrap();
        assert_eq!(UuidGuardConfig::from_file(&path).unwrap().server.port, 9999);
    }
}
