//! Listener, environment and logging settings.

use std::net::SocketAddr;

use serde::Deserialize;

use super::error::ValidationError;

/// Where and how the HTTP API listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Comma-separated allow-list. Unset or empty means any origin.
    pub cors_origins: Option<String>,
}

/// Deployment stage. Production tightens endpoint checks and switches
/// logs to JSON.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,landmark_guide=debug,tower_http=info".to_string(),
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| ValidationError::InvalidSocketAddr(raw))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = &self.cors_origins else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_loopback() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.environment, Environment::Development);
        assert!(!config.is_production());
    }

    #[test]
    fn unparseable_host_is_rejected() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSocketAddr(addr)) if addr == "not a host:8080"
        ));
    }

    #[test]
    fn port_zero_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPort)));
    }

    #[test]
    fn cors_list_skips_blank_entries() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:8081, exp://192.168.1.5:8081,".to_string()),
            ..ServerConfig::default()
        };
        assert_eq!(
            config.cors_origins_list(),
            vec!["http://localhost:8081", "exp://192.168.1.5:8081"]
        );
    }

    #[test]
    fn unset_cors_is_empty() {
        assert!(ServerConfig::default().cors_origins_list().is_empty());
    }
}
