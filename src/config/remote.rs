//! Remote AI endpoint configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Cloud function endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Landmark identification function
    #[serde(default = "default_vision_url")]
    pub vision_url: String,

    /// Landmark chat function
    #[serde(default = "default_chat_url")]
    pub chat_url: String,

    /// Optional shared secret sent as `x-api-key`
    pub api_key: Option<Secret<String>>,

    /// Vision request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Chat request timeout in seconds
    #[serde(default = "default_timeout")]
    pub chat_timeout_secs: u64,
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn chat_timeout(&self) -> Duration {
        Duration::from_secs(self.chat_timeout_secs)
    }

    /// The API key, if one is configured and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.is_empty())
    }

    /// Validate endpoint configuration
    ///
    /// Production endpoints must use HTTPS.
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        for url in [&self.vision_url, &self.chat_url] {
            let https = url.starts_with("https://");
            if !https && !url.starts_with("http://") {
                return Err(ValidationError::InvalidEndpointUrl(url.clone()));
            }
            if production && !https {
                return Err(ValidationError::EndpointMustBeHttps);
            }
        }
        for secs in [self.timeout_secs, self.chat_timeout_secs] {
            if secs == 0 || secs > 300 {
                return Err(ValidationError::InvalidTimeout);
            }
        }
        Ok(())
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            vision_url: default_vision_url(),
            chat_url: default_chat_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            chat_timeout_secs: default_timeout(),
        }
    }
}

fn default_vision_url() -> String {
    "http://127.0.0.1:5001/landmark-guide/us-central1/identifyLandmark".to_string()
}

fn default_chat_url() -> String {
    "http://127.0.0.1:5001/landmark-guide/us-central1/chatAboutLandmark".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid_outside_production() {
        let config = RemoteConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate(false).is_ok());
    }

    #[test]
    fn test_production_requires_https() {
        let config = RemoteConfig::default();
        assert!(matches!(
            config.validate(true),
            Err(ValidationError::EndpointMustBeHttps)
        ));

        let config = RemoteConfig {
            vision_url: "https://functions.example.com/identify".to_string(),
            chat_url: "https://functions.example.com/chat".to_string(),
            ..Default::default()
        };
        assert!(config.validate(true).is_ok());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = RemoteConfig {
            vision_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(false),
            Err(ValidationError::InvalidEndpointUrl(_))
        ));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = RemoteConfig {
            chat_timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(false), Err(ValidationError::InvalidTimeout)));
    }

    #[test]
    fn test_empty_api_key_is_none() {
        let config = RemoteConfig {
            api_key: Some(Secret::new(String::new())),
            ..Default::default()
        };
        assert_eq!(config.api_key(), None);
    }
}
