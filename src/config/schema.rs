//! Configuration schema definitions

use std::sync::Arc;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::auth::{new_maker, Maker, TokenKind};
use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub token: TokenConfig,
}

impl Config {
    /// Check the configuration before serving traffic
    pub fn validate(&self) -> Result<()> {
        self.token.validate()?;
        self.token.build_maker()?;
        Ok(())
    }
}

/// Server configuration for the HTTP API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Token issuing configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Signing scheme: "jwt" or "paseto"
    #[serde(default)]
    pub kind: TokenKind,

    /// Secret for the JWT maker (>= 32 chars) or PASETO key (exactly 32 chars)
    #[serde(default)]
    pub symmetric_key: String,

    #[serde(default = "default_access_token_duration_secs")]
    pub access_token_duration_secs: i64,

    #[serde(default = "default_refresh_token_duration_secs")]
    pub refresh_token_duration_secs: i64,
}

fn default_access_token_duration_secs() -> i64 {
    15 * 60
}

fn default_refresh_token_duration_secs() -> i64 {
    24 * 60 * 60
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            kind: TokenKind::default(),
            symmetric_key: String::new(),
            access_token_duration_secs: default_access_token_duration_secs(),
            refresh_token_duration_secs: default_refresh_token_duration_secs(),
        }
    }
}

// Keep the key out of logs
impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("kind", &self.kind)
            .field("symmetric_key", &"<redacted>")
            .field("access_token_duration_secs", &self.access_token_duration_secs)
            .field("refresh_token_duration_secs", &self.refresh_token_duration_secs)
            .finish()
    }
}

impl TokenConfig {
    pub fn access_token_duration(&self) -> Duration {
        Duration::seconds(self.access_token_duration_secs)
    }

    pub fn refresh_token_duration(&self) -> Duration {
        Duration::seconds(self.refresh_token_duration_secs)
    }

    /// Build the configured token maker
    pub fn build_maker(&self) -> Result<Arc<dyn Maker>> {
        Ok(new_maker(self.kind, &self.symmetric_key)?)
    }

    fn validate(&self) -> Result<()> {
        if self.access_token_duration_secs <= 0 {
            return Err(Error::Config(
                "token.access_token_duration_secs must be positive".to_string(),
            ));
        }
        if self.refresh_token_duration_secs <= 0 {
            return Err(Error::Config(
                "token.refresh_token_duration_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(kind: TokenKind, key: &str) -> Config {
        let mut config = Config::default();
        config.token.kind = kind;
        config.token.symmetric_key = key.to_string();
        config
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.token.kind, TokenKind::Jwt);
        assert_eq!(config.token.access_token_duration(), Duration::minutes(15));
        assert_eq!(config.token.refresh_token_duration(), Duration::hours(24));
    }

    #[test]
    fn test_validate_accepts_good_key() {
        let config = config_with_key(TokenKind::Paseto, "12345678901234567890123456789012");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_key() {
        let config = Config::default();
        assert!(matches!(config.validate(), Err(Error::Token(_))));
    }

    #[test]
    fn test_validate_rejects_non_positive_duration() {
        let mut config = config_with_key(TokenKind::Jwt, "12345678901234567890123456789012");
        config.token.access_token_duration_secs = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = config_with_key(TokenKind::Jwt, "super-secret-key-super-secret-key");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
