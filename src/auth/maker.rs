//! Token maker contract

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::{JwtMaker, PasetoMaker, Payload};

/// Errors surfaced by token makers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid key size: {0}")]
    InvalidKeySize(String),

    #[error("failed to construct token payload: {0}")]
    PayloadConstruction(String),

    #[error("failed to sign token: {0}")]
    Signing(String),

    #[error("token has expired")]
    Expired,

    #[error("token is invalid")]
    Invalid,
}

impl TokenError {
    /// Whether the error is the client's fault (expired or bad token)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, TokenError::Expired | TokenError::Invalid)
    }
}

/// Creates and verifies tokens for one signing scheme.
///
/// Implementations hold only immutable key material and can be shared
/// freely across requests.
pub trait Maker: Send + Sync {
    /// Create a token for `username` valid for `duration`
    fn create_token(&self, username: &str, duration: Duration)
        -> Result<(String, Payload), TokenError>;

    /// Check the token and return its payload if it is authentic and unexpired
    fn verify_token(&self, token: &str) -> Result<Payload, TokenError>;
}

/// Supported token schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    #[default]
    Jwt,
    Paseto,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Jwt => write!(f, "jwt"),
            TokenKind::Paseto => write!(f, "paseto"),
        }
    }
}

impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jwt" => Ok(TokenKind::Jwt),
            "paseto" => Ok(TokenKind::Paseto),
            other => Err(format!("unknown token kind '{}'", other)),
        }
    }
}

/// Build the maker for `kind` from the configured key
pub fn new_maker(kind: TokenKind, key: &str) -> Result<Arc<dyn Maker>, TokenError> {
    let maker: Arc<dyn Maker> = match kind {
        TokenKind::Jwt => Arc::new(JwtMaker::new(key)?),
        TokenKind::Paseto => Arc::new(PasetoMaker::new(key)?),
    };
    Ok(maker)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_token_kind_parse() {
        assert_eq!("jwt".parse::<TokenKind>(), Ok(TokenKind::Jwt));
        assert_eq!("PASETO".parse::<TokenKind>(), Ok(TokenKind::Paseto));
        assert!("saml".parse::<TokenKind>().is_err());
    }

    #[test]
    fn test_token_kind_display() {
        assert_eq!(TokenKind::Jwt.to_string(), "jwt");
        assert_eq!(TokenKind::Paseto.to_string(), "paseto");
    }

    #[test]
    fn test_new_maker_for_each_kind() {
        for kind in [TokenKind::Jwt, TokenKind::Paseto] {
            let maker = new_maker(kind, KEY).expect("Failed to build maker");
            let (token, payload) = maker.create_token("alice", Duration::minutes(1)).unwrap();
            assert_eq!(maker.verify_token(&token).unwrap(), payload);
        }
    }

    #[test]
    fn test_new_maker_rejects_short_key() {
        for kind in [TokenKind::Jwt, TokenKind::Paseto] {
            let result = new_maker(kind, "short");
            assert!(matches!(result, Err(TokenError::InvalidKeySize(_))));
        }
    }

    #[test]
    fn test_error_classification() {
        assert!(TokenError::Expired.is_unauthorized());
        assert!(TokenError::Invalid.is_unauthorized());
        assert!(!TokenError::Signing("boom".into()).is_unauthorized());
        assert!(!TokenError::InvalidKeySize("short".into()).is_unauthorized());
    }
}
