//! Token payload

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::TokenError;

/// Claims carried inside every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    id: Uuid,
    username: String,
    issued_at: DateTime<Utc>,
    expired_at: DateTime<Utc>,
}

impl Payload {
    /// Create a payload for `username` that expires `duration` from now.
    ///
    /// A negative duration yields an already-expired payload; only tests
    /// should ever ask for one.
    pub fn new(username: &str, duration: Duration) -> Result<Self, TokenError> {
        let issued_at = Utc::now();
        let expired_at = issued_at.checked_add_signed(duration).ok_or_else(|| {
            TokenError::PayloadConstruction(format!(
                "token duration of {}s is out of range",
                duration.num_seconds()
            ))
        })?;

        Ok(Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            issued_at,
            expired_at,
        })
    }

    /// Unique token ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Principal the token was issued for
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Issued at
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Expiry time
    pub fn expired_at(&self) -> DateTime<Utc> {
        self.expired_at
    }

    /// Check the payload has not expired
    pub fn valid(&self) -> Result<(), TokenError> {
        if Utc::now() > self.expired_at {
            return Err(TokenError::Expired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payload() {
        let payload = Payload::new("alice", Duration::minutes(1)).expect("Failed to build payload");

        assert_eq!(payload.username(), "alice");
        assert!(!payload.id().is_nil());
        assert_eq!(payload.expired_at() - payload.issued_at(), Duration::minutes(1));
        assert!(payload.valid().is_ok());
    }

    #[test]
    fn test_payload_ids_are_unique() {
        let a = Payload::new("alice", Duration::minutes(1)).unwrap();
        let b = Payload::new("alice", Duration::minutes(1)).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_negative_duration_is_expired() {
        let payload = Payload::new("alice", -Duration::minutes(1)).unwrap();
        assert!(matches!(payload.valid(), Err(TokenError::Expired)));
    }

    #[test]
    fn test_overflowing_duration() {
        let result = Payload::new("alice", Duration::MAX);
        assert!(matches!(result, Err(TokenError::PayloadConstruction(_))));
    }

    #[test]
    fn test_json_field_names() {
        let payload = Payload::new("bob", Duration::hours(1)).unwrap();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["username"], "bob");
        assert_eq!(value["id"], payload.id().to_string());
        assert!(value["issued_at"].is_string());
        assert!(value["expired_at"].is_string());

        let decoded: Payload = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, payload);
    }
}
