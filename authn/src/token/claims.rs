use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a session token.
///
/// Deliberately minimal: the subject plus issuance and expiry timestamps.
/// Anything else a caller needs about the session owner is looked up through
/// the subject, so stale data never rides along in the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (identity identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Create claims for a subject, expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Identity identifier the token asserts
    /// * `ttl` - Time until the claims expire
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Check if the claims are expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = SessionClaims::for_subject("user123", Duration::hours(24));

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60); // 24 hours
    }

    #[test]
    fn test_is_expired() {
        let mut claims = SessionClaims::for_subject("user123", Duration::hours(1));
        claims.iat = 900;
        claims.exp = 1000;

        assert!(!claims.is_expired(999)); // Not expired
        assert!(!claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001)); // Expired
    }

    #[test]
    fn test_wire_field_names() {
        let claims = SessionClaims {
            sub: "user123".to_string(),
            iat: 900,
            exp: 1000,
        };

        let json = serde_json::to_value(&claims).expect("Failed to serialize claims");
        assert_eq!(
            json,
            serde_json::json!({ "sub": "user123", "iat": 900, "exp": 1000 })
        );
    }
}
