use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::identity::errors::EmailError;
use crate::identity::errors::IdentityIdError;

/// Role granted to every identity at registration.
pub const DEFAULT_ROLE: &str = "user";

/// Identity aggregate entity.
///
/// Represents a registered identity, keyed by unique email. Deliberately not
/// `Serialize`: the secret hash must never cross the public boundary, so the
/// only way outward is through [`IdentityView`].
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: IdentityId,
    pub email: EmailAddress,
    pub display_name: Option<String>,
    pub roles: Vec<String>,
    pub secret_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new identity with a fresh id, the default role, and the
    /// current timestamp.
    ///
    /// Roles are assigned here, never taken from a caller.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `display_name` - Optional profile name
    /// * `secret_hash` - Hashed password (already processed by the hasher)
    pub fn new(email: EmailAddress, display_name: Option<String>, secret_hash: String) -> Self {
        Self {
            id: IdentityId::new(),
            email,
            display_name,
            roles: vec![DEFAULT_ROLE.to_string()],
            secret_hash,
            created_at: Utc::now(),
        }
    }
}

/// Identity unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityId(pub Uuid);

impl IdentityId {
    /// Generate a new random identity ID.
    ///
    /// # Returns
    /// IdentityId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identity ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed IdentityId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdentityIdError> {
        Uuid::parse_str(s)
            .map(IdentityId)
            .map_err(|e| IdentityIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for IdentityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    ///
    /// # Returns
    /// Email string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password in transit.
///
/// Exists only for the duration of a register or login call. Not `Clone`,
/// not `Serialize`, and its `Debug` output is redacted, so the plaintext
/// cannot leak through logs or response bodies.
pub struct Password(String);

impl Password {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Get the plaintext for hashing or verification.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Transient email and password pair supplied on login.
#[derive(Debug)]
pub struct Credentials {
    pub email: EmailAddress,
    pub password: Password,
}

/// Command to register a new identity with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub display_name: Option<String>,
    pub password: Password,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `display_name` - Optional profile name
    /// * `password` - Plain text password (will be hashed by the service)
    ///
    /// # Returns
    /// RegisterCommand with validated fields
    pub fn new(email: EmailAddress, display_name: Option<String>, password: Password) -> Self {
        Self {
            email,
            display_name,
            password,
        }
    }
}

/// Public projection of an [`Identity`].
///
/// Structurally has no secret field, so no serialization path can leak one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityView {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Identity> for IdentityView {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            email: identity.email.as_str().to_string(),
            display_name: identity.display_name.clone(),
            roles: identity.roles.clone(),
            created_at: identity.created_at,
        }
    }
}

/// Outcome of a successful register or login: the public view of the
/// identity plus a signed session token for it.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub identity: IdentityView,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_address_accepts_valid_email() {
        let email = EmailAddress::new("a@x.com".to_string());
        assert!(email.is_ok());
        assert_eq!(email.unwrap().as_str(), "a@x.com");
    }

    #[test]
    fn test_email_address_rejects_invalid_email() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new("".to_string()).is_err());
    }

    #[test]
    fn test_identity_id_round_trips_through_string() {
        let id = IdentityId::new();
        let parsed = IdentityId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_identity_id_rejects_malformed_string() {
        let result = IdentityId::from_string("not-a-uuid");
        assert!(matches!(result, Err(IdentityIdError::InvalidFormat(_))));
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("hunter2".to_string());
        let rendered = format!("{:?}", password);
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_new_identity_gets_default_role() {
        let identity = Identity::new(
            EmailAddress::new("a@x.com".to_string()).unwrap(),
            None,
            "hash".to_string(),
        );
        assert_eq!(identity.roles, vec![DEFAULT_ROLE.to_string()]);
    }

    #[test]
    fn test_view_carries_no_secret_field() {
        let identity = Identity::new(
            EmailAddress::new("a@x.com".to_string()).unwrap(),
            Some("Ada".to_string()),
            "$2b$10$not_a_real_hash".to_string(),
        );

        let view = IdentityView::from(&identity);
        let json = serde_json::to_value(&view).unwrap();

        let body = json.as_object().unwrap();
        assert!(body.contains_key("email"));
        assert!(body.contains_key("roles"));
        assert!(!body.contains_key("secret_hash"));
        assert!(!json.to_string().contains("$2b$"));
    }
}
