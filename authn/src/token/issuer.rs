use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::SessionClaims;
use super::errors::TokenError;

/// Issues and verifies signed session tokens.
///
/// Tokens are compact JWT strings signed with HS256 (HMAC with SHA-256). The
/// signing key and token lifetime are fixed at construction; the issuer holds
/// no other state, so a single instance can be shared across request handlers.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer with a secret key and token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl_hours` - Hours until issued tokens expire
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Issue a signed token asserting `subject`.
    ///
    /// # Arguments
    /// * `subject` - Identity identifier to embed as the `sub` claim
    ///
    /// # Returns
    /// Signed JWT token string
    ///
    /// # Errors
    /// * `SigningFailed` - Token could not be signed
    pub fn issue(&self, subject: impl ToString) -> Result<String, TokenError> {
        let claims = SessionClaims::for_subject(subject, self.ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// # Arguments
    /// * `token` - JWT token string to verify
    ///
    /// # Returns
    /// The verified session claims
    ///
    /// # Errors
    /// * `Expired` - Token expiry has passed
    /// * `Invalid` - Signature is wrong or the token is malformed
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
