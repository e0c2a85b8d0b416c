use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error variant on purpose: a hash that cannot be parsed
/// verifies as false, the same as a wrong password.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
