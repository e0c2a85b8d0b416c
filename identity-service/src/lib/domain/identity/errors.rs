use thiserror::Error;

/// Error for IdentityId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Opaque failure reported by an identity store.
///
/// Carries the backend's description for logging; it is dropped before any
/// error crosses the public boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Outcome of a failed insert, tagged so callers never inspect
/// backend-specific error shapes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InsertError {
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Top-level error for credential and identity operations.
///
/// Exactly the kinds a caller may observe. `InvalidCredentials` is shared by
/// unknown-email and wrong-password failures so the two cases cannot be told
/// apart. `StorageUnavailable` is the terminal wrapper for every failure
/// without a more specific kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Email already registered: {0}")]
    DuplicateIdentity(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Identity not found: {0}")]
    NotFound(String),

    #[error("Storage unavailable")]
    StorageUnavailable,
}

impl From<StoreError> for IdentityError {
    /// Logs the store's cause and drops it. Callers observe only the kind.
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "Identity store failure");
        IdentityError::StorageUnavailable
    }
}

impl From<InsertError> for IdentityError {
    fn from(err: InsertError) -> Self {
        match err {
            InsertError::DuplicateEmail(email) => IdentityError::DuplicateIdentity(email),
            InsertError::Store(cause) => cause.into(),
        }
    }
}
