use async_trait::async_trait;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::errors::InsertError;
use crate::domain::identity::errors::StoreError;
use crate::domain::identity::models::Credentials;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::IdentityView;
use crate::domain::identity::models::IssuedSession;
use crate::domain::identity::models::RegisterCommand;

/// Port for credential and identity operations.
#[async_trait]
pub trait AuthenticatorPort: Send + Sync + 'static {
    /// Register a new identity and issue a session for it.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email, profile fields, and password
    ///
    /// # Returns
    /// Public view of the created identity plus a signed session token
    ///
    /// # Errors
    /// * `DuplicateIdentity` - Email is already registered
    /// * `StorageUnavailable` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<IssuedSession, IdentityError>;

    /// Verify credentials and issue a session.
    ///
    /// # Arguments
    /// * `credentials` - Email and plaintext password pair
    ///
    /// # Returns
    /// Public view of the matched identity plus a signed session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, indistinguishably
    /// * `StorageUnavailable` - Store operation failed
    async fn login(&self, credentials: Credentials) -> Result<IssuedSession, IdentityError>;

    /// Retrieve the public view of an identity by id.
    ///
    /// # Arguments
    /// * `id` - Identity ID
    ///
    /// # Returns
    /// Public view of the identity
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `StorageUnavailable` - Store operation failed
    async fn find_by_id(&self, id: &IdentityId) -> Result<IdentityView, IdentityError>;

    /// Enumerate the public views of all identities.
    ///
    /// # Returns
    /// Vector of identity views
    ///
    /// # Errors
    /// * `StorageUnavailable` - Store operation failed
    async fn list_all(&self) -> Result<Vec<IdentityView>, IdentityError>;
}

/// Persistence operations for the identity aggregate.
///
/// Implementations own durability and the email uniqueness constraint,
/// including its safety under concurrent writes.
#[async_trait]
pub trait IdentityStore: Send + Sync + 'static {
    /// Persist a new identity.
    ///
    /// # Arguments
    /// * `identity` - Identity entity to persist
    ///
    /// # Returns
    /// The persisted identity
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email uniqueness constraint was violated
    /// * `Store` - Any other storage failure
    async fn insert(&self, identity: Identity) -> Result<Identity, InsertError>;

    /// Retrieve an identity by email address.
    ///
    /// # Arguments
    /// * `email` - Email address string
    ///
    /// # Returns
    /// Optional identity entity (None if not found)
    ///
    /// # Errors
    /// * `StoreError` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError>;

    /// Retrieve an identity by identifier.
    ///
    /// # Arguments
    /// * `id` - Identity ID
    ///
    /// # Returns
    /// Optional identity entity (None if not found)
    ///
    /// # Errors
    /// * `StoreError` - Storage operation failed
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, StoreError>;

    /// Retrieve all identities.
    ///
    /// # Returns
    /// Vector of all identities
    ///
    /// # Errors
    /// * `StoreError` - Storage operation failed
    async fn list_all(&self) -> Result<Vec<Identity>, StoreError>;
}
