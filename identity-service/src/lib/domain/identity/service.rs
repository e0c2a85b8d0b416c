use std::sync::Arc;

use async_trait::async_trait;
use authn::PasswordHasher;
use authn::TokenIssuer;

use crate::domain::identity::models::Credentials;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::IdentityView;
use crate::domain::identity::models::IssuedSession;
use crate::domain::identity::models::RegisterCommand;
use crate::identity::errors::IdentityError;
use crate::identity::ports::AuthenticatorPort;
use crate::identity::ports::IdentityStore;

/// Domain service for credential and identity operations.
///
/// Orchestrates registration and login against the identity store, the
/// password hasher, and the token issuer, and owns the error taxonomy the
/// boundary observes. Holds no per-request state; hashing and signing are
/// pure, so a single instance serves all workers.
pub struct CredentialAuthenticator<IS>
where
    IS: IdentityStore,
{
    store: Arc<IS>,
    password_hasher: PasswordHasher,
    token_issuer: Arc<TokenIssuer>,
}

impl<IS> CredentialAuthenticator<IS>
where
    IS: IdentityStore,
{
    /// Create a new authenticator with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Identity persistence implementation
    /// * `password_hasher` - Hashing policy, configured with the deployment's work factor
    /// * `token_issuer` - Signing primitive, configured with the deployment's key
    ///
    /// # Returns
    /// Configured authenticator instance
    pub fn new(store: Arc<IS>, password_hasher: PasswordHasher, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            store,
            password_hasher,
            token_issuer,
        }
    }

    fn issue_session(&self, identity: &Identity) -> Result<IssuedSession, IdentityError> {
        let token = self.token_issuer.issue(identity.id).map_err(|e| {
            tracing::error!(error = %e, "Token signing failed");
            IdentityError::StorageUnavailable
        })?;

        Ok(IssuedSession {
            identity: IdentityView::from(identity),
            token,
        })
    }
}

#[async_trait]
impl<IS> AuthenticatorPort for CredentialAuthenticator<IS>
where
    IS: IdentityStore,
{
    async fn register(&self, command: RegisterCommand) -> Result<IssuedSession, IdentityError> {
        let secret_hash = self
            .password_hasher
            .hash(command.password.expose())
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                IdentityError::StorageUnavailable
            })?;

        let identity = Identity::new(command.email, command.display_name, secret_hash);

        // Insert and issue are two steps, not a transaction. If signing fails
        // after the insert the identity persists and the caller can log in.
        let identity = self.store.insert(identity).await?;

        self.issue_session(&identity)
    }

    async fn login(&self, credentials: Credentials) -> Result<IssuedSession, IdentityError> {
        let identity = self
            .store
            .find_by_email(credentials.email.as_str())
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        if !self
            .password_hasher
            .verify(credentials.password.expose(), &identity.secret_hash)
        {
            return Err(IdentityError::InvalidCredentials);
        }

        self.issue_session(&identity)
    }

    async fn find_by_id(&self, id: &IdentityId) -> Result<IdentityView, IdentityError> {
        self.store
            .find_by_id(id)
            .await?
            .map(|identity| IdentityView::from(&identity))
            .ok_or(IdentityError::NotFound(id.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<IdentityView>, IdentityError> {
        let identities = self.store.list_all().await?;
        Ok(identities.iter().map(IdentityView::from).collect())
    }
}
