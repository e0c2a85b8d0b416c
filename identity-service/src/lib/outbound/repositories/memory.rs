use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::ports::IdentityStore;
use crate::identity::errors::InsertError;
use crate::identity::errors::StoreError;

/// In-process identity store backed by a HashMap.
///
/// Enforces the same email uniqueness as the Postgres store. Used by the
/// integration tests and for running the service without a database.
pub struct InMemoryIdentityStore {
    identities: RwLock<HashMap<IdentityId, Identity>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self {
            identities: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryIdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn insert(&self, identity: Identity) -> Result<Identity, InsertError> {
        // The uniqueness check and the insert happen under one write lock
        let mut identities = self.identities.write().await;

        if identities
            .values()
            .any(|existing| existing.email == identity.email)
        {
            return Err(InsertError::DuplicateEmail(
                identity.email.as_str().to_string(),
            ));
        }

        identities.insert(identity.id, identity.clone());

        Ok(identity)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        let identities = self.identities.read().await;

        Ok(identities
            .values()
            .find(|identity| identity.email.as_str() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, StoreError> {
        let identities = self.identities.read().await;

        Ok(identities.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Identity>, StoreError> {
        let identities = self.identities.read().await;

        let mut all: Vec<Identity> = identities.values().cloned().collect();
        // Newest first, matching the Postgres store's ordering
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(all)
    }
}
