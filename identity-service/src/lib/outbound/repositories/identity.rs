use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::ports::IdentityStore;
use crate::identity::errors::InsertError;
use crate::identity::errors::StoreError;

const EMAIL_UNIQUE_CONSTRAINT: &str = "identities_email_key";

pub struct PostgresIdentityStore {
    pool: PgPool,
}

impl PostgresIdentityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct IdentityRow {
    id: Uuid,
    email: String,
    display_name: Option<String>,
    roles: Vec<String>,
    secret_hash: String,
    created_at: DateTime<Utc>,
}

impl IdentityRow {
    fn into_identity(self) -> Result<Identity, StoreError> {
        // A stored email that fails validation means the row is corrupt
        let email = EmailAddress::new(self.email)
            .map_err(|e| StoreError(format!("Stored email rejected: {}", e)))?;

        Ok(Identity {
            id: IdentityId(self.id),
            email,
            display_name: self.display_name,
            roles: self.roles,
            secret_hash: self.secret_hash,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl IdentityStore for PostgresIdentityStore {
    async fn insert(&self, identity: Identity) -> Result<Identity, InsertError> {
        sqlx::query(
            r#"
            INSERT INTO identities (id, email, display_name, roles, secret_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(identity.id.0)
        .bind(identity.email.as_str())
        .bind(&identity.display_name)
        .bind(&identity.roles)
        .bind(&identity.secret_hash)
        .bind(identity.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT)
                {
                    return InsertError::DuplicateEmail(identity.email.as_str().to_string());
                }
            }
            InsertError::Store(StoreError(e.to_string()))
        })?;

        Ok(identity)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        let row: Option<IdentityRow> = sqlx::query_as(
            r#"
            SELECT id, email, display_name, roles, secret_hash, created_at
            FROM identities
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError(e.to_string()))?;

        row.map(IdentityRow::into_identity).transpose()
    }

    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, StoreError> {
        let row: Option<IdentityRow> = sqlx::query_as(
            r#"
            SELECT id, email, display_name, roles, secret_hash, created_at
            FROM identities
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError(e.to_string()))?;

        row.map(IdentityRow::into_identity).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Identity>, StoreError> {
        let rows: Vec<IdentityRow> = sqlx::query_as(
            r#"
            SELECT id, email, display_name, roles, secret_hash, created_at
            FROM identities
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError(e.to_string()))?;

        rows.into_iter().map(IdentityRow::into_identity).collect()
    }
}
