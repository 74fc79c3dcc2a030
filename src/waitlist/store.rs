use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::chrono::Utc;
use uuid::Uuid;

use crate::domain::WaitlistEmail;

#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("the email is already on the waitlist")]
    DuplicateEmail,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Insert-only persistence seam for waitlist entries. Uniqueness of `email`
/// is enforced by the store itself; a violated constraint surfaces as
/// `PersistenceError::DuplicateEmail`.
#[async_trait]
pub trait WaitlistStore: Send + Sync {
    async fn insert_entry(&self, email: &WaitlistEmail) -> Result<(), PersistenceError>;
}

pub struct PgWaitlistStore {
    pool: PgPool,
}

impl PgWaitlistStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WaitlistStore for PgWaitlistStore {
    #[tracing::instrument(name = "Saving a new waitlist entry in the database", skip(self))]
    async fn insert_entry(&self, email: &WaitlistEmail) -> Result<(), PersistenceError> {
        sqlx::query(
            r#"
            INSERT INTO waitlist (id, email, joined_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email.as_ref())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| {
            // Postgres reports the violated unique constraint as SQLSTATE 23505.
            if err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                PersistenceError::DuplicateEmail
            } else {
                tracing::error!("Failed to execute query: {:?}", err);
                PersistenceError::Unexpected(err.into())
            }
        })?;

        Ok(())
    }
}
