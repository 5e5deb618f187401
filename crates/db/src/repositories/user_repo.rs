//! Repository for the `users` table.

use sqlx::PgPool;
use talentscope_core::types::DbId;

use crate::models::user::User;

const COLUMNS: &str = "id, email, full_name, password_hash, oauth_provider, oauth_subject, \
     is_active, created_at, updated_at, last_login_at";

/// CRUD operations for user accounts.
pub struct UserRepo;

impl UserRepo {
    /// Insert a password-based account, returning the created row.
    ///
    /// Fails with a unique violation on `uq_users_email` for duplicates; the
    /// API layer maps that to 409.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        full_name: Option<&str>,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, full_name, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(full_name)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find or create an account for an OAuth identity.
    ///
    /// Matching is by email; an existing password account gains the provider
    /// linkage on first OAuth sign-in.
    pub async fn upsert_oauth(
        pool: &PgPool,
        email: &str,
        full_name: Option<&str>,
        provider: &str,
        subject: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, full_name, oauth_provider, oauth_subject)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_users_email DO UPDATE SET
                oauth_provider = EXCLUDED.oauth_provider,
                oauth_subject = EXCLUDED.oauth_subject,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(full_name)
            .bind(provider)
            .bind(subject)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Stamp a successful login.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Store a single-use password-reset token hash with its expiry.
    pub async fn create_password_reset(
        pool: &PgPool,
        user_id: DbId,
        token_hash: &str,
        expires_at: talentscope_core::types::Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO password_resets (user_id, token_hash, expires_at)
             VALUES ($1, $2, $3)",
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(pool)
        .await?;
        Ok(())
    }
}
