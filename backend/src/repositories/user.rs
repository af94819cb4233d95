//! User repository for database operations
//!
//! Accounts are issued elsewhere; this service only records the callers it
//! has seen so listings and favorites can reference them.

use anyhow::Result;
use marketplace_shared::AccountType;
use sqlx::PgPool;
use uuid::Uuid;

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Record an authenticated caller. Existing rows are left unchanged.
    pub async fn ensure(pool: &PgPool, user_id: Uuid, account_type: AccountType) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, account_type)
            VALUES ($1, $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(account_type.as_str())
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn account_type(pool: &PgPool, user_id: Uuid) -> Result<Option<AccountType>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT account_type FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(pool)
                .await?;

        value
            .map(|v| v.parse::<AccountType>().map_err(anyhow::Error::msg))
            .transpose()
    }
}
