//! PostgreSQL implementation of LoginSessionReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::LoginSessionReader;

/// Looks up rows of the platform's `"Session"` table.
pub struct PostgresLoginSessionReader {
    pool: PgPool,
}

impl PostgresLoginSessionReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoginSessionReader for PostgresLoginSessionReader {
    async fn find_session_user(&self, token: &str) -> Result<Option<UserId>, DomainError> {
        let user_id: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT "userId"
            FROM "Session"
            WHERE "token" = $1
            LIMIT 1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to get session", e))?;

        Ok(user_id.map(UserId::new))
    }
}
