//! Repository for balance reads.
//!
//! Balance mutation happens only inside the payment settlement transaction;
//! this repository deliberately exposes no write path.

use crate::models::Balance;
use sqlx::{PgPool, Result as SqlxResult};
use uuid::Uuid;

pub struct BalanceRepository {
    pool: PgPool,
}

impl BalanceRepository {
    /// Create a new BalanceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the balance owned by a user
    pub async fn find_by_user(&self, user_id: Uuid) -> SqlxResult<Option<Balance>> {
        sqlx::query_as::<_, Balance>(
            r#"
            SELECT user_id, amount, updated_at
            FROM balances
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }
}
