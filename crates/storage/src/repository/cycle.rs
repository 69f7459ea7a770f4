use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Cycle;

pub struct CycleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CycleRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all cycles belonging to a user, newest first.
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Cycle>> {
        let cycles = sqlx::query_as::<_, Cycle>(
            r#"
            SELECT cycle_id, user_id, name, weeks, start_date, end_date, created_at
            FROM cycles
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(cycles)
    }

    /// Find a cycle scoped to its owner. A cycle owned by someone else is
    /// indistinguishable from a missing one.
    pub async fn find_by_id_for_user(&self, cycle_id: Uuid, user_id: Uuid) -> Result<Cycle> {
        let cycle = sqlx::query_as::<_, Cycle>(
            r#"
            SELECT cycle_id, user_id, name, weeks, start_date, end_date, created_at
            FROM cycles
            WHERE cycle_id = $1 AND user_id = $2
            "#,
        )
        .bind(cycle_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(cycle)
    }
}
