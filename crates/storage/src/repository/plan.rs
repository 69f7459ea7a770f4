use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Plan;

pub struct PlanRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlanRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the plans attached to a cycle in their configured order.
    pub async fn list_by_cycle(&self, cycle_id: Uuid) -> Result<Vec<Plan>> {
        let plans = sqlx::query_as::<_, Plan>(
            r#"
            SELECT plan_id, cycle_id, user_id, name, position, is_active
            FROM plans
            WHERE cycle_id = $1
            ORDER BY position, plan_id
            "#,
        )
        .bind(cycle_id)
        .fetch_all(self.pool)
        .await?;

        Ok(plans)
    }
}
