use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Workout;

pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All workouts owned by a user, any completion state.
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT workout_id, plan_id, user_id, started_at, finished_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY started_at
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }

    /// Completed workouts against any of the given plans, chronological.
    pub async fn list_completed_by_plans(&self, plan_ids: &[Uuid]) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT workout_id, plan_id, user_id, started_at, finished_at
            FROM workouts
            WHERE plan_id = ANY($1) AND finished_at IS NOT NULL
            ORDER BY started_at
            "#,
        )
        .bind(plan_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }

    pub async fn count_completed_by_plans(&self, plan_ids: &[Uuid]) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM workouts
            WHERE plan_id = ANY($1) AND finished_at IS NOT NULL
            "#,
        )
        .bind(plan_ids)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}
