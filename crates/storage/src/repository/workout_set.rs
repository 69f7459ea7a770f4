use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::WorkoutSet;

pub struct WorkoutSetRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutSetRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_workouts(&self, workout_ids: &[Uuid]) -> Result<Vec<WorkoutSet>> {
        let sets = sqlx::query_as::<_, WorkoutSet>(
            r#"
            SELECT set_id, workout_id, weight, reps
            FROM workout_sets
            WHERE workout_id = ANY($1)
            "#,
        )
        .bind(workout_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(sets)
    }
}
