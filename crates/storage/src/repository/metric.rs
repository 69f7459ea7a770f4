use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Metric;

pub struct MetricRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MetricRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The user's most recent body-weight sample. Absence is a defined
    /// state, not an error.
    pub async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<Metric>> {
        let metric = sqlx::query_as::<_, Metric>(
            r#"
            SELECT metric_id, user_id, recorded_on, weight
            FROM metrics
            WHERE user_id = $1
            ORDER BY recorded_on DESC, metric_id DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(metric)
    }

    /// The most recent sample recorded at or before the given date.
    pub async fn latest_at_or_before(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<Metric>> {
        let metric = sqlx::query_as::<_, Metric>(
            r#"
            SELECT metric_id, user_id, recorded_on, weight
            FROM metrics
            WHERE user_id = $1 AND recorded_on <= $2
            ORDER BY recorded_on DESC, metric_id DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(self.pool)
        .await?;

        Ok(metric)
    }
}
