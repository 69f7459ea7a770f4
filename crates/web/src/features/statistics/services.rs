use chrono::{DateTime, Utc};
use sqlx::PgPool;
use storage::{dto::statistics::StatisticsResponse, error::Result, services::statistics};
use uuid::Uuid;

/// Compute the dashboard snapshot for the resolved user.
pub async fn get_user_statistics(
    pool: &PgPool,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<StatisticsResponse> {
    statistics::user_statistics(pool, user_id, now).await
}
