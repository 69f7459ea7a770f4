use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A training cycle spanning a configured number of weeks.
/// `weeks <= 0` means the cycle has no defined schedule.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cycle {
    pub cycle_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub weeks: i32,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
