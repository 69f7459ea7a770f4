use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One performed training session. Completed iff `finished_at` is set;
/// the schema guarantees `finished_at >= started_at`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub workout_id: Uuid,
    pub plan_id: Uuid,
    pub user_id: Uuid,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Workout {
    pub fn is_completed(&self) -> bool {
        self.finished_at.is_some()
    }
}
