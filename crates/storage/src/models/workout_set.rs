use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutSet {
    pub set_id: Uuid,
    pub workout_id: Uuid,
    pub weight: Option<Decimal>,
    pub reps: Option<i32>,
}
