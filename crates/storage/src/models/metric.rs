use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A dated body-weight sample. Uniqueness per date is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Metric {
    pub metric_id: Uuid,
    pub user_id: Uuid,
    pub recorded_on: chrono::NaiveDate,
    pub weight: Decimal,
}
