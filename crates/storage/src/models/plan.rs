use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A workout routine. Standalone plans (`cycle_id` null) never enter
/// progress or streak computation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Plan {
    pub plan_id: Uuid,
    pub cycle_id: Option<Uuid>,
    pub user_id: Uuid,
    pub name: String,
    pub position: i32,
    pub is_active: bool,
}
