use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct CycleResponse {
    pub cycle_id: Uuid,
    pub name: String,
    pub weeks: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Recomputed from the cycle's plans and workouts on every read.
    pub progress_percentage: i32,
    pub plans: Vec<PlanSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlanSummary {
    pub plan_id: Uuid,
    pub name: String,
    pub position: i32,
    pub is_active: bool,
}
