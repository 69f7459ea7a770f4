use serde::Serialize;
use utoipa::ToSchema;

/// Per-user dashboard snapshot, derived fresh on every request.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatisticsResponse {
    pub total_workouts: i64,
    pub completed_workouts: i64,
    /// Whole minutes across completed workouts.
    pub total_training_time: i64,
    pub total_volume: f64,
    pub current_weight: Option<f64>,
    pub active_cycles_count: i64,
    pub weight_change_30_days: Option<f64>,
    pub training_frequency_4_weeks: i64,
    /// Workout-count streak; the name is kept for wire compatibility.
    pub training_streak_days: u32,
}
