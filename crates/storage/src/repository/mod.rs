pub mod cycle;
pub mod metric;
pub mod plan;
pub mod workout;
pub mod workout_set;
