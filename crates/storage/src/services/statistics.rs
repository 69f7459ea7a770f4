use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::statistics::StatisticsResponse;
use crate::error::Result;
use crate::models::{Cycle, Metric, Plan, Workout, WorkoutSet};
use crate::repository::cycle::CycleRepository;
use crate::repository::metric::MetricRepository;
use crate::repository::plan::PlanRepository;
use crate::repository::workout::WorkoutRepository;
use crate::repository::workout_set::WorkoutSetRepository;

use super::streak;

/// Everything fetched for one cycle that the streak needs.
pub struct CycleTrainingData {
    pub cycle: Cycle,
    pub plans: Vec<Plan>,
    pub completed_workouts: Vec<Workout>,
}

/// Compute the statistics snapshot for a user. An unknown user yields the
/// same all-zero snapshot as a user with no data.
pub async fn user_statistics(
    pool: &PgPool,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<StatisticsResponse> {
    let cycles = CycleRepository::new(pool).list_by_user(user_id).await?;
    let plan_repo = PlanRepository::new(pool);
    let workout_repo = WorkoutRepository::new(pool);

    let mut cycle_data = Vec::with_capacity(cycles.len());
    for cycle in cycles {
        let plans = plan_repo.list_by_cycle(cycle.cycle_id).await?;
        let plan_ids: Vec<Uuid> = plans.iter().map(|p| p.plan_id).collect();
        let completed_workouts = workout_repo.list_completed_by_plans(&plan_ids).await?;
        cycle_data.push(CycleTrainingData {
            cycle,
            plans,
            completed_workouts,
        });
    }

    let workouts = workout_repo.list_by_user(user_id).await?;
    let workout_ids: Vec<Uuid> = workouts.iter().map(|w| w.workout_id).collect();
    let sets = WorkoutSetRepository::new(pool)
        .list_by_workouts(&workout_ids)
        .await?;

    let metric_repo = MetricRepository::new(pool);
    let current_metric = metric_repo.latest_for_user(user_id).await?;
    let baseline_date = now.date_naive() - Duration::days(30);
    let baseline_metric = metric_repo
        .latest_at_or_before(user_id, baseline_date)
        .await?;

    Ok(assemble(
        &workouts,
        &sets,
        &cycle_data,
        current_metric.as_ref(),
        baseline_metric.as_ref(),
        now,
    ))
}

/// Pure assembly over already-fetched rows. `now` is injected so the
/// snapshot is deterministic under test.
pub fn assemble(
    workouts: &[Workout],
    sets: &[WorkoutSet],
    cycles: &[CycleTrainingData],
    current_metric: Option<&Metric>,
    baseline_metric: Option<&Metric>,
    now: DateTime<Utc>,
) -> StatisticsResponse {
    let completed_workouts = workouts.iter().filter(|w| w.is_completed()).count() as i64;

    let training_streak = cycles
        .iter()
        .map(|c| streak::cycle_streak(&c.cycle, &c.plans, &c.completed_workouts))
        .max()
        .unwrap_or(0);

    let weight_change = match (current_metric, baseline_metric) {
        (Some(current), Some(baseline)) => Some(current.weight - baseline.weight),
        _ => None,
    };

    StatisticsResponse {
        total_workouts: workouts.len() as i64,
        completed_workouts,
        total_training_time: total_training_minutes(workouts),
        total_volume: decimal_to_f64(total_volume(sets)),
        current_weight: current_metric.map(|m| decimal_to_f64(m.weight)),
        active_cycles_count: active_cycles_count(cycles, now.date_naive()),
        weight_change_30_days: weight_change.map(decimal_to_f64),
        training_frequency_4_weeks: training_frequency(workouts, now),
        training_streak_days: training_streak,
    }
}

fn total_training_minutes(workouts: &[Workout]) -> i64 {
    workouts
        .iter()
        .filter_map(|w| w.finished_at.map(|finished| (finished - w.started_at).num_minutes()))
        .sum()
}

fn total_volume(sets: &[WorkoutSet]) -> Decimal {
    sets.iter()
        .map(|s| match (s.weight, s.reps) {
            (Some(weight), Some(reps)) => weight * Decimal::from(reps),
            _ => Decimal::ZERO,
        })
        .sum()
}

/// A cycle is active while it has no end date or its end date has not
/// passed yet.
fn active_cycles_count(cycles: &[CycleTrainingData], today: NaiveDate) -> i64 {
    cycles
        .iter()
        .filter(|c| c.cycle.end_date.map_or(true, |end| end >= today))
        .count() as i64
}

fn training_frequency(workouts: &[Workout], now: DateTime<Utc>) -> i64 {
    let window_start = now - Duration::weeks(4);
    workouts
        .iter()
        .filter(|w| w.is_completed() && w.started_at >= window_start)
        .count() as i64
}

fn decimal_to_f64(decimal: Decimal) -> f64 {
    decimal.to_string().parse().unwrap_or(0.0)
}
