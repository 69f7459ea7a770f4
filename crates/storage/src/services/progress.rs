use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Cycle, Plan};
use crate::repository::workout::WorkoutRepository;

/// Fraction of a cycle's scheduled workouts that have been completed,
/// as a whole percentage. The schedule is `weeks * plan_count`, counting
/// every plan attached to the cycle regardless of its active flag.
pub fn progress_percentage(weeks: i32, plan_count: i64, completed_count: i64) -> i32 {
    if weeks <= 0 || plan_count == 0 {
        return 0;
    }

    let total_scheduled = i64::from(weeks) * plan_count;
    // Unreachable after the guard above, but a division by zero here must
    // stay impossible.
    if total_scheduled == 0 {
        return 0;
    }

    ((completed_count as f64 / total_scheduled as f64) * 100.0).round() as i32
}

/// Progress for one cycle given its already-fetched plans.
pub async fn cycle_progress(pool: &PgPool, cycle: &Cycle, plans: &[Plan]) -> Result<i32> {
    let plan_ids: Vec<Uuid> = plans.iter().map(|p| p.plan_id).collect();
    let completed = WorkoutRepository::new(pool)
        .count_completed_by_plans(&plan_ids)
        .await?;

    Ok(progress_percentage(cycle.weeks, plans.len() as i64, completed))
}

#[cfg(test)]
mod tests {
    use super::progress_percentage;

    #[test]
    fn cycle_without_plans_has_zero_progress() {
        assert_eq!(progress_percentage(6, 0, 0), 0);
        assert_eq!(progress_percentage(6, 0, 9), 0);
    }

    #[test]
    fn cycle_without_weeks_has_zero_progress() {
        assert_eq!(progress_percentage(0, 3, 5), 0);
        assert_eq!(progress_percentage(-1, 3, 5), 0);
    }

    #[test]
    fn half_completed_cycle() {
        // 6 weeks x 3 plans = 18 scheduled, 9 done
        assert_eq!(progress_percentage(6, 3, 9), 50);
        // 2 weeks x 2 plans = 4 scheduled, 2 done
        assert_eq!(progress_percentage(2, 2, 2), 50);
    }

    #[test]
    fn fully_completed_cycle() {
        assert_eq!(progress_percentage(4, 3, 12), 100);
    }

    #[test]
    fn untouched_cycle() {
        assert_eq!(progress_percentage(4, 3, 0), 0);
    }

    #[test]
    fn rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(progress_percentage(8, 1, 1), 13);
        // 1/3 = 33.3%, 2/3 = 66.7%
        assert_eq!(progress_percentage(3, 1, 1), 33);
        assert_eq!(progress_percentage(3, 1, 2), 67);
    }

    #[test]
    fn completing_workouts_never_decreases_progress() {
        let mut previous = 0;
        for completed in 0..=18 {
            let current = progress_percentage(6, 3, completed);
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(previous, 100);
    }
}
