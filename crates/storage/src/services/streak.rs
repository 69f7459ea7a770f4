//! Training streak computation.
//!
//! The streak counts workouts, not calendar days (the response field keeps
//! its historical `training_streak_days` name). A cycle expects each of
//! its active plans to be exercised once per 7-day window, windows counted
//! from the cycle's start date or, failing that, from the first completed
//! workout. Every workout in a fulfilled window extends the running count;
//! a window that leaves an active plan unperformed resets it to zero.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Cycle, Plan, Workout};

/// Longest run of consecutive completed workouts within one cycle that
/// never leaves a week under-fulfilled.
pub fn cycle_streak(cycle: &Cycle, plans: &[Plan], workouts: &[Workout]) -> u32 {
    let active: HashSet<Uuid> = plans
        .iter()
        .filter(|p| p.is_active)
        .map(|p| p.plan_id)
        .collect();
    let required = active.len();
    // A cycle with no active plans has no fulfillable requirement.
    if required == 0 {
        return 0;
    }

    let mut completed: Vec<&Workout> = workouts.iter().filter(|w| w.is_completed()).collect();
    completed.sort_by_key(|w| w.started_at);
    let Some(first_workout) = completed.first() else {
        return 0;
    };

    let reference = cycle
        .start_date
        .unwrap_or_else(|| first_workout.started_at.date_naive());

    let mut windows: BTreeMap<i64, Vec<&Workout>> = BTreeMap::new();
    for workout in completed {
        windows
            .entry(week_index(reference, workout.started_at.date_naive()))
            .or_default()
            .push(workout);
    }

    let (Some(first), Some(last)) = (
        windows.keys().next().copied(),
        windows.keys().next_back().copied(),
    ) else {
        return 0;
    };

    let mut streak = 0u32;
    let mut best = 0u32;
    for week in first..=last {
        // A week with no workouts at all is an unfulfilled week.
        let Some(week_workouts) = windows.get(&week) else {
            streak = 0;
            continue;
        };

        let covered: HashSet<Uuid> = week_workouts
            .iter()
            .filter(|w| active.contains(&w.plan_id))
            .map(|w| w.plan_id)
            .collect();

        if covered.len() < required {
            streak = 0;
            continue;
        }

        // Repeats and workouts on inactive plans all count once fulfilled.
        streak += week_workouts.len() as u32;
        best = best.max(streak);
    }

    best
}

fn week_index(reference: NaiveDate, day: NaiveDate) -> i64 {
    (day - reference).num_days().div_euclid(7)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    use super::cycle_streak;
    use crate::models::{Cycle, Plan, Workout};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
    }

    fn cycle(start: Option<NaiveDate>) -> Cycle {
        Cycle {
            cycle_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Strength block".to_string(),
            weeks: 6,
            start_date: start,
            end_date: None,
            created_at: at(2024, 1, 1),
        }
    }

    fn plan(cycle: &Cycle, position: i32, is_active: bool) -> Plan {
        Plan {
            plan_id: Uuid::new_v4(),
            cycle_id: Some(cycle.cycle_id),
            user_id: cycle.user_id,
            name: format!("Day {position}"),
            position,
            is_active,
        }
    }

    fn completed(plan: &Plan, started_at: DateTime<Utc>) -> Workout {
        Workout {
            workout_id: Uuid::new_v4(),
            plan_id: plan.plan_id,
            user_id: plan.user_id,
            started_at,
            finished_at: Some(started_at + Duration::minutes(60)),
        }
    }

    fn four_plans(cycle: &Cycle) -> Vec<Plan> {
        (1..=4).map(|i| plan(cycle, i, true)).collect()
    }

    #[test]
    fn no_workouts_means_no_streak() {
        let cycle = cycle(Some(date(2024, 1, 1)));
        let plans = four_plans(&cycle);
        assert_eq!(cycle_streak(&cycle, &plans, &[]), 0);
    }

    #[test]
    fn skipped_week_resets_the_count() {
        let cycle = cycle(Some(date(2024, 1, 1)));
        let plans = four_plans(&cycle);

        // Week 1: all four plans, week 2: only three, week 3: all four.
        let mut workouts = Vec::new();
        for (i, p) in plans.iter().enumerate() {
            workouts.push(completed(p, at(2024, 1, 1 + i as u32)));
        }
        for (i, p) in plans.iter().take(3).enumerate() {
            workouts.push(completed(p, at(2024, 1, 8 + i as u32)));
        }
        for (i, p) in plans.iter().enumerate() {
            workouts.push(completed(p, at(2024, 1, 15 + i as u32)));
        }

        assert_eq!(cycle_streak(&cycle, &plans, &workouts), 4);
    }

    #[test]
    fn extra_workouts_beyond_the_requirement_still_count() {
        let cycle = cycle(Some(date(2024, 1, 1)));
        let plans = four_plans(&cycle);

        let mut workouts: Vec<Workout> = plans
            .iter()
            .enumerate()
            .map(|(i, p)| completed(p, at(2024, 1, 1 + i as u32)))
            .collect();
        // Fifth session repeating the first plan inside the same week.
        workouts.push(completed(&plans[0], at(2024, 1, 5)));

        assert_eq!(cycle_streak(&cycle, &plans, &workouts), 5);
    }

    #[test]
    fn under_fulfilled_only_week_yields_zero() {
        let cycle = cycle(Some(date(2024, 1, 1)));
        let plans = four_plans(&cycle);

        let workouts: Vec<Workout> = plans
            .iter()
            .take(2)
            .enumerate()
            .map(|(i, p)| completed(p, at(2024, 1, 1 + i as u32)))
            .collect();

        assert_eq!(cycle_streak(&cycle, &plans, &workouts), 0);
    }

    #[test]
    fn consecutive_fulfilled_weeks_accumulate() {
        let cycle = cycle(Some(date(2024, 1, 1)));
        let plans = four_plans(&cycle);

        let mut workouts = Vec::new();
        for week in 0..2u32 {
            for (i, p) in plans.iter().enumerate() {
                workouts.push(completed(p, at(2024, 1, 1 + week * 7 + i as u32)));
            }
        }

        assert_eq!(cycle_streak(&cycle, &plans, &workouts), 8);
    }

    #[test]
    fn empty_week_between_fulfilled_weeks_resets() {
        let cycle = cycle(Some(date(2024, 1, 1)));
        let p1 = plan(&cycle, 1, true);
        let p2 = plan(&cycle, 2, true);
        let plans = vec![p1.clone(), p2.clone()];

        // Week 1 fulfilled, week 2 empty, week 3 fulfilled with a repeat.
        let workouts = vec![
            completed(&p1, at(2024, 1, 1)),
            completed(&p2, at(2024, 1, 3)),
            completed(&p1, at(2024, 1, 15)),
            completed(&p2, at(2024, 1, 16)),
            completed(&p2, at(2024, 1, 18)),
        ];

        assert_eq!(cycle_streak(&cycle, &plans, &workouts), 3);
    }

    #[test]
    fn inactive_plan_workouts_count_but_do_not_cover() {
        let cycle = cycle(Some(date(2024, 1, 1)));
        let active_one = plan(&cycle, 1, true);
        let active_two = plan(&cycle, 2, true);
        let inactive = plan(&cycle, 3, false);
        let plans = vec![active_one.clone(), active_two.clone(), inactive.clone()];

        // Both active plans done plus one session on the inactive plan.
        let workouts = vec![
            completed(&active_one, at(2024, 1, 1)),
            completed(&active_two, at(2024, 1, 2)),
            completed(&inactive, at(2024, 1, 3)),
        ];
        assert_eq!(cycle_streak(&cycle, &plans, &workouts), 3);

        // The inactive plan alone cannot fulfill a week.
        let workouts = vec![
            completed(&active_one, at(2024, 1, 1)),
            completed(&inactive, at(2024, 1, 3)),
        ];
        assert_eq!(cycle_streak(&cycle, &plans, &workouts), 0);
    }

    #[test]
    fn cycle_without_active_plans_contributes_nothing() {
        let cycle = cycle(Some(date(2024, 1, 1)));
        let inactive = plan(&cycle, 1, false);
        let workouts = vec![completed(&inactive, at(2024, 1, 1))];

        assert_eq!(cycle_streak(&cycle, &[inactive.clone()], &workouts), 0);
    }

    #[test]
    fn windows_fall_back_to_the_first_workout_without_a_start_date() {
        let cycle = cycle(None);
        let p = plan(&cycle, 1, true);
        let plans = vec![p.clone()];

        // Jan 10 anchors week 0; Jan 16 lands in week 0, Jan 17 in week 1.
        let workouts = vec![
            completed(&p, at(2024, 1, 10)),
            completed(&p, at(2024, 1, 16)),
            completed(&p, at(2024, 1, 17)),
        ];

        assert_eq!(cycle_streak(&cycle, &plans, &workouts), 3);
    }

    #[test]
    fn in_progress_workouts_are_ignored() {
        let cycle = cycle(Some(date(2024, 1, 1)));
        let p = plan(&cycle, 1, true);
        let unfinished = Workout {
            workout_id: Uuid::new_v4(),
            plan_id: p.plan_id,
            user_id: p.user_id,
            started_at: at(2024, 1, 1),
            finished_at: None,
        };

        assert_eq!(cycle_streak(&cycle, &[p.clone()], &[unfinished]), 0);
    }
}
