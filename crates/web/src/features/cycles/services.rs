use sqlx::PgPool;
use storage::{
    dto::cycle::{CycleResponse, PlanSummary},
    error::Result,
    models::{Cycle, Plan},
    repository::{cycle::CycleRepository, plan::PlanRepository},
    services::progress,
};
use uuid::Uuid;

/// List the user's cycles, recomputing progress for each.
pub async fn list_cycles(pool: &PgPool, user_id: Uuid) -> Result<Vec<CycleResponse>> {
    let cycles = CycleRepository::new(pool).list_by_user(user_id).await?;

    let mut responses = Vec::with_capacity(cycles.len());
    for cycle in cycles {
        responses.push(cycle_to_response(pool, cycle).await?);
    }

    Ok(responses)
}

/// Fetch one cycle scoped to its owner.
pub async fn get_cycle(pool: &PgPool, user_id: Uuid, cycle_id: Uuid) -> Result<CycleResponse> {
    let cycle = CycleRepository::new(pool)
        .find_by_id_for_user(cycle_id, user_id)
        .await?;

    cycle_to_response(pool, cycle).await
}

async fn cycle_to_response(pool: &PgPool, cycle: Cycle) -> Result<CycleResponse> {
    let plans = PlanRepository::new(pool).list_by_cycle(cycle.cycle_id).await?;
    let progress_percentage = progress::cycle_progress(pool, &cycle, &plans).await?;

    Ok(CycleResponse {
        cycle_id: cycle.cycle_id,
        name: cycle.name,
        weeks: cycle.weeks,
        start_date: cycle.start_date,
        end_date: cycle.end_date,
        progress_percentage,
        plans: plans.into_iter().map(plan_summary).collect(),
    })
}

fn plan_summary(plan: Plan) -> PlanSummary {
    PlanSummary {
        plan_id: plan.plan_id,
        name: plan.name,
        position: plan.position,
        is_active: plan.is_active,
    }
}
