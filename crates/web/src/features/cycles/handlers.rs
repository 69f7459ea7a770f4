use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{common::ApiResponse, cycle::CycleResponse},
};
use uuid::Uuid;

use crate::error::WebError;
use crate::middleware::auth::AuthedUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/cycles",
    responses(
        (status = 200, description = "The authenticated user's cycles with progress", body = ApiResponse<Vec<CycleResponse>>),
        (status = 401, description = "Missing or invalid API key")
    ),
    security(("bearer_auth" = [])),
    tag = "cycles"
)]
pub async fn list_cycles(
    State(db): State<Database>,
    AuthedUser(user_id): AuthedUser,
) -> Result<Response, WebError> {
    let cycles = services::list_cycles(db.pool(), user_id).await?;

    Ok(Json(ApiResponse::new(cycles, "Cycles retrieved successfully")).into_response())
}

#[utoipa::path(
    get,
    path = "/api/cycles/{cycle_id}",
    params(
        ("cycle_id" = Uuid, Path, description = "Cycle ID")
    ),
    responses(
        (status = 200, description = "Cycle with plans and progress", body = ApiResponse<CycleResponse>),
        (status = 401, description = "Missing or invalid API key"),
        (status = 404, description = "Cycle not found or not owned by the caller")
    ),
    security(("bearer_auth" = [])),
    tag = "cycles"
)]
pub async fn get_cycle(
    State(db): State<Database>,
    AuthedUser(user_id): AuthedUser,
    Path(cycle_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let cycle = services::get_cycle(db.pool(), user_id, cycle_id).await?;

    Ok(Json(ApiResponse::new(cycle, "Cycle retrieved successfully")).into_response())
}
