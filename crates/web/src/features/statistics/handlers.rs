use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    Database,
    dto::{common::ApiResponse, statistics::StatisticsResponse},
};

use crate::error::WebError;
use crate::middleware::auth::AuthedUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/user/statistics",
    responses(
        (status = 200, description = "Statistics snapshot for the authenticated user", body = ApiResponse<StatisticsResponse>),
        (status = 401, description = "Missing or invalid API key")
    ),
    security(("bearer_auth" = [])),
    tag = "statistics"
)]
pub async fn get_user_statistics(
    State(db): State<Database>,
    AuthedUser(user_id): AuthedUser,
) -> Result<Response, WebError> {
    // The clock enters here; everything below it is deterministic.
    let now = Utc::now();
    let statistics = services::get_user_statistics(db.pool(), user_id, now).await?;

    Ok(Json(ApiResponse::new(statistics, "Statistics retrieved successfully")).into_response())
}
