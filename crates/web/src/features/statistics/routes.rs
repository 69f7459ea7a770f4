use axum::{Router, routing::get};

use super::handlers::get_user_statistics;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/statistics", get(get_user_statistics))
}
