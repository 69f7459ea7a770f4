use axum::{Router, routing::get};

use super::handlers::{get_cycle, list_cycles};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cycles))
        .route("/:cycle_id", get(get_cycle))
}
