use axum::{routing::get, Router};
use crate::{handlers, state::AppState};

pub mod ids;

/// All routes without rate limiting or tracing layers; `main` adds those.
pub fn create_router(app_state: AppState) -> Router {
    ids::id_routes(app_state).route("/ping", get(handlers::ping))
}
