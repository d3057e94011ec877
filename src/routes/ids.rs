use axum::{
    routing::{get, post},
    Router,
};
use crate::{handlers, state::AppState};

pub fn id_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/ids", get(handlers::get_by_query))
        .route("/ids/:id", get(handlers::get_by_id))
        .route("/dto/:schema", post(handlers::validate_dto))
        .with_state(app_state)
}
