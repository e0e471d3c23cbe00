use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_auth_details, get_auth_details_by_id};

pub fn init_reports_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_auth_details))
        .route("/{id}", get(get_auth_details_by_id))
}
