use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{assign_permissions, create_permission};

pub fn init_permissions_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_permission))
        .route("/users/{name}", post(assign_permissions))
}
