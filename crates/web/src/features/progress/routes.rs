use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{
    comparison, create_snapshot, latest_snapshot, list_snapshots, overall_progress,
};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    Router::new()
        .route("/users/:id/progress", get(list_snapshots).post(create_snapshot))
        .route("/users/:id/progress/latest", get(latest_snapshot))
        .route("/users/:id/progress/overall", get(overall_progress))
        .route("/users/:id/progress/comparison", get(comparison))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
