use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{get_point_a, upsert_point_a};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    Router::new()
        .route("/users/:id/point-a", get(get_point_a).put(upsert_point_a))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
