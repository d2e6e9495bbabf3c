use axum::{
    Router, middleware,
    routing::{delete, get},
};
use storage::Database;

use super::handlers::{create_comment, delete_comment, list_comments};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    Router::new()
        .route("/users/:id/comments", get(list_comments).post(create_comment))
        .route("/comments/:id", delete(delete_comment))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
