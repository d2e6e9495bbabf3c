use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    create_user, delete_user, get_me, get_user, list_users, rotate_access_key, update_user,
};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/me", get(get_me))
        .route("/users/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/users/:id/access-key", post(rotate_access_key))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
