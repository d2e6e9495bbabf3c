use axum::{
    Router, middleware,
    routing::{get, patch},
};
use storage::Database;

use super::handlers::{
    delete_training, get_attendance, get_dashboard, get_grade, list_trainings, log_training,
    update_training,
};
use crate::middleware::auth::{AuthState, require_auth};

pub fn routes(auth: AuthState) -> Router<Database> {
    Router::new()
        .route("/users/:id/trainings", get(list_trainings).post(log_training))
        .route("/trainings/:id", patch(update_training).delete(delete_training))
        .route("/users/:id/grade", get(get_grade))
        .route("/users/:id/attendance", get(get_attendance))
        .route("/users/:id/dashboard", get(get_dashboard))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
