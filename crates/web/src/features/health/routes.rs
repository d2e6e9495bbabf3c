use axum::{Router, routing::get};
use storage::Database;

use super::handlers::health;

pub fn routes() -> Router<Database> {
    Router::new().route("/health", get(health))
}
