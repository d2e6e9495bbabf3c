use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{comparison, grade, grade_tables, overall_progress};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/scoring/overall-progress", post(overall_progress))
        .route("/scoring/comparison", post(comparison))
        .route("/scoring/grade", get(grade))
        .route("/scoring/grade-tables", get(grade_tables))
}
