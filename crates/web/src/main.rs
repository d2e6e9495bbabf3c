use anyhow::Context;
use axum::Router;
use storage::Database;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use features::{comments, health, point_a, progress, scoring, trainings, users};
use middleware::auth::{ApiKeys, AuthState};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::handlers::health,
        users::handlers::list_users,
        users::handlers::get_me,
        users::handlers::get_user,
        users::handlers::create_user,
        users::handlers::update_user,
        users::handlers::rotate_access_key,
        users::handlers::delete_user,
        point_a::handlers::get_point_a,
        point_a::handlers::upsert_point_a,
        progress::handlers::create_snapshot,
        progress::handlers::list_snapshots,
        progress::handlers::latest_snapshot,
        progress::handlers::overall_progress,
        progress::handlers::comparison,
        comments::handlers::list_comments,
        comments::handlers::create_comment,
        comments::handlers::delete_comment,
        trainings::handlers::log_training,
        trainings::handlers::list_trainings,
        trainings::handlers::update_training,
        trainings::handlers::delete_training,
        trainings::handlers::get_grade,
        trainings::handlers::get_attendance,
        trainings::handlers::get_dashboard,
        scoring::handlers::overall_progress,
        scoring::handlers::comparison,
        scoring::handlers::grade,
        scoring::handlers::grade_tables,
    ),
    components(
        schemas(
            health::handlers::HealthResponse,
            storage::dto::user::CreateUserRequest,
            storage::dto::user::UpdateUserRequest,
            storage::dto::user::UserResponse,
            storage::dto::user::UserWithKeyResponse,
            storage::dto::point_a::UpsertPointARequest,
            storage::dto::point_a::PointAResponse,
            storage::dto::progress::CreateProgressRequest,
            storage::dto::progress::ProgressSnapshotResponse,
            storage::dto::comment::CreateCommentRequest,
            storage::dto::comment::CommentResponse,
            storage::dto::training::CreateTrainingRequest,
            storage::dto::training::UpdateTrainingRequest,
            storage::dto::training::TrainingResponse,
            storage::dto::grade::GradeSummary,
            storage::dto::grade::GradeProgress,
            storage::dto::grade::GradeResponse,
            storage::dto::grade::GradeTierResponse,
            storage::dto::grade::GradeTablesResponse,
            storage::dto::scoring::ScoreSnapshotsRequest,
            storage::dto::scoring::OverallProgressResponse,
            storage::dto::scoring::MetricComparisonResponse,
            storage::dto::dashboard::AttendanceResponse,
            storage::dto::dashboard::DashboardResponse,
            storage::dto::common::PaginationMeta,
            storage::models::Metrics,
            storage::models::Better,
            storage::models::Role,
        )
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "users", description = "Club members and access keys"),
        (name = "point-a", description = "Baseline snapshot per member"),
        (name = "progress", description = "Progress snapshots and scores against Point A"),
        (name = "comments", description = "Coach feedback"),
        (name = "trainings", description = "Logged training sessions"),
        (name = "grades", description = "Grades, attendance and the member dashboard"),
        (name = "scoring", description = "Public, stateless scoring rules"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Access Key")
                        .build(),
                ),
            )
        }
    }
}

fn build_router(db: Database, api_keys: ApiKeys) -> Router {
    let auth = AuthState::new(api_keys, db.clone());

    let api = Router::new()
        .merge(health::routes::routes())
        .merge(scoring::routes::routes())
        .merge(users::routes::routes(auth.clone()))
        .merge(point_a::routes::routes(auth.clone()))
        .merge(progress::routes::routes(auth.clone()))
        .merge(comments::routes::routes(auth.clone()))
        .merge(trainings::routes::routes(auth));

    Router::new()
        .nest("/api", api)
        .with_state(db)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting dojo API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::with_max_connections(&config.database_url, config.max_db_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("API_KEYS is empty, only member access keys will authenticate");
    }

    let app = build_router(db, api_keys);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
