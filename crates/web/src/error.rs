use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    Unauthorized,
    Forbidden,
    NotFound,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::Forbidden => write!(f, "Forbidden"),
            Self::NotFound => write!(f, "Resource not found"),
        }
    }
}

impl WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = match &self {
            Self::Storage(StorageError::NotFound) | Self::NotFound => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::Storage(StorageError::ConstraintViolation(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                let mut field_errors = Vec::new();
                collect_field_errors(errors, &mut field_errors);
                field_errors.sort();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::Unauthorized => {
                json!({
                    "error": "Unauthorized"
                })
            }
            Self::Forbidden => {
                json!({
                    "error": "You do not have access to this resource"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

/// Flattens nested struct and list errors into `field: message` lines
fn collect_field_errors(errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(errors) => {
                out.extend(errors.iter().map(|e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    )
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(inner, out),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    collect_field_errors(inner, out);
                }
            }
        }
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use storage::dto::point_a::UpsertPointARequest;
    use storage::models::Metrics;
    use validator::Validate;

    async fn body_json(error: WebError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_storage_not_found_maps_to_404() {
        let (status, body) = body_json(WebError::Storage(StorageError::NotFound)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Resource not found");
    }

    #[tokio::test]
    async fn test_constraint_violation_maps_to_409() {
        let error = StorageError::ConstraintViolation("User with this email already exists".into());
        let (status, body) = body_json(WebError::Storage(error)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "User with this email already exists");
    }

    #[tokio::test]
    async fn test_database_errors_are_hidden() {
        let error = StorageError::Database(sqlx::Error::PoolTimedOut);
        let (status, body) = body_json(WebError::Storage(error)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "An internal error occurred");
    }

    #[tokio::test]
    async fn test_validation_errors_list_fields() {
        let req = UpsertPointARequest {
            metrics: Metrics {
                energy_level: Some(0),
                ..Default::default()
            },
            goal: None,
        };
        let errors = req.validate().unwrap_err();

        let (status, body) = body_json(WebError::from(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(
            body["details"],
            serde_json::json!(["energy_level: Energy level must be between 1 and 10"])
        );
    }

    #[tokio::test]
    async fn test_forbidden_maps_to_403() {
        let (status, _) = body_json(WebError::Forbidden).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
