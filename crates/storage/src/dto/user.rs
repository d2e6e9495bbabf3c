use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::User;

/// Public view of a member
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user_id: Uuid,
    pub display_name: String,
    pub email: Option<String>,
    pub role: String,
    pub created_at: NaiveDateTime,
}

/// Returned once on creation and on key rotation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserWithKeyResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub access_key: String,
}

/// Request payload for creating a new member
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Display name must be between 1 and 255 characters"
    ))]
    pub display_name: String,

    #[validate(email(message = "Email must be a valid address"))]
    #[validate(length(max = 255))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_role"))]
    #[serde(default = "default_role")]
    pub role: String,
}

/// Request payload for updating an existing member
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub display_name: Option<String>,

    #[validate(email)]
    #[validate(length(max = 255))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct UserFilter {
    pub role: Option<String>,
}

fn default_role() -> String {
    "client".to_string()
}

fn validate_role(role: &str) -> Result<(), validator::ValidationError> {
    const VALID_ROLES: &[&str] = &["client", "coach", "admin"];

    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_role"))
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            display_name: user.display_name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserWithKeyResponse {
    fn from(user: User) -> Self {
        let access_key = user.access_key.clone();
        Self {
            user: UserResponse::from(user),
            access_key,
        }
    }
}
