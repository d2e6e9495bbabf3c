use sqlx::PgPool;
use storage::{
    dto::user::{CreateUserRequest, UpdateUserRequest},
    error::Result,
    models::{Role, User},
    repository::user::UserRepository,
};
use uuid::Uuid;

/// List members, optionally narrowed to one role
pub async fn list_users(pool: &PgPool, role: Option<Role>) -> Result<Vec<User>> {
    let repo = UserRepository::new(pool);
    repo.list(role.map(Role::as_str)).await
}

pub async fn get_user(pool: &PgPool, user_id: Uuid) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.find_by_id(user_id).await
}

/// Create a member with a freshly generated access key
pub async fn create_user(pool: &PgPool, request: &CreateUserRequest) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.create(request).await
}

pub async fn update_user(
    pool: &PgPool,
    user_id: Uuid,
    request: &UpdateUserRequest,
) -> Result<User> {
    let repo = UserRepository::new(pool);

    let existing = repo.find_by_id(user_id).await?;
    repo.update(&existing, request).await
}

/// Replace the member's access key; the old key stops working immediately
pub async fn rotate_access_key(pool: &PgPool, user_id: Uuid) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.rotate_access_key(user_id).await
}

pub async fn delete_user(pool: &PgPool, user_id: Uuid) -> Result<()> {
    let repo = UserRepository::new(pool);
    repo.delete(user_id).await
}
