use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::collections::HashSet;
use std::sync::Arc;
use storage::{Database, models::Role, repository::user::UserRepository};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// Static admin keys loaded from `API_KEYS`
#[derive(Clone, Default)]
pub struct ApiKeys {
    keys: Arc<HashSet<String>>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            keys: Arc::new(keys),
        }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Clone)]
pub struct AuthState {
    pub api_keys: ApiKeys,
    pub db: Database,
}

impl AuthState {
    pub fn new(api_keys: ApiKeys, db: Database) -> Self {
        Self { api_keys, db }
    }
}

/// Who is making the request, inserted into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    /// Holder of a static admin key. Has no user row.
    ApiKey,
    Member { user_id: Uuid, role: Role },
}

impl Caller {
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Self::ApiKey => None,
            Self::Member { user_id, .. } => Some(*user_id),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::ApiKey => Role::Admin,
            Self::Member { role, .. } => *role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    /// Members see their own records; coaches and admins see everyone's.
    pub fn can_access(&self, user_id: Uuid) -> bool {
        self.role().is_staff() || self.user_id() == Some(user_id)
    }

    pub fn require_access(&self, user_id: Uuid) -> WebResult<()> {
        if self.can_access(user_id) {
            Ok(())
        } else {
            Err(WebError::Forbidden)
        }
    }

    pub fn require_staff(&self) -> WebResult<()> {
        if self.role().is_staff() {
            Ok(())
        } else {
            Err(WebError::Forbidden)
        }
    }

    pub fn require_admin(&self) -> WebResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(WebError::Forbidden)
        }
    }
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub async fn require_auth(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = bearer_token(&req).ok_or(WebError::Unauthorized)?;

    let caller = if state.api_keys.is_valid(token) {
        Caller::ApiKey
    } else {
        let user = UserRepository::new(state.db.pool())
            .find_by_access_key(token)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Invalid access key attempt");
                WebError::Unauthorized
            })?;

        Caller::Member {
            user_id: user.user_id,
            role: user.role(),
        }
    };

    tracing::debug!(role = %caller.role(), user_id = ?caller.user_id(), "Authenticated request");
    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(role: Role) -> (Uuid, Caller) {
        let user_id = Uuid::new_v4();
        (user_id, Caller::Member { user_id, role })
    }

    #[test]
    fn test_api_keys_parsing() {
        let keys = ApiKeys::from_comma_separated(" alpha , ,beta,");
        assert_eq!(keys.len(), 2);
        assert!(keys.is_valid("alpha"));
        assert!(keys.is_valid("beta"));
        assert!(!keys.is_valid(""));
        assert!(ApiKeys::from_comma_separated("").is_empty());
    }

    #[test]
    fn test_client_only_reaches_own_records() {
        let (own_id, client) = member(Role::Client);
        assert!(client.can_access(own_id));
        assert!(!client.can_access(Uuid::new_v4()));
        assert!(client.require_staff().is_err());
        assert!(client.require_admin().is_err());
    }

    #[test]
    fn test_coach_is_staff_but_not_admin() {
        let (_, coach) = member(Role::Coach);
        assert!(coach.can_access(Uuid::new_v4()));
        assert!(coach.require_staff().is_ok());
        assert!(matches!(coach.require_admin(), Err(WebError::Forbidden)));
    }

    #[test]
    fn test_static_key_acts_as_admin_without_user() {
        let caller = Caller::ApiKey;
        assert_eq!(caller.user_id(), None);
        assert!(caller.is_admin());
        assert!(caller.require_access(Uuid::new_v4()).is_ok());
    }

    #[test]
    fn test_bearer_token_extraction() {
        let req = Request::builder()
            .header(AUTHORIZATION, "Bearer  abc123 ")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&req), Some("abc123"));

        let req = Request::builder()
            .header(AUTHORIZATION, "Basic abc123")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&req), None);

        let req = Request::builder()
            .header(AUTHORIZATION, "Bearer ")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&req), None);
    }
}
