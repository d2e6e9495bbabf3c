use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Club member: a client who trains, a coach, or an administrator.
///
/// `role` is stored as text and read through [`User::role`].
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: Uuid,
    pub display_name: String,
    pub email: Option<String>,
    pub role: String,
    #[serde(skip_serializing)]
    pub access_key: String,
    pub created_at: NaiveDateTime,
}

impl User {
    pub fn role(&self) -> Role {
        self.role.parse().unwrap_or(Role::Client)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Coach,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Coach => "coach",
            Role::Admin => "admin",
        }
    }

    /// Coaches and admins manage other members' records.
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Coach | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "client" => Ok(Role::Client),
            "coach" => Ok(Role::Coach),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing_is_case_insensitive() {
        assert_eq!("Coach".parse::<Role>(), Ok(Role::Coach));
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_staff_roles() {
        assert!(!Role::Client.is_staff());
        assert!(Role::Coach.is_staff());
        assert!(Role::Admin.is_staff());
    }

    #[test]
    fn test_unknown_stored_role_reads_as_client() {
        let user = User {
            user_id: Uuid::new_v4(),
            display_name: "Kim".to_string(),
            email: None,
            role: "visitor".to_string(),
            access_key: "k".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        assert_eq!(user.role(), Role::Client);
    }
}
