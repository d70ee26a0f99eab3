//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{ROLE_ADMIN, ROLE_USER};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::User => write!(f, "{}", ROLE_USER),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data needed to insert a user; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Editable user fields
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Thomas Aelbrecht")]
    pub name: String,
    #[schema(example = "thomas.aelbrecht@hogent.be")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// The authenticated caller, as decoded from a bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Self-or-admin rule for user records.
    pub fn can_access_user(&self, user_id: i32) -> bool {
        self.id == user_id || self.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(id: i32, role: UserRole) -> CurrentUser {
        CurrentUser {
            id,
            email: "caller@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_role_round_trips_through_strings() {
        assert_eq!(UserRole::from("admin"), UserRole::Admin);
        assert_eq!(UserRole::from("user"), UserRole::User);
        assert_eq!(UserRole::from("unknown"), UserRole::User);
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_user_can_only_access_self() {
        let user = caller(1, UserRole::User);
        assert!(user.can_access_user(1));
        assert!(!user.can_access_user(2));
    }

    #[test]
    fn test_admin_can_access_anyone() {
        let admin = caller(1, UserRole::Admin);
        assert!(admin.can_access_user(42));
    }

    #[test]
    fn test_response_drops_password_hash() {
        let user = User {
            id: 7,
            name: "Karine".to_string(),
            email: "karine@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "name": "Karine", "email": "karine@example.com" })
        );
    }
}
