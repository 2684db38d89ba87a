use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Closed set of roles the backend can hand out. Anything that is not the
/// administrator role string collapses into `Member`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Member,
}

const ADMIN_ROLE: &str = "ROLE_ADMIN";

impl Role {
    pub fn is_admin(self) -> bool {
        match self {
            Role::Admin => true,
            Role::Member => false,
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        if value == ADMIN_ROLE {
            Role::Admin
        } else {
            Role::Member
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::from(raw.as_str()))
    }
}

/// The authenticated user as reported by the session endpoint. Held in
/// view-local memory only; never persisted client-side.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_string_parses_to_admin() {
        let role: Role = serde_json::from_str("\"ROLE_ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
        assert!(role.is_admin());
    }

    #[test]
    fn any_other_role_string_parses_to_member() {
        for raw in ["\"ROLE_USER\"", "\"ROLE_MANAGER\"", "\"\""] {
            let role: Role = serde_json::from_str(raw).unwrap();
            assert_eq!(role, Role::Member);
            assert!(!role.is_admin());
        }
    }

    #[test]
    fn deserializes_session_user() {
        let raw = r#"{
            "id": "6f2a2c55-0d8f-4a8e-9a51-0f6f7a1f2b3c",
            "name": "Alice",
            "username": "alice",
            "role": "ROLE_ADMIN"
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, Role::Admin);
    }
}
