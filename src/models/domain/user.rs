use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Teacher,
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::SuperAdmin => "super_admin",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "super_admin" => Role::SuperAdmin,
            _ => Role::Teacher,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
    // PHC string produced by the password codec, or a pre-codec plaintext
    // for rows that have not been upgraded yet.
    pub password_hash: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: &str, name: &str, password_hash: &str, role: Role) -> Self {
        User {
            id: 0,
            username: username.to_string(),
            name: name.to_string(),
            password_hash: password_hash.to_string(),
            role,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse(Role::Teacher.as_str()), Role::Teacher);
        assert_eq!(Role::parse(Role::SuperAdmin.as_str()), Role::SuperAdmin);
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let json = serde_json::to_string(&Role::SuperAdmin).unwrap();
        assert_eq!(json, "\"super_admin\"");
    }

    #[test]
    fn test_user_creation() {
        let user = User::new("amina", "Amina Rahman", "hash", Role::Teacher);
        assert_eq!(user.username, "amina");
        assert_eq!(user.role, Role::Teacher);
        assert!(user.created_at.is_some());
    }
}
