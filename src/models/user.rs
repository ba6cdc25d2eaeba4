use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A user row as stored in the database. The password hash never leaves
/// this type; responses are built from `User` instead.
#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The user shape exposed by the API: identifier and email only.
#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
        }
    }
}

/// Response body for a successful registration.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: Uuid,
    pub email: String,
    pub message: String,
}

/// Payload for registering a user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUser {
    #[serde(default)]
    #[validate(email(message = "Must be a valid email address."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 8, message = "Password must be at least 8 characters long."))]
    pub password: String,
}

/// Payload for updating a user. Both fields are optional; no endpoint is
/// wired for it yet.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(email(message = "Must be a valid email address."))]
    pub email: Option<String>,

    #[validate(length(min = 8, message = "Password must be at least 8 characters long."))]
    pub password: Option<String>,
}

/// Payload for verifying credentials. The password only has to be present;
/// its length is checked against the stored hash, not a policy.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginUser {
    #[serde(default)]
    #[validate(email(message = "Must be a valid email address."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn first_message(input: &impl Validate) -> String {
        let errors = input.validate().unwrap_err();
        let (_, field_errors) = errors.field_errors().into_iter().next().unwrap();
        field_errors[0].message.as_ref().unwrap().to_string()
    }

    #[test]
    fn test_create_user_validation() {
        let valid = CreateUser {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid_email = CreateUser {
            email: "testexample.com".to_string(),
            password: "password123".to_string(),
        };
        assert_eq!(first_message(&invalid_email), "Must be a valid email address.");

        let short_password = CreateUser {
            email: "test@example.com".to_string(),
            password: "seven77".to_string(),
        };
        assert_eq!(
            first_message(&short_password),
            "Password must be at least 8 characters long."
        );

        // Exactly eight characters passes.
        let at_limit = CreateUser {
            email: "test@example.com".to_string(),
            password: "eight888".to_string(),
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_update_user_fields_are_optional() {
        let empty = UpdateUser::default();
        assert!(empty.validate().is_ok());

        let invalid_email = UpdateUser {
            email: Some("not-an-email".to_string()),
            ..UpdateUser::default()
        };
        assert!(invalid_email.validate().is_err());

        let short_password = UpdateUser {
            password: Some("short".to_string()),
            ..UpdateUser::default()
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_login_user_validation() {
        let valid = LoginUser {
            email: "test@example.com".to_string(),
            password: "x".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_password = LoginUser {
            email: "test@example.com".to_string(),
            password: "".to_string(),
        };
        assert_eq!(first_message(&empty_password), "Password is required");
    }

    #[test]
    fn test_user_shape_has_no_password() {
        let row = UserRow {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(User::from(row)).unwrap();

        assert!(value.get("id").is_some());
        assert!(value.get("email").is_some());
        assert!(value.get("password").is_none());
        assert!(value.get("password_hash").is_none());
    }
}
