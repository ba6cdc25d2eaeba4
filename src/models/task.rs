use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A task row as stored in the database.
#[derive(Debug, FromRow)]
pub struct TaskRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A task as returned by the API.
///
/// Kept separate from `TaskRow` so the wire shape (camelCase timestamps,
/// description omitted when absent) is independent of the storage shape.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            done: row.done,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Payload for creating a task.
///
/// A missing `title` deserializes to the empty string so the "Title is
/// required" rule covers both the absent and the empty case.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTask {
    #[serde(default)]
    #[validate(custom = "validate_title")]
    pub title: String,

    #[validate(length(max = 200, message = "Description should be short"))]
    pub description: Option<String>,
}

/// Payload for partially updating a task. Every field is optional;
/// the empty payload `{}` is valid and updates nothing.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTask {
    #[validate(custom = "validate_title")]
    pub title: Option<String>,

    #[validate(length(max = 200, message = "Description should be short"))]
    pub description: Option<String>,

    pub done: Option<bool>,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        let mut error = ValidationError::new("length");
        error.message = Some("Title is required".into());
        return Err(error);
    }
    if title.chars().count() > 80 {
        let mut error = ValidationError::new("length");
        error.message = Some("Keep the title under 80 characters".into());
        return Err(error);
    }
    Ok(())
}
