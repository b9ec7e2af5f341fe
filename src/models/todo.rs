use serde::{Deserialize, Serialize};
use validator::Validate;

/// A todo item as stored and as returned by the API.
///
/// The wire shape uses camelCase (`userId`); ids are assigned by the store
/// and strictly increase for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    /// Identifier of the user who owns the todo. Set on creation, never
    /// changed afterwards.
    pub user_id: i32,
}

/// Request body for creating a todo.
///
/// `title` is an `Option` so that an absent field and an empty field can be
/// reported with the same message: the handler rejects `None`, the validator
/// rejects `Some("")`.
#[derive(Debug, Deserialize, Validate)]
pub struct TodoInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
}

/// Partial update for a todo. Absent fields leave the stored value unchanged.
///
/// Presence is what matters, not truthiness: `{"completed": false}` is an
/// effective patch. A present `title` must be non-empty, same rule as create.
#[derive(Debug, Deserialize, Validate)]
pub struct TodoPatch {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_serializes_with_camel_case_owner() {
        let todo = Todo {
            id: 1,
            title: "Write the release notes".to_string(),
            completed: false,
            user_id: 7,
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Write the release notes");
        assert_eq!(json["completed"], false);
        assert_eq!(json["userId"], 7);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_todo_input_validation() {
        let valid: TodoInput = serde_json::from_value(serde_json::json!({
            "title": "Buy milk"
        }))
        .unwrap();
        assert!(valid.validate().is_ok());

        let empty: TodoInput = serde_json::from_value(serde_json::json!({
            "title": ""
        }))
        .unwrap();
        assert!(empty.validate().is_err(), "empty title must fail validation");

        // An absent title deserializes to None and passes the validator; the
        // handler is responsible for rejecting it with the same message.
        let absent: TodoInput = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(absent.title.is_none());
        assert!(absent.validate().is_ok());
    }

    #[test]
    fn test_todo_patch_field_presence() {
        let completed_only: TodoPatch = serde_json::from_value(serde_json::json!({
            "completed": false
        }))
        .unwrap();
        assert!(completed_only.title.is_none());
        assert_eq!(completed_only.completed, Some(false));
        assert!(completed_only.validate().is_ok());

        let empty_title: TodoPatch = serde_json::from_value(serde_json::json!({
            "title": ""
        }))
        .unwrap();
        assert!(empty_title.validate().is_err());

        let nothing: TodoPatch = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(nothing.title.is_none());
        assert!(nothing.completed.is_none());
        assert!(nothing.validate().is_ok());
    }
}
