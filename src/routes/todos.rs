use crate::{
    auth::AuthenticatedUserId,
    error::ApiError,
    models::{TodoInput, TodoPatch},
    store::TodoStore,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

/// Lists the authenticated user's todos.
///
/// Returns every todo owned by the caller in the order they were created.
/// Owning nothing yields an empty array, not an error.
///
/// ## Responses:
/// - `200 OK`: JSON array of todos.
/// - `401`/`403`: missing or invalid bearer token.
#[get("")]
pub async fn list_todos(
    store: web::Data<TodoStore>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, ApiError> {
    Ok(HttpResponse::Ok().json(store.list(user.0)))
}

/// Creates a todo owned by the authenticated user.
///
/// Expects `{"title": ...}`; the title must be present and non-empty. The new
/// todo starts with `completed` false and gets the next free id.
///
/// ## Responses:
/// - `201 Created`: the new todo.
/// - `400 Bad Request`: title absent or empty.
/// - `401`/`403`: missing or invalid bearer token.
#[post("")]
pub async fn create_todo(
    store: web::Data<TodoStore>,
    user: AuthenticatedUserId,
    todo_data: web::Json<TodoInput>,
) -> Result<impl Responder, ApiError> {
    // Rejects an empty title; an absent one is caught below with the same
    // message, both before any mutation.
    todo_data.validate()?;
    let Some(title) = todo_data.into_inner().title else {
        return Err(ApiError::Validation("Title is required".into()));
    };

    let todo = store.create(user.0, title);
    Ok(HttpResponse::Created().json(todo))
}

/// Fetches one todo by id.
///
/// The lookup is scoped to the caller: someone else's todo answers 404
/// exactly like a todo that does not exist.
#[get("/{id}")]
pub async fn get_todo(
    store: web::Data<TodoStore>,
    user: AuthenticatedUserId,
    todo_id: web::Path<u64>,
) -> Result<impl Responder, ApiError> {
    match store.get(user.0, todo_id.into_inner()) {
        Some(todo) => Ok(HttpResponse::Ok().json(todo)),
        None => Err(ApiError::NotFound("Todo not found".into())),
    }
}

/// Applies a partial update to one of the caller's todos.
///
/// Only the fields present in the body change; `{"completed": false}` is a
/// real update, not a no-op. A present `title` must be non-empty.
///
/// ## Responses:
/// - `200 OK`: the updated todo.
/// - `400 Bad Request`: empty title in the patch.
/// - `404 Not Found`: no such todo for this caller (including todos owned by
///   someone else).
/// - `401`/`403`: missing or invalid bearer token.
#[put("/{id}")]
pub async fn update_todo(
    store: web::Data<TodoStore>,
    user: AuthenticatedUserId,
    todo_id: web::Path<u64>,
    patch: web::Json<TodoPatch>,
) -> Result<impl Responder, ApiError> {
    patch.validate()?;

    match store.update(user.0, todo_id.into_inner(), patch.into_inner()) {
        Some(todo) => Ok(HttpResponse::Ok().json(todo)),
        None => Err(ApiError::NotFound("Todo not found".into())),
    }
}

/// Deletes one of the caller's todos.
///
/// Deleting an id that does not exist for this caller is always 404; a
/// repeat delete does not turn into a success.
#[delete("/{id}")]
pub async fn delete_todo(
    store: web::Data<TodoStore>,
    user: AuthenticatedUserId,
    todo_id: web::Path<u64>,
) -> Result<impl Responder, ApiError> {
    if !store.delete(user.0, todo_id.into_inner()) {
        return Err(ApiError::NotFound("Todo not found".into()));
    }

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use crate::models::{TodoInput, TodoPatch};
    use validator::Validate;

    #[test]
    fn test_todo_input_validation_rules() {
        let empty_title = TodoInput {
            title: Some(String::new()),
        };
        assert!(
            empty_title.validate().is_err(),
            "validation should fail for an empty title"
        );

        let valid = TodoInput {
            title: Some("Valid title".to_string()),
        };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_todo_patch_validation_rules() {
        let empty_title = TodoPatch {
            title: Some(String::new()),
            completed: None,
        };
        assert!(
            empty_title.validate().is_err(),
            "a present title must be non-empty, same as create"
        );

        let completed_only = TodoPatch {
            title: None,
            completed: Some(false),
        };
        assert!(completed_only.validate().is_ok());
    }
}
