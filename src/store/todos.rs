use std::sync::RwLock;

use crate::models::{Todo, TodoPatch};

/// The shared todo table.
///
/// Every operation is scoped to an owner id: a todo is only ever visible to
/// the identity it was created under, and a lookup for someone else's todo is
/// indistinguishable from a lookup for a missing one.
///
/// Ids come from a counter that only moves forward, so they are unique across
/// all owners and are not reused after a delete. Mutations take the write
/// lock for the whole read-modify-write, which also serializes id assignment;
/// reads take the read lock and return cloned snapshots. No lock is held
/// across anything but the in-memory step itself.
pub struct TodoStore {
    inner: RwLock<TodoTable>,
}

struct TodoTable {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TodoTable {
                todos: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// All todos owned by `owner_id`, in insertion order. Owning nothing is
    /// an empty list, not an error.
    pub fn list(&self, owner_id: i32) -> Vec<Todo> {
        let table = self.inner.read().expect("todo store poisoned");
        table
            .todos
            .iter()
            .filter(|todo| todo.user_id == owner_id)
            .cloned()
            .collect()
    }

    /// Looks up a todo by id and owner jointly. Someone else's todo is `None`.
    pub fn get(&self, owner_id: i32, id: u64) -> Option<Todo> {
        let table = self.inner.read().expect("todo store poisoned");
        table
            .todos
            .iter()
            .find(|todo| todo.id == id && todo.user_id == owner_id)
            .cloned()
    }

    /// Stores a new todo for `owner_id` and returns it. `completed` starts
    /// false. Callers validate title content before reaching the store.
    pub fn create(&self, owner_id: i32, title: String) -> Todo {
        let mut table = self.inner.write().expect("todo store poisoned");
        let todo = Todo {
            id: table.next_id,
            title,
            completed: false,
            user_id: owner_id,
        };
        table.next_id += 1;
        table.todos.push(todo.clone());
        todo
    }

    /// Applies the present fields of `patch` to the todo with this id and
    /// owner. Returns the updated todo, or `None` when no such todo exists
    /// for this owner.
    pub fn update(&self, owner_id: i32, id: u64, patch: TodoPatch) -> Option<Todo> {
        let mut table = self.inner.write().expect("todo store poisoned");
        let todo = table
            .todos
            .iter_mut()
            .find(|todo| todo.id == id && todo.user_id == owner_id)?;

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Some(todo.clone())
    }

    /// Removes the todo with this id and owner. Returns whether anything was
    /// removed; a repeat delete is `false` again, never a quiet success.
    pub fn delete(&self, owner_id: i32, id: u64) -> bool {
        let mut table = self.inner.write().expect("todo store poisoned");
        let len_before = table.todos.len();
        table
            .todos
            .retain(|todo| !(todo.id == id && todo.user_id == owner_id));
        table.todos.len() != len_before
    }

    /// Drops every todo and restarts id assignment. This is a lifecycle
    /// operation for test isolation, equivalent to a process restart; the
    /// no-id-reuse guarantee applies between resets, not across them.
    pub fn reset(&self) {
        let mut table = self.inner.write().expect("todo store poisoned");
        table.todos.clear();
        table.next_id = 1;
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
