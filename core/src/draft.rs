//! Field values the user has typed but the server has not seen yet.

use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// Contents of the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTodoDraft {
    pub title: String,
    pub description: String,
}

impl NewTodoDraft {
    /// A draft is only sent once its title has something besides whitespace.
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn to_request(&self) -> CreateTodo {
        CreateTodo {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// In-progress edit of one existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: TodoId,
    pub title: String,
    pub description: String,
}

impl EditDraft {
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            title: todo.title.clone(),
            description: todo.description.clone(),
        }
    }

    pub fn to_patch(&self) -> UpdateTodo {
        UpdateTodo::text(self.title.clone(), self.description.clone())
    }
}
