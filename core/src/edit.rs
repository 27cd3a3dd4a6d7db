//! Edit state machine: `Viewing` or `Editing` exactly one record.
//!
//! # Design
//! The draft lives inside the `Editing` variant, so "at most one edit at a
//! time" holds by construction. Starting a new edit overwrites the variant
//! and the previous draft is dropped unsaved.

use crate::draft::EditDraft;
use crate::types::{Todo, TodoId, UpdateTodo};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing(EditDraft),
}

impl EditState {
    pub fn start(&mut self, todo: &Todo) {
        *self = EditState::Editing(EditDraft::from_todo(todo));
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            EditState::Viewing => None,
            EditState::Editing(draft) => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        match self {
            EditState::Viewing => None,
            EditState::Editing(draft) => Some(draft),
        }
    }

    pub fn is_editing(&self, id: &TodoId) -> bool {
        self.draft().is_some_and(|d| &d.id == id)
    }

    /// Leave edit mode and hand back the patch to send, if any.
    pub fn save(&mut self) -> Option<(TodoId, UpdateTodo)> {
        match std::mem::take(self) {
            EditState::Viewing => None,
            EditState::Editing(draft) => {
                let patch = draft.to_patch();
                Some((draft.id, patch))
            }
        }
    }

    pub fn cancel(&mut self) {
        *self = EditState::Viewing;
    }
}
