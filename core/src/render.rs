//! Pure mapping from view state to a visual tree.
//!
//! The tree is plain data so any front end (terminal, DOM bridge, native
//! widgets) can draw it. `Display` gives a plain-text rendering.

use std::fmt;

use crate::draft::{EditDraft, NewTodoDraft};
use crate::edit::EditState;
use crate::types::{Todo, TodoId};

pub const HEADING: &str = "Todo List";
pub const FORM_HEADING: &str = "Add New Todo";
pub const TITLE_PLACEHOLDER: &str = "Todo title...";
pub const DESCRIPTION_PLACEHOLDER: &str = "Description (optional)...";
pub const SUBMIT_LABEL: &str = "Add Todo";
pub const SAVE_LABEL: &str = "Save";
pub const CANCEL_LABEL: &str = "Cancel";
pub const EMPTY_MESSAGE: &str = "No todos yet. Add one above to get started!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub heading: &'static str,
    pub form: CreateForm,
    pub body: Body,
}

impl Screen {
    pub fn cards(&self) -> &[Card] {
        match &self.body {
            Body::Empty { .. } => &[],
            Body::Cards(cards) => cards,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateForm {
    pub heading: &'static str,
    pub title: String,
    pub description: String,
    pub title_placeholder: &'static str,
    pub description_placeholder: &'static str,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Empty { message: &'static str },
    Cards(Vec<Card>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card {
    Item(ItemCard),
    Editing(EditCard),
}

impl Card {
    pub fn id(&self) -> &TodoId {
        match self {
            Card::Item(card) => &card.id,
            Card::Editing(card) => &card.id,
        }
    }
}

/// A record in its read-only presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: TodoId,
    pub title: String,
    /// `None` when the record has no description.
    pub description: Option<String>,
    pub status: Status,
    pub struck_through: bool,
    /// Calendar date of `created_at`, `YYYY-MM-DD`.
    pub created: String,
}

/// The record being edited, showing the draft rather than the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCard {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub save_label: &'static str,
    pub cancel_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Completed,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Completed => "Completed",
        }
    }
}

pub fn render(todos: &[Todo], draft: &NewTodoDraft, edit: &EditState) -> Screen {
    let form = CreateForm {
        heading: FORM_HEADING,
        title: draft.title.clone(),
        description: draft.description.clone(),
        title_placeholder: TITLE_PLACEHOLDER,
        description_placeholder: DESCRIPTION_PLACEHOLDER,
        submit_label: SUBMIT_LABEL,
    };

    let body = if todos.is_empty() {
        Body::Empty {
            message: EMPTY_MESSAGE,
        }
    } else {
        Body::Cards(todos.iter().map(|todo| card(todo, edit.draft())).collect())
    };

    Screen {
        heading: HEADING,
        form,
        body,
    }
}

fn card(todo: &Todo, editing: Option<&EditDraft>) -> Card {
    if let Some(draft) = editing.filter(|d| d.id == todo.id) {
        return Card::Editing(EditCard {
            id: draft.id.clone(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            save_label: SAVE_LABEL,
            cancel_label: CANCEL_LABEL,
        });
    }
    Card::Item(ItemCard {
        id: todo.id.clone(),
        title: todo.title.clone(),
        description: Some(todo.description.clone()).filter(|d| !d.is_empty()),
        status: if todo.completed {
            Status::Completed
        } else {
            Status::Pending
        },
        struck_through: todo.completed,
        created: todo.created_at.format("%Y-%m-%d").to_string(),
    })
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.heading)?;
        writeln!(f)?;
        write!(f, "{}", self.form)?;
        writeln!(f)?;
        match &self.body {
            Body::Empty { message } => writeln!(f, "{message}"),
            Body::Cards(cards) => cards.iter().try_for_each(|card| write!(f, "{card}")),
        }
    }
}

impl fmt::Display for CreateForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.heading)?;
        writeln!(f, "[{}]", or_placeholder(&self.title, self.title_placeholder))?;
        writeln!(
            f,
            "[{}]",
            or_placeholder(&self.description, self.description_placeholder)
        )?;
        writeln!(f, "<{}>", self.submit_label)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Item(card) => {
                let mark = if card.struck_through { "x" } else { " " };
                writeln!(f, "- [{mark}] {}", strike(&card.title, card.struck_through))?;
                if let Some(description) = &card.description {
                    writeln!(f, "      {}", strike(description, card.struck_through))?;
                }
                writeln!(f, "      ({}) Created: {}", card.status.label(), card.created)
            }
            Card::Editing(card) => {
                writeln!(f, "- [{}]", card.title)?;
                writeln!(f, "  [{}]", card.description)?;
                writeln!(f, "  <{}> <{}>", card.save_label, card.cancel_label)
            }
        }
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn strike(text: &str, struck: bool) -> String {
    if struck {
        format!("~~{text}~~")
    } else {
        text.to_string()
    }
}
