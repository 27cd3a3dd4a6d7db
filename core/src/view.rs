//! The todo view: state store plus the sync rules that keep it fresh.
//!
//! # Design
//! `TodoView` never performs I/O. Every user intent that needs the server
//! returns an `Outgoing` request tagged with a `RequestId`; the host runs it
//! and reports the outcome through `TodoView::complete`. A completion may
//! yield one follow-up request (the list refresh after a mutation), which
//! the host runs the same way.
//!
//! In-flight requests are not ordered against each other. When several list
//! refreshes overlap, whichever completes last wins.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, error, warn};

use crate::client::TodoClient;
use crate::config::ViewConfig;
use crate::draft::NewTodoDraft;
use crate::edit::EditState;
use crate::error::{ApiError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::render::{render, Screen};
use crate::types::{Todo, TodoId, UpdateTodo};

/// Handle pairing a completion with the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A request the host must execute and later report via `complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    pub id: RequestId,
    pub request: HttpRequest,
}

/// What the host observed for a request.
pub type Completion = Result<HttpResponse, TransportError>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    List,
    Create,
    Update(TodoId),
    Delete(TodoId),
}

impl Pending {
    fn operation(&self) -> &'static str {
        match self {
            Pending::List => "list",
            Pending::Create => "create",
            Pending::Update(_) => "update",
            Pending::Delete(_) => "delete",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TodoView {
    client: TodoClient,
    todos: Vec<Todo>,
    draft: NewTodoDraft,
    edit: EditState,
    in_flight: HashMap<RequestId, Pending>,
    next_request: u64,
}

impl TodoView {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            todos: Vec::new(),
            draft: NewTodoDraft::default(),
            edit: EditState::default(),
            in_flight: HashMap::new(),
            next_request: 0,
        }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(config.client())
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn draft(&self) -> &NewTodoDraft {
        &self.draft
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// Number of requests handed out and not yet completed.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn render(&self) -> Screen {
        render(&self.todos, &self.draft, &self.edit)
    }

    // ---------------------------------------------------------------------
    // Intents
    // ---------------------------------------------------------------------

    /// Initial load.
    pub fn mount(&mut self) -> Outgoing {
        self.refresh()
    }

    pub fn refresh(&mut self) -> Outgoing {
        let request = self.client.build_list_todos();
        self.issue(Pending::List, request)
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Send the creation draft. Blank titles send nothing and keep the draft.
    pub fn submit(&mut self) -> Option<Outgoing> {
        if !self.draft.is_submittable() {
            debug!("ignoring submit with blank title");
            return None;
        }
        match self.client.build_create_todo(&self.draft.to_request()) {
            Ok(request) => Some(self.issue(Pending::Create, request)),
            Err(err) => {
                error!(operation = "create", error = %err, "failed to build request");
                None
            }
        }
    }

    pub fn update(&mut self, id: &TodoId, patch: &UpdateTodo) -> Option<Outgoing> {
        match self.client.build_update_todo(id, patch) {
            Ok(request) => Some(self.issue(Pending::Update(id.clone()), request)),
            Err(err) => {
                error!(operation = "update", %id, error = %err, "failed to build request");
                None
            }
        }
    }

    /// Flip `completed` on the record as currently listed.
    pub fn toggle_complete(&mut self, id: &TodoId) -> Option<Outgoing> {
        let Some(completed) = self.find(id).map(|todo| todo.completed) else {
            warn!(%id, "toggle on unknown todo");
            return None;
        };
        self.update(id, &UpdateTodo::completed(!completed))
    }

    /// Enter edit mode for `id`, abandoning any other edit in progress.
    pub fn start_edit(&mut self, id: &TodoId) {
        let Some(todo) = self.todos.iter().find(|t| &t.id == id) else {
            warn!(%id, "edit on unknown todo");
            return;
        };
        if let Some(previous) = self.edit.draft().filter(|d| &d.id != id) {
            debug!(abandoned = %previous.id, "discarding unsaved edit");
        }
        self.edit.start(todo);
    }

    pub fn set_edit_title(&mut self, title: impl Into<String>) {
        if let Some(draft) = self.edit.draft_mut() {
            draft.title = title.into();
        }
    }

    pub fn set_edit_description(&mut self, description: impl Into<String>) {
        if let Some(draft) = self.edit.draft_mut() {
            draft.description = description.into();
        }
    }

    /// Send the edit draft and return to viewing, whatever the outcome.
    pub fn save_edit(&mut self) -> Option<Outgoing> {
        let (id, patch) = self.edit.save()?;
        self.update(&id, &patch)
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    pub fn delete(&mut self, id: &TodoId) -> Outgoing {
        let request = self.client.build_delete_todo(id);
        self.issue(Pending::Delete(id.clone()), request)
    }

    // ---------------------------------------------------------------------
    // Completions
    // ---------------------------------------------------------------------

    /// Apply the outcome of a request. Returns the list refresh that follows
    /// a successful mutation.
    pub fn complete(&mut self, id: RequestId, outcome: Completion) -> Option<Outgoing> {
        let Some(pending) = self.in_flight.remove(&id) else {
            warn!(request = %id, "completion for unknown request");
            return None;
        };
        let response = match outcome {
            Ok(response) => response,
            Err(err) => return log_failure(&pending, ApiError::from(err)),
        };

        match &pending {
            Pending::List => {
                match self.client.parse_list_todos(response) {
                    Ok(todos) => {
                        debug!(request = %id, count = todos.len(), "list refreshed");
                        self.todos = todos;
                    }
                    Err(err) => {
                        log_failure(&pending, err);
                    }
                }
                None
            }
            Pending::Create => match self.client.check_response(&response) {
                Ok(()) => {
                    if has_body(&response) {
                        match self.client.parse_create_todo(response) {
                            Ok(created) => debug!(id = %created.id, "todo created"),
                            Err(err) => warn_unexpected_body(&pending, &err),
                        }
                    }
                    self.draft.clear();
                    Some(self.refresh())
                }
                Err(err) => log_failure(&pending, err),
            },
            Pending::Update(_) => match self.client.check_response(&response) {
                Ok(()) => {
                    if has_body(&response) {
                        if let Err(err) = self.client.parse_update_todo(response) {
                            warn_unexpected_body(&pending, &err);
                        }
                    }
                    Some(self.refresh())
                }
                Err(err) => log_failure(&pending, err),
            },
            Pending::Delete(_) => match self.client.parse_delete_todo(response) {
                Ok(()) => Some(self.refresh()),
                Err(err) => log_failure(&pending, err),
            },
        }
    }

    fn issue(&mut self, pending: Pending, request: HttpRequest) -> Outgoing {
        let id = RequestId(self.next_request);
        self.next_request += 1;
        debug!(request = %id, method = %request.method, path = %request.path, "issuing request");
        self.in_flight.insert(id, pending);
        Outgoing { id, request }
    }

    fn find(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| &todo.id == id)
    }
}

/// Failures never reach the rendered screen; the log is the only trace.
fn log_failure(pending: &Pending, err: ApiError) -> Option<Outgoing> {
    let operation = pending.operation();
    match pending {
        Pending::Update(id) | Pending::Delete(id) => {
            error!(operation, %id, error = %err, "todo operation failed");
        }
        Pending::List | Pending::Create => {
            error!(operation, error = %err, "todo operation failed");
        }
    }
    None
}

fn has_body(response: &HttpResponse) -> bool {
    !response.body.trim().is_empty()
}

/// The server already applied the mutation; the refresh shows its real state.
fn warn_unexpected_body(pending: &Pending, err: &ApiError) {
    warn!(operation = pending.operation(), error = %err, "mutation succeeded with unexpected body");
}
