//! Todo list view core: creation form, editable list, REST sync.
//!
//! # Overview
//! `TodoView` holds the cached records, the creation draft and at most one
//! edit draft. User intents become `HttpRequest` values (host-does-IO); the
//! host executes them and feeds the responses back. Every successful
//! mutation is followed by a full list refresh, so the cache always equals
//! the last list the server returned.
//!
//! # Design
//! - `TodoClient` is stateless: `build_*` produces a request, `parse_*`
//!   consumes a response.
//! - `TodoView` tracks in-flight requests by `RequestId` and logs failures
//!   through `tracing`; nothing is retried and nothing reaches the screen.
//! - `render` is a pure function of view state to a `Screen` tree.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod draft;
pub mod edit;
pub mod error;
pub mod http;
pub mod render;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::ViewConfig;
pub use draft::{EditDraft, NewTodoDraft};
pub use edit::EditState;
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use render::{render, Screen};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
pub use view::{Completion, Outgoing, RequestId, TodoView};
