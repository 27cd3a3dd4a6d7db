use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Deleted {
    pub message: String,
}

/// Records in creation order.
pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    let api = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

struct NotFound;

impl IntoResponse for NotFound {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": "Todo not found" }));
        (StatusCode::NOT_FOUND, body).into_response()
    }
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        description: input.description,
        completed: false,
        created_at: Utc::now(),
    };
    debug!(id = %todo.id, "todo created");
    db.write().await.push(todo.clone());
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Todo>, NotFound> {
    let todos = db.read().await;
    todos.iter().find(|t| t.id == id).cloned().map(Json).ok_or(NotFound)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, NotFound> {
    let mut todos = db.write().await;
    let todo = todos.iter_mut().find(|t| t.id == id).ok_or(NotFound)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(description) = input.description {
        todo.description = description;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    debug!(%id, "todo updated");
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Deleted>, NotFound> {
    let mut todos = db.write().await;
    let index = todos.iter().position(|t| t.id == id).ok_or(NotFound)?;
    todos.remove(index);
    debug!(%id, "todo deleted");
    Ok(Json(Deleted {
        message: "Todo deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: "t-1".to_string(),
            title: "Test".to_string(),
            description: String::new(),
            completed: false,
            created_at: "2024-05-01T12:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "t-1");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["description"], "");
        assert_eq!(json["completed"], false);
        assert_eq!(json["created_at"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn create_todo_defaults_description_to_empty() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"No description"}"#).unwrap();
        assert_eq!(input.title, "No description");
        assert_eq!(input.description, "");
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"description":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_all_fields_optional() {
        let input: UpdateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.description.is_none());
        assert!(input.completed.is_none());
    }

    #[test]
    fn update_todo_partial_fields() {
        let input: UpdateTodo = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert_eq!(input.completed, Some(true));
        assert!(input.title.is_none());
    }
}
