//! Where the view finds its API.

use crate::client::TodoClient;

/// Environment variable overriding the server base URL.
pub const API_URL_VAR: &str = "TODO_API_URL";

/// Base URL used when no override is supplied.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub base_url: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ViewConfig {
    /// Load `.env` if present, then read `TODO_API_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_override(std::env::var(API_URL_VAR).ok())
    }

    /// Blank overrides fall back to the default.
    pub fn from_override(base_url: Option<String>) -> Self {
        match base_url {
            Some(url) if !url.trim().is_empty() => Self {
                base_url: url.trim().to_string(),
            },
            _ => Self::default(),
        }
    }

    pub fn api_root(&self) -> String {
        format!("{}/api", self.base_url.trim_end_matches('/'))
    }

    pub fn client(&self) -> TodoClient {
        TodoClient::new(&self.api_root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_dev_server() {
        let config = ViewConfig::from_override(None);
        assert_eq!(config.api_root(), "http://localhost:8000/api");
    }

    #[test]
    fn blank_override_is_ignored() {
        assert_eq!(ViewConfig::from_override(Some("  ".into())), ViewConfig::default());
    }

    #[test]
    fn override_replaces_base() {
        let config = ViewConfig::from_override(Some("https://todo.example.com/".into()));
        assert_eq!(config.api_root(), "https://todo.example.com/api");
        assert_eq!(
            config.client().build_list_todos().path,
            "https://todo.example.com/api/todos"
        );
    }
}
