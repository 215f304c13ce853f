use gloo_net::http::{Request, RequestBuilder};
use portfolio::config::Config;
use serde::de::DeserializeOwned;

/// API client error type
#[derive(Debug, Clone, PartialEq)]
pub enum ApiClientError {
    Network(String),
    Status { status: u16, message: String },
    Deserialization(String),
}

impl std::fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiClientError::Status { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiClientError::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

type Result<T> = std::result::Result<T, ApiClientError>;

fn config() -> Config {
    Config::compiled()
}

/// Helper function to handle API responses
async fn handle_response<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiClientError::Network(e.to_string()))?;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiClientError::Deserialization(e.to_string()))
    } else {
        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| response.status_text());
        Err(ApiClientError::Status { status, message })
    }
}

/// GET `{base}{path}` with query parameters and decode the JSON body.
async fn get_json<T: DeserializeOwned>(base: &str, path: &str, query: &[(&str, &str)]) -> Result<T> {
    let url = format!("{}{}", base, path);
    handle_response(Request::get(&url).query(query.iter().copied())).await
}

/// Code-hosting API
pub mod hosting {
    use super::*;
    use portfolio::models::Repo;

    pub async fn list_user_repos(user: &str) -> Result<Vec<Repo>> {
        let path = format!("/users/{}/repos", user);
        get_json(&config().hosting_url, &path, &[]).await
    }
}

/// Portfolio backend
pub mod backend {
    use super::*;
    use portfolio::models::{Project, ProjectsResponse};

    pub async fn list_projects(repository: &str) -> Result<Vec<Project>> {
        let response: ProjectsResponse = get_json(
            &config().backend_url,
            "/repositories",
            &[("repository", repository)],
        )
        .await?;
        Ok(response.projects)
    }
}
