use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cli::error::{CliError, CliResult};
use crate::config::Config;
use crate::models::{Project, ProjectsResponse, Repo};

/// The hosting API rejects requests without a user agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the portfolio backend and the code-hosting API
pub struct ApiClient {
    backend_url: String,
    hosting_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> CliResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| CliError::ClientInit { source })?;

        Ok(Self {
            backend_url: config.backend_url.clone(),
            hosting_url: config.hosting_url.clone(),
            client,
        })
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn hosting_url(&self) -> &str {
        &self.hosting_url
    }

    /// GET `{base}{path}` with optional query parameters and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        base: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> CliResult<T> {
        let url = format!("{}{}", base, path);
        debug!(%url, ?query, "GET");

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// `GET /users/{user}/repos` on the hosting API
    pub async fn list_user_repos(&self, user: &str) -> CliResult<Vec<Repo>> {
        let path = format!("/users/{}/repos", user);
        self.get_json(&self.hosting_url, &path, &[]).await
    }

    /// `GET /repositories?repository={name}` on the backend
    pub async fn list_projects(&self, repository: &str) -> CliResult<Vec<Project>> {
        let response: ProjectsResponse = self
            .get_json(&self.backend_url, "/repositories", &[("repository", repository)])
            .await?;
        Ok(response.projects)
    }

    /// Decode a success body, or turn the status and body text into
    /// `CliError::ApiError`.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> CliResult<T> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| CliError::InvalidResponse {
                    message: e.to_string(),
                })
        } else {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(CliError::ApiError {
                status,
                message: error_text,
            })
        }
    }
}
