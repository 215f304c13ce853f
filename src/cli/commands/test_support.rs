//! In-process fake of the hosting API and the portfolio backend.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::cli::api_client::ApiClient;
use crate::config::Config;

pub const AUTHOR: &str = "bergkley";

// Initialize crypto provider once for all tests
pub fn init_crypto() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

#[derive(Default)]
pub struct Fixture {
    repos: HashMap<String, Value>,
    projects: HashMap<String, Value>,
    failing_users: HashMap<String, u16>,
}

impl Fixture {
    /// The author's account with five repos (three allow-listed) and
    /// project records for two of them plus one repo the host doesn't know.
    pub fn portfolio() -> Self {
        Self::default()
            .with_repos(
                AUTHOR,
                json!([
                    repo_json("dotfiles", Some("Shell"), 0, 0),
                    repo_json("FRONT-END", Some("TypeScript"), 4, 1),
                    repo_json("BACK-END_FRONT-END", Some("JavaScript"), 2, 3),
                    repo_json("old-site", None, 0, 0),
                    repo_json("PORTFOLIO-BERGKLEY", Some("TypeScript"), 9, 2),
                ]),
            )
            .with_projects(
                "FRONT-END",
                json!({
                    "projects": [
                        project_json("1", "gamma-store", &["React", "TypeScript"]),
                        project_json("2", "alpha-blog", &["HTML", "CSS"]),
                        project_json("3", "eta-chat", &["Node.js"]),
                        project_json("4", "beta-api", &["Node.js", "JavaScript"]),
                        project_json("5", "zeta-dashboard", &["Next.js", "TypeScript"]),
                        project_json("6", "delta-landing", &["HTML", "CSS", "JavaScript"]),
                        project_json("7", "epsilon-game", &["JavaScript"]),
                    ]
                }),
            )
            .with_projects(
                "BACK-END_FRONT-END",
                json!({
                    "projects": [
                        project_json("a1", "typed-service", &["TypeScript"]),
                        project_json("a2", "plain-service", &["JavaScript"]),
                    ]
                }),
            )
            .with_projects(
                "ORPHAN",
                json!({ "projects": [project_json("o1", "lonely-project", &["Rust"])] }),
            )
    }

    pub fn with_repos(mut self, user: &str, body: Value) -> Self {
        self.repos.insert(user.to_string(), body);
        self
    }

    pub fn with_projects(mut self, repository: &str, body: Value) -> Self {
        self.projects.insert(repository.to_string(), body);
        self
    }

    /// Make `GET /users/{user}/repos` answer with `status`.
    pub fn with_failing_user(mut self, user: &str, status: u16) -> Self {
        self.failing_users.insert(user.to_string(), status);
        self
    }
}

pub fn repo_json(name: &str, language: Option<&str>, stars: u64, forks: u64) -> Value {
    json!({
        "id": name.len(),
        "name": name,
        "full_name": format!("{}/{}", AUTHOR, name),
        "language": language,
        "html_url": format!("https://github.com/{}/{}", AUTHOR, name),
        "stargazers_count": stars,
        "forks_count": forks,
        "private": false
    })
}

pub fn project_json(id: &str, name: &str, languages: &[&str]) -> Value {
    json!({
        "_id": id,
        "name": name,
        "language": languages,
        "link": format!("https://{}.example.dev", name)
    })
}

async fn user_repos(State(fixture): State<Arc<Fixture>>, Path(user): Path<String>) -> Response {
    if let Some(status) = fixture.failing_users.get(&user) {
        let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, Json(json!({ "message": "API rate limit exceeded" }))).into_response();
    }
    match fixture.repos.get(&user) {
        Some(body) => Json(body.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" }))).into_response(),
    }
}

#[derive(Deserialize)]
struct RepositoryQuery {
    repository: String,
}

async fn repositories(
    State(fixture): State<Arc<Fixture>>,
    Query(query): Query<RepositoryQuery>,
) -> Response {
    match fixture.projects.get(&query.repository) {
        Some(body) => Json(body.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "repository not found").into_response(),
    }
}

/// Spawn a fake server on an ephemeral port; it serves both APIs.
pub async fn spawn_test_server(fixture: Fixture) -> (String, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route("/users/{user}/repos", get(user_repos))
        .route("/repositories", get(repositories))
        .with_state(Arc::new(fixture));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (url, handle)
}

/// Client pointed at `url` for both the backend and the hosting API
pub fn client_for(url: &str) -> ApiClient {
    init_crypto();
    let config = Config::default()
        .with_backend_url(Some(url.to_string()))
        .with_hosting_url(Some(url.to_string()));
    ApiClient::new(&config).unwrap()
}
