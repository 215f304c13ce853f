use serde::{Deserialize, Serialize};

/// Project record served by the portfolio backend.
///
/// The backend stores these in a document database and emits the identifier
/// as `_id`; plain `id` is accepted as well.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub language: Vec<String>,
    #[serde(default)]
    pub link: String,
}

/// Repository summary from the hosting API (`GET /users/{user}/repos`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repo {
    pub name: String,
    /// Primary language; the hosting API reports `null` for repos without code.
    #[serde(default)]
    pub language: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub stargazers_count: u64,
}

/// Body of `GET /repositories?repository={name}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub projects: Vec<Project>,
}
