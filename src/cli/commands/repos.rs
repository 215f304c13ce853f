use std::fmt::Display;

use tabled::{Table, Tabled};
use tracing::warn;

use crate::catalog::Catalog;
use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, or_dash, truncate_with_ellipsis};
use crate::format::project_path;
use crate::models::Repo;

#[derive(Tabled)]
struct RepoDisplay {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "★")]
    stars: u64,
    #[tabled(rename = "Forks")]
    forks: u64,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Projects")]
    projects: String,
}

impl From<&Repo> for RepoDisplay {
    fn from(repo: &Repo) -> Self {
        Self {
            name: repo.name.clone(),
            language: or_dash(repo.language.as_deref()),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            code: truncate_with_ellipsis(&repo.html_url, 60),
            projects: project_path(&repo.name),
        }
    }
}

/// The list screen never shows an error: a failed fetch reads as "no repos".
pub fn degrade_to_empty<E: Display>(user: &str, result: Result<Vec<Repo>, E>) -> Vec<Repo> {
    result.unwrap_or_else(|e| {
        warn!(user, error = %e, "Failed to fetch repositories, showing none");
        Vec::new()
    })
}

/// Fetch `user`'s repositories and keep the allow-listed ones.
pub async fn fetch_allowed_repos(api_client: &ApiClient, catalog: &Catalog, user: &str) -> Vec<Repo> {
    let repos = degrade_to_empty(user, api_client.list_user_repos(user).await);
    catalog.select_allowed(repos)
}

/// List the showcased repositories of `user`
pub async fn list_repos(
    api_client: &ApiClient,
    catalog: &Catalog,
    user: &str,
    format: &str,
) -> CliResult<String> {
    let repos = fetch_allowed_repos(api_client, catalog, user).await;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&repos)?),
        _ => Ok(format_table(user, &repos)),
    }
}

fn format_table(user: &str, repos: &[Repo]) -> String {
    if repos.is_empty() {
        return format!("No repositories found for {}.", user);
    }

    let display_repos: Vec<RepoDisplay> = repos.iter().map(|r| r.into()).collect();
    let mut table = Table::new(display_repos);
    apply_table_style(&mut table);
    format!("Repositories of {}\n{}", user, table)
}
