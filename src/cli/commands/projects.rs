use serde::Serialize;
use tabled::{Table, Tabled};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, format_page_buttons, or_dash};
use crate::format::{display_name, join_languages};
use crate::models::Project;
use crate::view::{PageSlice, ProjectView, SortOrder, resolve_code_link};

/// View settings requested on the command line
#[derive(Debug, Clone, Default)]
pub struct ProjectsQuery {
    pub order: SortOrder,
    pub language: Option<String>,
    pub page: usize,
}

impl ProjectsQuery {
    fn view(&self) -> ProjectView {
        let mut view = ProjectView::new();
        view.set_sort_order(self.order);
        if let Some(code) = &self.language {
            view.set_filter(code);
        }
        view.go_to_page(self.page);
        view
    }
}

#[derive(Debug, Serialize)]
struct ProjectsPage<'a> {
    repository: &'a str,
    order: SortOrder,
    language: Option<&'a str>,
    /// Shared "view code" link, absent when the host doesn't list the repo
    code_link: Option<&'a str>,
    #[serde(flatten)]
    slice: &'a PageSlice,
}

#[derive(Tabled)]
struct ProjectDisplay {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Languages")]
    languages: String,
    #[tabled(rename = "Icons")]
    icons: String,
    #[tabled(rename = "Project")]
    link: String,
}

impl ProjectDisplay {
    fn new(project: &Project, catalog: &Catalog) -> Self {
        Self {
            name: display_name(&project.name),
            languages: or_dash(Some(join_languages(&project.language).as_str())),
            icons: project
                .language
                .iter()
                .map(|language| catalog.icon_for(language).glyph())
                .collect::<Vec<_>>()
                .join(" "),
            link: or_dash(Some(project.link.as_str())),
        }
    }
}

/// Fetch the repository's projects and, concurrently, its canonical URL
/// from `author`'s repository list.
///
/// A failed or unmatched URL lookup only leaves the link unset; a failed
/// project fetch is returned as the error.
pub async fn load_projects(
    api_client: &ApiClient,
    author: &str,
    repository: &str,
) -> CliResult<(Vec<Project>, Option<String>)> {
    let (projects, repos) = tokio::join!(
        api_client.list_projects(repository),
        api_client.list_user_repos(author)
    );

    let code_link = match repos {
        Ok(repos) => resolve_code_link(&repos, repository),
        Err(e) => {
            warn!(author, error = %e, "Failed to resolve repository link");
            None
        }
    };
    if code_link.is_none() {
        debug!(repository, "No code link for repository");
    }

    Ok((projects?, code_link))
}

/// List one page of a repository's projects
pub async fn list_projects(
    api_client: &ApiClient,
    catalog: &Catalog,
    author: &str,
    repository: &str,
    query: &ProjectsQuery,
    format: &str,
) -> CliResult<String> {
    let (projects, code_link) = load_projects(api_client, author, repository).await?;

    let view = query.view();
    let slice = view.page(&projects);
    if slice.page != view.current_page() {
        warn!(
            requested = view.current_page(),
            total = view.total_pages(&projects),
            shown = slice.page,
            "Page out of range"
        );
    }

    match format {
        "json" => {
            let page = ProjectsPage {
                repository,
                order: view.sort_order(),
                language: view.filter().map(|f| f.code()),
                code_link: code_link.as_deref(),
                slice: &slice,
            };
            Ok(serde_json::to_string_pretty(&page)?)
        }
        _ => Ok(format_page(
            repository,
            &view,
            &slice,
            code_link.as_deref(),
            catalog,
        )),
    }
}

fn format_page(
    repository: &str,
    view: &ProjectView,
    slice: &PageSlice,
    code_link: Option<&str>,
    catalog: &Catalog,
) -> String {
    let mut lines = vec![
        format!("Projects of {}", display_name(repository)),
        format!("Code: {}", or_dash(code_link)),
        format!(
            "Order: {} | Language: {}",
            view.sort_order().label(),
            view.filter().map(|f| f.code()).unwrap_or("all")
        ),
    ];

    if slice.is_empty() {
        lines.push("No projects found with the selected language.".to_string());
    } else {
        let rows: Vec<ProjectDisplay> = slice
            .projects()
            .map(|p| ProjectDisplay::new(p, catalog))
            .collect();
        let mut table = Table::new(rows);
        apply_table_style(&mut table);
        lines.push(table.to_string());
        lines.push(format!(
            "Page {} of {} ({} projects)",
            slice.page, slice.total_pages, slice.matched
        ));
    }

    lines.push(format!(
        "Pages: {}",
        format_page_buttons(slice.page, slice.pages())
    ));
    lines.join("\n")
}
