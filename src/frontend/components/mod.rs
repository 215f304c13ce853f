pub mod project_components;
pub mod repo_components;
pub mod ui_components;

pub use project_components::{LanguageIcons, ProjectCard, ProjectFilters};
pub use repo_components::RepoCard;
pub use ui_components::{BackButton, Loader, PageButtons};
