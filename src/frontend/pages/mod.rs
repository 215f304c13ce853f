mod home;
mod project_page;
mod repos;

pub use home::Home;
pub use project_page::ProjectPage;
pub use repos::Repos;
