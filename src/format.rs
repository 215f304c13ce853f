//! Display helpers shared by the browser and terminal renderings.

/// Separator between languages on a project card.
pub const LANGUAGE_SEPARATOR: &str = " / ";

/// Project names use hyphens as word separators; show them as spaces.
pub fn display_name(name: &str) -> String {
    name.replace('-', " ")
}

pub fn join_languages(languages: &[String]) -> String {
    languages.join(LANGUAGE_SEPARATOR)
}

/// Route of the repository list screen for a user.
pub fn repos_path(user: &str) -> String {
    format!("/repos/{}", user)
}

/// Route of the projects screen for a repository.
pub fn project_path(repository: &str) -> String {
    format!("/project/{}", repository)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_replaces_every_hyphen() {
        assert_eq!(display_name("to-do-list-app"), "to do list app");
        assert_eq!(display_name("PORTFOLIO"), "PORTFOLIO");
    }

    #[test]
    fn test_join_languages() {
        let languages = vec!["React".to_string(), "TypeScript".to_string()];
        assert_eq!(join_languages(&languages), "React / TypeScript");
        assert_eq!(join_languages(&[]), "");
    }

    #[test]
    fn test_routes() {
        assert_eq!(repos_path("bergkley"), "/repos/bergkley");
        assert_eq!(project_path("FRONT-END"), "/project/FRONT-END");
    }
}
