use crate::models::Project;

/// Selected language filter, stored upper-cased.
///
/// A project matches when any of its languages contains the code,
/// ignoring case. Matching is by substring, so `JAVA` also matches
/// `JavaScript`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFilter(String);

impl LanguageFilter {
    /// Returns `None` for a blank code, which means "all languages".
    pub fn new(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() {
            None
        } else {
            Some(Self(code.to_uppercase()))
        }
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, project: &Project) -> bool {
        project
            .language
            .iter()
            .any(|language| language.to_uppercase().contains(&self.0))
    }
}
