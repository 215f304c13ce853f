use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Project;

/// Sort direction of the projects list, by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Human label for the toggle button.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid sort order '{0}', expected 'asc' or 'desc'")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

// Case-insensitive by name; raw name then id break ties so the order is
// total and Desc is the exact reverse of Asc.
fn compare(a: &Project, b: &Project) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort in place by name in the given direction.
pub fn sort_projects(projects: &mut [Project], order: SortOrder) {
    match order {
        SortOrder::Asc => projects.sort_by(compare),
        SortOrder::Desc => projects.sort_by(|a, b| compare(b, a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            language: vec![],
            link: String::new(),
        }
    }

    fn names(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(SortOrder::Asc.toggle(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggle(), SortOrder::Asc);
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }

    #[test]
    fn test_parse() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!(" DESC ".parse::<SortOrder>(), Ok(SortOrder::Desc));
        let err = "sideways".parse::<SortOrder>().unwrap_err();
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let mut projects = vec![
            project("1", "weather-app"),
            project("2", "api-gateway"),
            project("3", "landing-page"),
        ];

        sort_projects(&mut projects, SortOrder::Asc);
        assert_eq!(names(&projects), vec!["api-gateway", "landing-page", "weather-app"]);

        sort_projects(&mut projects, SortOrder::Desc);
        assert_eq!(names(&projects), vec!["weather-app", "landing-page", "api-gateway"]);
    }

    #[test]
    fn test_sort_ignores_letter_case() {
        let mut projects = vec![
            project("1", "Weather-app"),
            project("2", "api-rest"),
            project("3", "Blog"),
            project("4", "calculator"),
        ];
        sort_projects(&mut projects, SortOrder::Asc);
        assert_eq!(
            names(&projects),
            vec!["api-rest", "Blog", "calculator", "Weather-app"]
        );

        sort_projects(&mut projects, SortOrder::Desc);
        assert_eq!(
            names(&projects),
            vec!["Weather-app", "calculator", "Blog", "api-rest"]
        );
    }

    #[test]
    fn test_names_differing_only_in_case_have_a_fixed_order() {
        let mut asc = vec![project("1", "blog"), project("2", "Blog")];
        let mut desc = asc.clone();

        sort_projects(&mut asc, SortOrder::Asc);
        sort_projects(&mut desc, SortOrder::Desc);
        assert_eq!(names(&asc), vec!["Blog", "blog"]);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_desc_exactly_reverses_asc_with_duplicate_names() {
        let mut asc = vec![
            project("b", "clone"),
            project("a", "clone"),
            project("c", "alpha"),
        ];
        let mut desc = asc.clone();

        sort_projects(&mut asc, SortOrder::Asc);
        sort_projects(&mut desc, SortOrder::Desc);
        desc.reverse();

        assert_eq!(asc, desc);
    }
}
