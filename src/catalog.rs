//! Portfolio catalog: which repositories are showcased and how languages
//! are drawn.
//!
//! The built-in defaults describe the author's portfolio. The CLI can load a
//! YAML file with the same shape to override any of the three tables:
//!
//! ```yaml
//! allowed_repos: [FRONT-END, BACK-END_FRONT-END]
//! icons:
//!   javascript: javascript
//!   svelte: code
//! filters:
//!   - { code: JAVASCRIPT, label: JavaScript }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Repo;

const ALLOWED_REPOS: [&str; 3] = ["BACK-END_FRONT-END", "FRONT-END", "PORTFOLIO-BERGKLEY"];

const LANGUAGE_ICONS: [(&str, Icon); 7] = [
    ("JAVASCRIPT", Icon::JavaScript),
    ("NODE.JS", Icon::NodeJs),
    ("TYPESCRIPT", Icon::TypeScript),
    ("HTML", Icon::Html),
    ("CSS", Icon::Css),
    ("REACT", Icon::React),
    ("NEXT.JS", Icon::NextJs),
];

const LANGUAGE_FILTERS: [(&str, &str); 6] = [
    ("JAVASCRIPT", "JavaScript"),
    ("NODE.JS", "Node.js"),
    ("TYPESCRIPT", "TypeScript"),
    ("HTML", "HTML"),
    ("CSS", "CSS"),
    ("REACT", "React"),
];

/// Language icon shown on project cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    JavaScript,
    NodeJs,
    TypeScript,
    Html,
    Css,
    React,
    NextJs,
    /// Generic fallback for languages without a dedicated icon
    Code,
}

impl Icon {
    /// Stable identifier, used as a CSS class suffix.
    pub fn slug(self) -> &'static str {
        match self {
            Icon::JavaScript => "javascript",
            Icon::NodeJs => "nodejs",
            Icon::TypeScript => "typescript",
            Icon::Html => "html",
            Icon::Css => "css",
            Icon::React => "react",
            Icon::NextJs => "nextjs",
            Icon::Code => "code",
        }
    }

    /// Short text badge used where no artwork is available.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::JavaScript => "JS",
            Icon::NodeJs => "Node",
            Icon::TypeScript => "TS",
            Icon::Html => "HTML",
            Icon::Css => "CSS",
            Icon::React => "React",
            Icon::NextJs => "Next",
            Icon::Code => "</>",
        }
    }
}

/// Entry of the language filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Upper-case code matched against project languages
    pub code: String,
    pub label: String,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Repository names the list screen may show (exact, case-sensitive)
    pub allowed_repos: Vec<String>,
    /// Upper-case language name to icon
    pub icons: BTreeMap<String, Icon>,
    pub filters: Vec<FilterOption>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            allowed_repos: ALLOWED_REPOS.iter().map(|name| name.to_string()).collect(),
            icons: LANGUAGE_ICONS
                .iter()
                .map(|(language, icon)| (language.to_string(), *icon))
                .collect(),
            filters: LANGUAGE_FILTERS
                .iter()
                .map(|(code, label)| FilterOption {
                    code: code.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }
}

impl Catalog {
    /// Parse a YAML catalog. Keys missing from the document keep their
    /// built-in defaults.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(source)?;
        Ok(catalog.normalized())
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    // Icon keys and filter codes are compared upper-cased.
    fn normalized(mut self) -> Self {
        self.icons = self
            .icons
            .into_iter()
            .map(|(language, icon)| (language.to_uppercase(), icon))
            .collect();
        for filter in &mut self.filters {
            filter.code = filter.code.to_uppercase();
        }
        self
    }

    pub fn is_allowed(&self, name: &str) -> bool {
        self.allowed_repos.iter().any(|allowed| allowed == name)
    }

    /// Keep only allow-listed repositories, in the order received.
    pub fn select_allowed(&self, repos: Vec<Repo>) -> Vec<Repo> {
        repos
            .into_iter()
            .filter(|repo| self.is_allowed(&repo.name))
            .collect()
    }

    /// Icon for a language, case-insensitive, falling back to [`Icon::Code`].
    pub fn icon_for(&self, language: &str) -> Icon {
        self.icons
            .get(&language.to_uppercase())
            .copied()
            .unwrap_or(Icon::Code)
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;
