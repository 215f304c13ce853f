//! Endpoint configuration shared by the CLI and the browser build.

use std::env;

pub const BACKEND_URL_ENV: &str = "PORTFOLIO_BACKEND_URL";
pub const HOSTING_URL_ENV: &str = "PORTFOLIO_HOSTING_URL";
pub const AUTHOR_ENV: &str = "PORTFOLIO_AUTHOR";

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_HOSTING_URL: &str = "https://api.github.com";
pub const DEFAULT_AUTHOR: &str = "bergkley";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the portfolio backend serving `/repositories`
    pub backend_url: String,
    /// Base URL of the code-hosting REST API
    pub hosting_url: String,
    /// Account whose repositories make up the portfolio
    pub author: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            hosting_url: DEFAULT_HOSTING_URL.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl Config {
    /// Read the runtime environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::default()
            .with_backend_url(env::var(BACKEND_URL_ENV).ok())
            .with_hosting_url(env::var(HOSTING_URL_ENV).ok())
            .with_author(env::var(AUTHOR_ENV).ok())
    }

    /// Values baked in at compile time. The browser has no process
    /// environment, so Trunk builds read the variables here.
    pub fn compiled() -> Self {
        Self::default()
            .with_backend_url(option_env!("PORTFOLIO_BACKEND_URL").map(String::from))
            .with_hosting_url(option_env!("PORTFOLIO_HOSTING_URL").map(String::from))
            .with_author(option_env!("PORTFOLIO_AUTHOR").map(String::from))
    }

    pub fn with_backend_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = non_empty(url) {
            self.backend_url = trim_base(url);
        }
        self
    }

    pub fn with_hosting_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = non_empty(url) {
            self.hosting_url = trim_base(url);
        }
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        if let Some(author) = non_empty(author) {
            self.author = author.trim().to_string();
        }
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// Paths are appended with a leading slash.
fn trim_base(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
