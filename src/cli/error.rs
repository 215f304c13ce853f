use miette::Diagnostic;
use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Failed to connect to {url}")]
    #[diagnostic(
        code(portfolio::cli::connection_failed),
        help(
            "Is the service reachable? Check --backend-url / --hosting-url or the PORTFOLIO_BACKEND_URL and PORTFOLIO_HOSTING_URL environment variables."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client")]
    #[diagnostic(code(portfolio::cli::client_init))]
    ClientInit {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response: {message}")]
    #[diagnostic(
        code(portfolio::cli::invalid_response),
        help("The server returned data in an unexpected format.")
    )]
    InvalidResponse { message: String },

    #[error("API error ({status}): {message}")]
    #[diagnostic(code(portfolio::cli::api_error))]
    ApiError { status: u16, message: String },

    #[error(transparent)]
    #[diagnostic(
        code(portfolio::cli::catalog),
        help("Catalog files are YAML with allowed_repos, icons and filters keys.")
    )]
    Catalog(#[from] CatalogError),

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(portfolio::cli::invalid_argument))]
    InvalidArgument { message: String },
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            CliError::ConnectionFailed {
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
                source: e,
            }
        } else {
            CliError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
