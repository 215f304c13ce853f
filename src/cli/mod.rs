pub mod api_client;
pub mod commands;
pub mod error;
pub mod utils;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::catalog::Catalog;
use crate::config::Config;
use api_client::ApiClient;
use commands::projects::ProjectsQuery;
use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(author, version, about = "Browse a portfolio's repositories and projects", long_about = None)]
pub struct Cli {
    /// Override the backend URL (default: PORTFOLIO_BACKEND_URL env or http://localhost:3000)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Override the hosting API URL (default: PORTFOLIO_HOSTING_URL env or https://api.github.com)
    #[arg(long, global = true)]
    pub hosting_url: Option<String>,

    /// Portfolio author (default: PORTFOLIO_AUTHOR env or bergkley)
    #[arg(long, global = true)]
    pub author: Option<String>,

    /// YAML catalog overriding the allow-list, icons and language filters
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List a user's showcased repositories
    Repos {
        /// User name (defaults to the portfolio author)
        user: Option<String>,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// List the projects recorded for a repository
    Projects {
        /// Repository name
        repository: String,
        /// Sort order by name (asc or desc)
        #[arg(long, default_value = "asc")]
        order: String,
        /// Only projects using this language (e.g. JAVASCRIPT)
        #[arg(long)]
        language: Option<String>,
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

/// Initialize tracing subscriber with env filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "portfolio=debug"
    } else {
        "portfolio=warn"
    };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn load_catalog(path: Option<&PathBuf>) -> CliResult<Catalog> {
    match path {
        Some(path) => Ok(Catalog::load(path)?),
        None => Ok(Catalog::default()),
    }
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = Config::from_env()
        .with_backend_url(cli.backend_url)
        .with_hosting_url(cli.hosting_url)
        .with_author(cli.author);
    let catalog = load_catalog(cli.catalog.as_ref())?;
    let api_client = ApiClient::new(&config)?;

    let output = match cli.command {
        Some(Commands::Repos { user, format }) => {
            let user = user.unwrap_or_else(|| config.author.clone());
            commands::repos::list_repos(&api_client, &catalog, &user, &format).await?
        }
        Some(Commands::Projects {
            repository,
            order,
            language,
            page,
            format,
        }) => {
            let query = ProjectsQuery {
                order: order.parse().map_err(|e: crate::view::ParseSortOrderError| {
                    CliError::InvalidArgument {
                        message: e.to_string(),
                    }
                })?,
                language,
                page,
            };
            commands::projects::list_projects(
                &api_client,
                &catalog,
                &config.author,
                &repository,
                &query,
                &format,
            )
            .await?
        }
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["portfolio", "--help"]);
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}
