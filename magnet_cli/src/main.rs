mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use magnet_lib::MagnetClient;

/// Covers `magnet`, `magnet_api` and `magnet_lib` targets only.
const DEFAULT_LOG_FILTER: &str = "magnet=warn";

#[derive(Parser)]
#[command(name = "magnet", version)]
#[command(about = "Magnet CLI: issues, pages, and search")]
#[command(
    long_about = "Magnet CLI talks to the Magnet API. Set MAGNET_API_KEY. \
                  Optional: MAGNET_API_URL (default https://www.magnet.run)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List, get, or create Magnet issues
    Issues(commands::issues::IssuesArgs),
    /// List, get, or create Magnet pages
    Pages(commands::pages::PagesArgs),
    /// Search issues and pages
    Search(commands::search::SearchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let client = MagnetClient::from_env_or_exit();

    match &cli.command {
        Commands::Issues(args) => commands::issues::run(args, &client).await?,
        Commands::Pages(args) => commands::pages::run(args, &client).await?,
        Commands::Search(args) => commands::search::run(args, &client).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::commands::issues::IssuesCommand;
    use crate::commands::pages::PagesCommand;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn issues_list_flags() {
        let cli = Cli::try_parse_from([
            "magnet", "issues", "list", "--search", "crash", "--cursor", "c1",
        ])
        .unwrap();
        let Commands::Issues(args) = cli.command else {
            panic!("expected issues");
        };
        let IssuesCommand::List(list) = args.command else {
            panic!("expected list");
        };
        assert_eq!(list.search.as_deref(), Some("crash"));
        assert_eq!(list.limit, None);
        let query = commands::list_query(list.search.as_deref(), list.limit, list.cursor.as_deref());
        assert_eq!(query.effective_limit(), Some(50));
    }

    #[test]
    fn issues_create_defaults_base_branch() {
        let cli = Cli::try_parse_from(["magnet", "issues", "create", "--description", "Fix it"])
            .unwrap();
        let Commands::Issues(args) = cli.command else {
            panic!("expected issues");
        };
        let IssuesCommand::Create(create) = args.command else {
            panic!("expected create");
        };
        assert_eq!(create.base_branch, "main");
        assert!(create.title.is_none());
    }

    #[test]
    fn issues_create_requires_description() {
        assert!(Cli::try_parse_from(["magnet", "issues", "create"]).is_err());
    }

    #[test]
    fn pages_get_takes_id() {
        let cli = Cli::try_parse_from(["magnet", "pages", "get", "pg_01"]).unwrap();
        let Commands::Pages(args) = cli.command else {
            panic!("expected pages");
        };
        let PagesCommand::Get(get) = args.command else {
            panic!("expected get");
        };
        assert_eq!(get.id, "pg_01");
    }

    #[test]
    fn pages_create_requires_title() {
        assert!(Cli::try_parse_from(["magnet", "pages", "create", "--markdown", "x"]).is_err());
    }

    #[test]
    fn create_rejects_empty_required_values() {
        assert!(Cli::try_parse_from(["magnet", "issues", "create", "--description", ""]).is_err());
        assert!(Cli::try_parse_from(["magnet", "pages", "create", "--title", ""]).is_err());
    }

    #[test]
    fn default_log_filter_is_scoped() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        assert!(DEFAULT_LOG_FILTER.starts_with("magnet="));
    }

    #[test]
    fn search_requires_query() {
        assert!(Cli::try_parse_from(["magnet", "search"]).is_err());
        let cli = Cli::try_parse_from(["magnet", "search", "login", "--types", "page"]).unwrap();
        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.query, "login");
        assert_eq!(args.types.as_deref(), Some("page"));
    }
}
