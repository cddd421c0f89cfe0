use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use novamatch_application::IdentitySession;
use novamatch_core::config::ConfigLayer;
use novamatch_core::matchmaking::MatchFilters;
use novamatch_core::profile::Stage;
use novamatch_core::RemoteGateway;
use novamatch_infrastructure::{ConfigService, FileSessionStorage, HttpGateway, NovaPaths};
use tokio::sync::mpsc;

mod app;
mod commands;
mod console;
mod logging;
mod repl;
mod screens;

use app::{App, ReloadLists};
use console::{ConsoleIdentityProvider, ConsoleNotifier};

#[derive(Parser)]
#[command(name = "novamatch")]
#[command(about = "NovaMatch - connect founders, investors, and mentors", long_about = None)]
struct Cli {
    /// Backend base URL (overrides config file and BACKEND_URL)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Path to an alternative config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the latest startups
    Startups,
    /// List the latest investors
    Investors,
    /// Search for startup/investor matches
    Match {
        /// Comma-separated industries
        #[arg(long, default_value = "")]
        industry: String,
        #[arg(long)]
        stage: Option<Stage>,
        #[arg(long, default_value = "")]
        geography: String,
        #[arg(long, default_value = "")]
        ticket_min: String,
        #[arg(long, default_value = "")]
        ticket_max: String,
    },
    /// Show the signed-in profile
    Whoami,
    /// Forget the signed-in profile
    SignOut,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let _log_guard = logging::init(&NovaPaths::logs_dir()?)?;

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new()?,
    };
    let config = config_service.resolve(&ConfigLayer {
        backend_url: cli.backend_url.clone(),
        google_client_id: None,
    })?;
    tracing::info!(backend_url = %config.backend_url, "Starting NovaMatch");

    let gateway: Arc<dyn RemoteGateway> = Arc::new(HttpGateway::from_config(&config));
    let storage = Arc::new(FileSessionStorage::new()?);

    match cli.command {
        Some(Commands::Startups) => commands::oneshot::startups(gateway.as_ref()).await,
        Some(Commands::Investors) => commands::oneshot::investors(gateway.as_ref()).await,
        Some(Commands::Match {
            industry,
            stage,
            geography,
            ticket_min,
            ticket_max,
        }) => {
            let filters = MatchFilters {
                industry,
                stage,
                geography,
                ticket_min,
                ticket_max,
            };
            commands::oneshot::run_match(gateway, filters).await
        }
        Some(Commands::Whoami) => {
            let session = IdentitySession::init(storage).await;
            commands::oneshot::whoami(&session).await
        }
        Some(Commands::SignOut) => {
            let session = IdentitySession::init(storage).await;
            commands::oneshot::sign_out(&session).await
        }
        None => {
            let (reload_tx, reload_rx) = mpsc::channel::<ReloadLists>(8);
            let app = App::build(
                config,
                gateway,
                storage,
                Arc::new(ConsoleIdentityProvider::new()),
                Arc::new(ConsoleNotifier),
                reload_tx,
            )
            .await;
            repl::run(app, reload_rx).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_match_flags() {
        let cli = Cli::try_parse_from([
            "novamatch",
            "--backend-url",
            "http://api.test",
            "match",
            "--industry",
            "fintech, ai",
            "--stage",
            "series-a",
            "--ticket-max",
            "50000",
        ])
        .unwrap();

        assert_eq!(cli.backend_url.as_deref(), Some("http://api.test"));
        match cli.command {
            Some(Commands::Match {
                industry,
                stage,
                ticket_min,
                ticket_max,
                ..
            }) => {
                assert_eq!(industry, "fintech, ai");
                assert_eq!(stage, Some(Stage::SeriesA));
                assert_eq!(ticket_min, "");
                assert_eq!(ticket_max, "50000");
            }
            _ => panic!("Expected match subcommand"),
        }
    }

    #[test]
    fn test_no_subcommand_starts_repl() {
        let cli = Cli::try_parse_from(["novamatch"]).unwrap();
        assert!(cli.command.is_none());
        assert!(Cli::try_parse_from(["novamatch", "match", "--stage", "series-z"]).is_err());
    }
}
