//! Auth Service - credential verification server and tooling.

use std::io::BufRead;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_service_lib::config::AuthServiceConfig;
use auth_service_lib::service::Verification;
use auth_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "auth-service")]
#[command(author, version, about = "Credential verification service", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides AUTH_SERVICE_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides AUTH_SERVICE_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Verify one login; the password is read from stdin
    Verify {
        #[arg(long)]
        email: String,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = AuthServiceConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            auth_service_lib::run_server(config).await.map(|_| ExitCode::SUCCESS)
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            auth_service_lib::run_migrations(config, migrate_action)
                .await
                .map(|_| ExitCode::SUCCESS)
        }
        Commands::Verify { email } => verify(config, &email).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Exit 0 when authenticated, 1 when rejected, 2 on operational failure.
async fn verify(
    config: AuthServiceConfig,
    email: &str,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']);

    match auth_service_lib::verify_once(config, email, password).await? {
        Ok(Verification::Authenticated(account)) => {
            println!("{}", serde_json::to_string_pretty(&account)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(Verification::Rejected) => {
            println!("rejected");
            Ok(ExitCode::from(1))
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            Ok(ExitCode::from(2))
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}
