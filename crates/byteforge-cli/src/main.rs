use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use byteforge_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "byteforge")]
#[command(author, version, about = "ByteForge: Web & App + Managed IT, in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the full-page site in the terminal
    Page,
    /// Run the contact submission endpoint
    Serve,
    /// Submit a lead to the contact endpoint
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// managed-it, security, backup, web, app or combo
        #[arg(long)]
        need: Option<String>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init,
}

/// Initialize logging; the terminal page logs to a file instead of stderr
fn init_tracing(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    let is_page = matches!(cli.command, Some(Commands::Page) | None);
    init_tracing(&config, is_page)?;

    match cli.command {
        Some(Commands::Page) | None => commands::page::run(config).await,
        Some(Commands::Serve) => commands::serve::run(config).await,
        Some(Commands::Contact {
            name,
            email,
            message,
            company,
            phone,
            need,
        }) => {
            let lead = commands::contact::LeadArgs {
                name,
                email,
                message,
                company,
                phone,
                need,
            };
            commands::contact::run(&config, lead).await
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Init => commands::config::init(&config),
        },
    }
}
