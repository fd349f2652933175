use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Trading user-activity segmentation
#[derive(Parser)]
#[command(name = "activity-segmentation")]
#[command(about = "Segment trading users into engagement tiers from volume and activity data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the power user analysis (from the Cube API or saved inputs)
    Analyse(commands::analyse::AnalyseCommand),
    /// Download raw Cube responses for offline analysis
    Fetch(commands::fetch::FetchCommand),
}

pub async fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyse(command) => command.run().await,
        Commands::Fetch(command) => command.run().await,
    }
}
