use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod history;
mod prefs;
mod render;
mod scan;

#[derive(Debug, Parser)]
#[command(name = "foodlens")]
#[command(about = "Food product lookup and AI health analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up a product by barcode and analyze it
    Scan {
        /// Product barcode (8-14 digits)
        barcode: String,

        /// Load the product without requesting an analysis
        #[arg(long)]
        no_analyze: bool,
    },
    /// Show past scans
    History {
        /// Remove all history entries
        #[arg(long)]
        clear: bool,
    },
    /// Show or update dietary preferences
    Prefs {
        #[command(subcommand)]
        command: prefs::PrefsCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = foodlens_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan {
            barcode,
            no_analyze,
        } => scan::run(&config, &barcode, no_analyze).await,
        Commands::History { clear } => history::run(&config, clear),
        Commands::Prefs { command } => prefs::run(&config, command),
    }
}
