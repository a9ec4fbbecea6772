mod commands;
mod lookup;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "signval")]
#[command(about = "Storefront identity extraction and business valuation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract a business identity from an OCR result
    Extract {
        /// JSON file with `fullText` and `detectionCount`
        #[arg(long)]
        ocr: PathBuf,
    },
    /// Value a business from a factor snapshot
    Value {
        /// JSON file with valuation factors; missing fields take defaults
        #[arg(long)]
        factors: PathBuf,
    },
    /// Extract, look up external records, and value the business
    Analyze {
        /// JSON file with `fullText` and `detectionCount`
        #[arg(long)]
        ocr: PathBuf,
        /// JSON file with a directory listing (or `null`)
        #[arg(long)]
        places: Option<PathBuf>,
        /// JSON file with a web search summary (or `null`)
        #[arg(long)]
        web: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = signval_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    let cli = Cli::parse();
    let output = match cli.command {
        Commands::Extract { ocr } => {
            commands::render_json(&commands::run_extract(&ocr).await?, config.pretty_json)?
        }
        Commands::Value { factors } => {
            commands::render_json(&commands::run_value(&factors).await?, config.pretty_json)?
        }
        Commands::Analyze { ocr, places, web } => {
            let report = commands::run_analyze(&config, &ocr, places, web).await?;
            commands::render_json(&report, config.pretty_json)?
        }
    };
    println!("{output}");

    Ok(())
}
