//! Main entry point for the Inference landing page CLI.

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use shared::config::LandingConfig;
use std::path::PathBuf;
use tracing::debug;

mod commands;
mod logging;

/// Inference landing CLI
#[derive(Parser)]
#[command(name = "inference-landing")]
#[command(about = "Build tools for the Inference landing page", long_about = None)]
struct Cli {
    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for the landing CLI
#[derive(Subcommand)]
enum Commands {
    /// Render the landing page to a static HTML file
    Export {
        /// Path to the configuration file (optional)
        #[arg(
            long,
            short,
            help = "Path to the configuration file (e.g., landing.yaml or landing.json). If not provided, defaults will be used."
        )]
        config: Option<PathBuf>,

        /// Directory that receives index.html
        #[arg(long, short, default_value = "out")]
        out_dir: PathBuf,
    },

    /// Compose class names from plain words or JSON tokens
    Compose {
        /// Tokens such as `btn`, `'["a", "b"]'` or `'{"active": true}'`
        tokens: Vec<String>,
    },

    /// Generate a configuration file
    Config {
        /// Format of the configuration file to generate (yaml or json). Defaults to yaml.
        #[arg(long, short, default_value = "yaml")]
        format: String,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts for the CLI
    Completion {
        /// The shell type for which to generate the completion script
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    // Installed before anything loads so configuration events are not lost.
    let startup_level = match cli.command {
        Commands::Export { .. } => "info",
        _ => "warn",
    };
    let log_handle = logging::init(cli.log_level.as_deref().unwrap_or(startup_level));

    match cli.command {
        Commands::Export { config, out_dir } => {
            let resolved = LandingConfig::load_config(config.as_deref())
                .context("failed to load landing configuration")?;
            if cli.log_level.is_none() {
                log_handle.set_level(&resolved.log_level);
            }
            debug!(?resolved, "configuration resolved");

            let index = commands::export::export_site(resolved, &out_dir).await?;
            println!("Exported {}", index.display());
        }
        Commands::Compose { tokens } => {
            println!("{}", commands::compose::compose_arguments(&tokens));
        }
        Commands::Config { format, output } => {
            commands::config::generate_config(&format, output.as_deref())?;
        }
        Commands::Completion { shell } => {
            commands::completion::generate_completion(shell);
        }
    }

    Ok(())
}
