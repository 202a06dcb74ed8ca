//! inGen CLI — the main entry point.
//!
//! Commands:
//! - `explain`  — Generate an explanation of the adaptation log
//! - `prompt`   — Print the rendered prompt without calling a backend
//! - `backends` — List supported LLM backends
//! - `doctor`   — Diagnose configuration, log, and backend settings

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ingen_config::{DEFAULT_CONFIG_PATH, DEFAULT_LOG_PATH};

mod commands;

#[derive(Parser)]
#[command(
    name = "ingen",
    about = "inGen — explain system adaptations with an LLM",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the INI configuration file
    #[arg(long, global = true, env = "INGEN_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Path to the adaptation log
    #[arg(long, global = true, env = "INGEN_LOG", default_value = DEFAULT_LOG_PATH)]
    log: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an explanation for the logged adaptations
    Explain {
        /// Intent identifier the explanation is requested for
        #[arg(default_value = "001")]
        intent_id: String,
    },

    /// Print the rendered prompt without contacting a backend
    Prompt,

    /// List supported LLM backends
    Backends,

    /// Diagnose configuration and log setup
    Doctor,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output.
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let paths = commands::Paths {
        config: cli.config,
        log: cli.log,
    };

    let result = match cli.command {
        Commands::Explain { intent_id } => commands::explain::run(&paths, &intent_id).await,
        Commands::Prompt => commands::prompt::run(&paths),
        Commands::Backends => commands::backends::run(),
        Commands::Doctor => commands::doctor::run(&paths),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            commands::exit_code(&e)
        }
    }
}
