//! CLI Adapter.

mod assemble;
mod validate;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::config::DEFAULT_CONFIG_FILE;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "appasm")]
#[command(version)]
#[command(
    about = "Assemble an application layout and generate launcher scripts",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install artifacts and generate launcher scripts
    #[clap(visible_alias = "a")]
    Assemble {
        /// Assembly descriptor (TOML or YAML)
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
    /// Validate the descriptor and show what would be generated
    #[clap(visible_alias = "v")]
    Validate {
        /// Assembly descriptor (TOML or YAML)
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Print the resolved plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Split a JVM argument string into launcher arguments
    Tokenize {
        /// Raw argument string
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Assemble { config } => assemble::run_assemble(&config),
        Commands::Validate { config, json } => validate::run_validate(&config, json),
        Commands::Tokenize { raw } => {
            for argument in crate::app::api::tokenize(&raw) {
                println!("{}", argument);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("APPASM_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
