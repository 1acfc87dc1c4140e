//! CLI entry point for studio.

mod cli;
mod commands;
mod output;

use clap::Parser;
use studio_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Nearest `.env` from the working directory upwards; existing variables win.
fn load_env_file() {
    let Ok(cwd) = std::env::current_dir() else {
        return;
    };
    for dir in cwd.ancestors().take(32) {
        let env_file = dir.join(".env");
        if env_file.exists() {
            let _ = dotenvy::from_path(&env_file);
            break;
        }
    }
}

#[tokio::main]
async fn main() {
    load_env_file();
    let cli = Cli::parse();
    output::init(cli.output);

    let mut logging = ObservabilityConfig::from_env();
    if cli.verbose {
        logging = logging.with_log_level("debug");
    }
    if let Err(e) = studio_observability::init(logging) {
        output::warning(&e.to_string());
    }

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
