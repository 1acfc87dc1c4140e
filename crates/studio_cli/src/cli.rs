//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Describe a project in words and pictures, and run commands against it
#[derive(Parser)]
#[command(name = "studio", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a project from a prompt and optional reference images
    Prompt {
        /// Prompt text (at least STUDIO_MIN_PROMPT_CHARS characters after trimming)
        #[arg(short, long, default_value = "")]
        text: String,
        /// Reference image; repeat for several
        #[arg(short, long = "image")]
        images: Vec<PathBuf>,
        /// Start from a blank project, ignoring text and images
        #[arg(long)]
        blank: bool,
        /// Scaffolding endpoint (default: STUDIO_SCAFFOLD_URL)
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Run a shell command in a project directory
    Run {
        /// Project directory
        #[arg(long)]
        cwd: Option<String>,
        /// Timeout in seconds (default: STUDIO_COMMAND_TIMEOUT or 60)
        #[arg(long)]
        timeout: Option<u64>,
        /// Command line, after `--`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command: Vec<String>,
    },
    /// List host channels
    Channels,
}
