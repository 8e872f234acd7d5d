//! CLI parse: clap types for contextkit. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// contextkit - inspect and validate educational content context documents
#[derive(Parser, Debug)]
#[command(name = "contextkit")]
#[command(about = "Decode, validate and inspect context tree JSON documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace directory searched for contextkit.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a document and report whether it is structurally valid
    Validate {
        /// Path to the JSON document, or - for stdin
        input: PathBuf,
    },
    /// List every context in a document
    Inspect {
        /// Path to the JSON document, or - for stdin
        input: PathBuf,
        /// Output format (text or json); defaults to the configured format
        #[arg(long)]
        format: Option<String>,
        /// Order siblings by displayOrder
        #[arg(long)]
        sorted: bool,
        /// Stop descending below this depth (root is 0)
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Decode and re-encode a document in canonical form
    Normalize {
        /// Path to the JSON document, or - for stdin
        input: PathBuf,
        /// Order siblings by displayOrder
        #[arg(long)]
        sort: bool,
        /// Write compact JSON instead of indented
        #[arg(long)]
        compact: bool,
    },
}
