//! CLI parse: clap types for gdash. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gdash CLI - Grafana panel documents from declarative requests
#[derive(Parser, Debug)]
#[command(name = "gdash")]
#[command(about = "Render Grafana panel JSON from declarative panel requests")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (holds config/config.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

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
    /// Validate and render a panel request (TOML or JSON)
    Render {
        /// Request file; the `kind` key selects row, timeseries or stat
        file: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate a panel request without rendering it
    Validate {
        file: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the effective defaults registry
    Defaults {
        /// Restrict output to one panel kind (row, timeseries, stat)
        #[arg(long)]
        kind: Option<String>,
    },
}
