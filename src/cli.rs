// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `flowstate`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flowstate",
    version,
    about = "Derive task execution state, work queues and layouts from a dependency graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML). Falls back to `FLOWSTATE_CONFIG`,
    /// then `Flowstate.toml`. A missing file means defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project document (`<dir>/<project>.toml` with `[[node]]`/`[[edge]]` tables).
    #[arg(long, value_name = "FILE")]
    pub project: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FLOWSTATE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print every node with its computed status.
    Status,

    /// Show what a node is blocked by and what it is blocking.
    Explain {
        /// Node id.
        node: String,
    },

    /// Show Do Now / Waiting / Blocking queues for a user or a team.
    Queue {
        #[arg(long, value_name = "USER", conflicts_with = "team", required_unless_present = "team")]
        user: Option<String>,

        #[arg(long, value_name = "TEAM")]
        team: Option<String>,
    },

    /// Compute node positions and save them to the project file.
    Layout {
        /// grid, lr or tb. Defaults to `[layout].mode` from the config.
        #[arg(long, value_name = "MODE")]
        mode: Option<String>,

        /// Re-place every node, not only the ones without a saved position.
        #[arg(long)]
        organize: bool,

        /// Print positions without saving.
        #[arg(long)]
        dry_run: bool,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
