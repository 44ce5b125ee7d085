// src/logging.rs

//! `tracing` subscriber for the CLI.
//!
//! The filter comes from, in order:
//! 1. `--log-level`, applied to every target;
//! 2. `FLOWSTATE_LOG`, read as `EnvFilter` directives
//!    (`debug`, `flowstate::layout=trace,warn`, ...);
//! 3. `info`.
//!
//! Output goes to stderr; stdout carries only command output.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "FLOWSTATE_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Pick the directive string without touching global state.
///
/// A blank environment value counts as unset.
pub fn filter_directives(cli_level: Option<LogLevel>, env_value: Option<&str>) -> String {
    if let Some(level) = cli_level {
        return level.as_directive().to_string();
    }
    match env_value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// Install the global subscriber. Call once, before any command runs.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let directives = filter_directives(cli_level, env_value.as_deref());

    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid {LOG_ENV_VAR} directives: {directives:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
