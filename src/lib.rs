// src/lib.rs

//! Execution-state engine for typed task graphs.
//!
//! Given a snapshot of nodes (with manual TODO/DOING/DONE status) and typed
//! edges, this crate derives each node's computed status, explains who is
//! blocking whom, buckets nodes into per-user work queues, and positions
//! nodes for display. All of it is recomputed from the snapshot on every
//! call; nothing is cached between calls.

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod organize;
pub mod store;
pub mod types;

use anyhow::Result;
use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::commands::CommandContext;
use crate::commands::queue::QueueTarget;
use crate::config::{load_or_default, resolve_config_path};
use crate::store::FileGraphStore;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (defaults when the file is absent)
/// - the file-backed store for the project document
/// - the selected subcommand
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = resolve_config_path(args.config.as_deref());
    let cfg = load_or_default(&config_path)?;
    let (store, project_id) = FileGraphStore::for_project_file(&args.project)?;

    debug!(
        config = %config_path.display(),
        root = %store.root().display(),
        project = %project_id,
        "resolved project store"
    );

    let ctx = CommandContext::new(cfg, store, project_id);

    match args.command {
        Command::Status => commands::status::run(&ctx).await?,
        Command::Explain { node } => commands::explain::run(&ctx, &node).await?,
        Command::Queue { user, team } => {
            let target = QueueTarget::from_args(user, team)?;
            commands::queue::run(&ctx, &target).await?
        }
        Command::Layout {
            mode,
            organize,
            dry_run,
        } => commands::layout::run(&ctx, mode.as_deref(), organize, dry_run).await?,
    }

    Ok(())
}
