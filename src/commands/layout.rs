// src/commands/layout.rs

use std::str::FromStr;

use tracing::info;

use crate::commands::CommandContext;
use crate::errors::Result;
use crate::layout::{LayoutOptions, LayoutScope, NodePosition};
use crate::organize::{compute_project_layout, place_project};
use crate::types::LayoutMode;

/// Resolve `--mode`, falling back to the configured default.
pub fn resolve_mode(requested: Option<&str>, default: LayoutMode) -> Result<LayoutMode> {
    match requested {
        Some(s) => LayoutMode::from_str(s),
        None => Ok(default),
    }
}

pub fn render(positions: &[NodePosition], saved: bool) -> String {
    let mut out = String::new();
    if positions.is_empty() {
        out.push_str("All nodes already have a position\n");
        return out;
    }
    for p in positions {
        out.push_str(&format!("  {} -> ({:.1}, {:.1})\n", p.node_id, p.x, p.y));
    }
    let verb = if saved { "Saved" } else { "Computed" };
    out.push_str(&format!("{verb} {} position(s)\n", positions.len()));
    out
}

pub async fn run(ctx: &CommandContext, mode: Option<&str>, organize: bool, dry_run: bool) -> Result<()> {
    let mode = resolve_mode(mode, ctx.config.layout.mode)?;
    let options = LayoutOptions::from(&ctx.config.layout);
    let scope = if organize {
        LayoutScope::All
    } else {
        LayoutScope::Unpositioned
    };

    info!(project = %ctx.project_id, ?mode, ?scope, dry_run, "running layout");

    let positions = if dry_run {
        compute_project_layout(&ctx.store, &ctx.project_id, mode, &options, scope).await?
    } else {
        place_project(&ctx.store, &ctx.project_id, mode, &options, scope).await?
    };

    print!("{}", render(&positions, !dry_run));
    Ok(())
}
