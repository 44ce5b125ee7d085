// src/commands/explain.rs

use crate::analysis::ProjectAnalysis;
use crate::commands::CommandContext;
use crate::config::RelationPolicy;
use crate::errors::{FlowstateError, Result};
use crate::graph::{GraphModel, GraphSnapshot};

pub fn render(snapshot: &GraphSnapshot, policy: &RelationPolicy, id: &str) -> Result<String> {
    let model = GraphModel::build(&snapshot.nodes, &snapshot.edges);
    let node = model
        .node(id)
        .ok_or_else(|| FlowstateError::NodeNotFound(id.to_string()))?;

    let analysis = ProjectAnalysis::new(&model, policy);
    let blocking = analysis.blocking();
    let status = analysis
        .computed_status_of(id)
        .ok_or_else(|| FlowstateError::NodeNotFound(id.to_string()))?;

    let mut out = String::new();
    out.push_str(&format!("{} - {} [{}]\n", node.id, node.title, status));

    let blocked_by = blocking.blocked_by_titles(id);
    if blocked_by.is_empty() {
        out.push_str("  Not blocked by anything\n");
    } else {
        out.push_str("  Blocked by:\n");
        for title in blocked_by {
            out.push_str(&format!("    {title}\n"));
        }
    }

    let holding_up = blocking.blocking_titles(id);
    if holding_up.is_empty() {
        out.push_str("  Not blocking anything\n");
    } else {
        out.push_str("  Blocking:\n");
        for title in holding_up {
            out.push_str(&format!("    {title}\n"));
        }
    }

    out.push_str(&format!("  Blocks count: {}\n", blocking.blocks_count(id)));
    Ok(out)
}

pub async fn run(ctx: &CommandContext, id: &str) -> Result<()> {
    let snapshot = ctx.snapshot().await?;
    print!("{}", render(&snapshot, &ctx.policy, id)?);
    Ok(())
}
