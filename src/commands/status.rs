// src/commands/status.rs

use crate::analysis::ProjectAnalysis;
use crate::commands::CommandContext;
use crate::config::RelationPolicy;
use crate::errors::Result;
use crate::graph::{GraphModel, GraphSnapshot};

pub fn render(project_id: &str, snapshot: &GraphSnapshot, policy: &RelationPolicy) -> String {
    let model = GraphModel::build(&snapshot.nodes, &snapshot.edges);
    let analysis = ProjectAnalysis::new(&model, policy);
    let report = analysis.report();

    let mut out = String::new();
    out.push_str(&format!("Project '{}' ({} nodes)\n", project_id, report.nodes.len()));

    for row in &report.nodes {
        let badge = if row.blocks_count > 0 {
            format!(" (blocks {})", row.blocks_count)
        } else {
            String::new()
        };
        out.push_str(&format!("  {} - {} [{}]{}\n", row.id, row.title, row.computed_status, badge));
    }

    let summary: Vec<String> = report
        .by_status
        .iter()
        .map(|(status, count)| format!("{status} {count}"))
        .collect();
    out.push_str(&format!("Summary: {}\n", summary.join(", ")));

    if !report.dropped_edges.is_empty() {
        out.push_str(&format!(
            "Ignored edges with missing endpoints: {}\n",
            report.dropped_edges.join(", ")
        ));
    }

    out
}

pub async fn run(ctx: &CommandContext) -> Result<()> {
    let snapshot = ctx.snapshot().await?;
    print!("{}", render(&ctx.project_id, &snapshot, &ctx.policy));
    Ok(())
}
