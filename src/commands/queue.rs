// src/commands/queue.rs

use chrono::{DateTime, Utc};

use crate::analysis::ProjectAnalysis;
use crate::commands::CommandContext;
use crate::config::RelationPolicy;
use crate::errors::{FlowstateError, Result};
use crate::graph::{GraphModel, GraphSnapshot, Node};

/// Whose queues to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueTarget {
    User(String),
    Team(String),
}

impl QueueTarget {
    pub fn from_args(user: Option<String>, team: Option<String>) -> Result<Self> {
        match (user, team) {
            (Some(user), None) => Ok(QueueTarget::User(user)),
            (None, Some(team)) => Ok(QueueTarget::Team(team)),
            _ => Err(FlowstateError::ConfigError(
                "exactly one of --user or --team is required".to_string(),
            )),
        }
    }
}

pub fn render(
    snapshot: &GraphSnapshot,
    policy: &RelationPolicy,
    target: &QueueTarget,
    now: DateTime<Utc>,
) -> String {
    let model = GraphModel::build(&snapshot.nodes, &snapshot.edges);
    let analysis = ProjectAnalysis::new(&model, policy);
    let actions = analysis.actions();

    let (label, buckets) = match target {
        QueueTarget::User(user) => (format!("user '{user}'"), actions.for_user(user)),
        QueueTarget::Team(team) => (format!("team '{team}'"), actions.for_team(team)),
    };

    let mut out = String::new();
    out.push_str(&format!("Queues for {label}\n"));
    if buckets.is_empty() {
        out.push_str("  Nothing open\n");
        return out;
    }

    write_bucket(&mut out, "Do Now", &buckets.actionable, now);
    write_bucket(&mut out, "Waiting", &buckets.waiting, now);
    write_bucket(&mut out, "Blocking others", &buckets.blocking, now);
    out
}

fn write_bucket(out: &mut String, name: &str, nodes: &[&Node], now: DateTime<Utc>) {
    out.push_str(&format!("{name} ({}):\n", nodes.len()));
    for node in nodes {
        let due = node
            .due_at
            .map(|d| format!(" due {}", d.format("%Y-%m-%d")))
            .unwrap_or_default();
        let overdue = if node.is_overdue(now) { " OVERDUE" } else { "" };
        out.push_str(&format!("  {} - {}{}{}\n", node.id, node.title, due, overdue));
    }
}

pub async fn run(ctx: &CommandContext, target: &QueueTarget) -> Result<()> {
    let snapshot = ctx.snapshot().await?;
    print!("{}", render(&snapshot, &ctx.policy, target, Utc::now()));
    Ok(())
}
