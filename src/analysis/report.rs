// src/analysis/report.rs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::blocking::BlockingAnalyzer;
use crate::analysis::status::StatusMap;
use crate::graph::GraphModel;
use crate::types::{ComputedStatus, ManualStatus, NodeId};

/// Explanation row for one node, as handed to a UI/API layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeReport {
    pub id: NodeId,
    pub title: String,
    pub manual_status: ManualStatus,
    pub computed_status: ComputedStatus,
    pub blocked_by: Vec<String>,
    pub blocking: Vec<String>,
    pub blocks_count: usize,
}

/// Whole-project explanation: one row per node in snapshot order, plus a
/// count per computed status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectReport {
    pub nodes: Vec<NodeReport>,
    pub by_status: BTreeMap<ComputedStatus, usize>,
    pub dropped_edges: Vec<String>,
}

impl ProjectReport {
    pub fn build(model: &GraphModel<'_>, statuses: &StatusMap, blocking: &BlockingAnalyzer<'_>) -> Self {
        let nodes = model
            .nodes()
            .iter()
            .filter_map(|node| {
                let computed_status = statuses.get(&node.id)?;
                Some(NodeReport {
                    id: node.id.clone(),
                    title: node.title.clone(),
                    manual_status: node.manual_status,
                    computed_status,
                    blocked_by: to_owned(blocking.blocked_by_titles(&node.id)),
                    blocking: to_owned(blocking.blocking_titles(&node.id)),
                    blocks_count: blocking.blocks_count(&node.id),
                })
            })
            .collect();

        Self {
            nodes,
            by_status: statuses.histogram(),
            dropped_edges: to_owned(model.dropped_edges().to_vec()),
        }
    }

    pub fn node(&self, id: &str) -> Option<&NodeReport> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

fn to_owned(titles: Vec<&str>) -> Vec<String> {
    titles.into_iter().map(str::to_string).collect()
}
