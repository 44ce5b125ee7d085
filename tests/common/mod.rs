#![allow(dead_code)]

pub use flowstate_test_utils::{builders, fixtures, init_tracing, with_timeout, write_project};

use flowstate::analysis::{StatusMap, compute_statuses};
use flowstate::config::RelationPolicy;
use flowstate::graph::{GraphModel, GraphSnapshot};
use flowstate::types::ComputedStatus;

/// Statuses under the default policy.
pub fn statuses_of(snapshot: &GraphSnapshot) -> StatusMap {
    let model = GraphModel::build(&snapshot.nodes, &snapshot.edges);
    compute_statuses(&model, &RelationPolicy::default())
}

/// Computed status of one node under the default policy.
pub fn status(snapshot: &GraphSnapshot, id: &str) -> ComputedStatus {
    statuses_of(snapshot)
        .get(id)
        .unwrap_or_else(|| panic!("no status for node {id}"))
}

/// Ids of a node list, for compact assertions.
pub fn ids(nodes: &[&flowstate::graph::Node]) -> Vec<String> {
    nodes.iter().map(|n| n.id.clone()).collect()
}
