// src/analysis/status.rs

//! Computed execution state.
//!
//! A node is complete iff its own manual status is DONE. Completeness never
//! depends on a precursor's *computed* status, so each node only needs its
//! immediate precursors' manual state. The whole map is one O(V + E) pass
//! with no ordering requirement, and cycles need no special handling: two
//! nodes that depend on each other simply keep reporting each other.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::RelationPolicy;
use crate::graph::{GraphModel, Node};
use crate::types::{ComputedStatus, NodeId, Severity};

/// Computed status of every node in a snapshot, keyed by node id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMap {
    statuses: BTreeMap<NodeId, ComputedStatus>,
}

impl StatusMap {
    pub fn get(&self, id: &str) -> Option<ComputedStatus> {
        self.statuses.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Entries in node id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ComputedStatus)> + '_ {
        self.statuses.iter().map(|(id, s)| (id.as_str(), *s))
    }

    /// Number of nodes per computed status.
    pub fn histogram(&self) -> BTreeMap<ComputedStatus, usize> {
        let mut counts: BTreeMap<ComputedStatus, usize> =
            ComputedStatus::ALL.iter().map(|s| (*s, 0)).collect();
        for status in self.statuses.values() {
            *counts.entry(*status).or_default() += 1;
        }
        counts
    }
}

/// Derives `computedStatus` from manual state and one-hop precursors.
pub struct StatusEngine<'a> {
    model: &'a GraphModel<'a>,
    policy: &'a RelationPolicy,
}

impl<'a> StatusEngine<'a> {
    pub fn new(model: &'a GraphModel<'a>, policy: &'a RelationPolicy) -> Self {
        Self { model, policy }
    }

    /// Compute the status of a single node.
    ///
    /// 1. DONE short-circuits to DONE.
    /// 2. Any incomplete precursor over a hard relation gives BLOCKED.
    /// 3. Otherwise any incomplete precursor over a soft relation gives WAITING.
    /// 4. Otherwise the manual status passes through.
    pub fn status_of(&self, node: &Node) -> ComputedStatus {
        if node.is_done() {
            return ComputedStatus::Done;
        }

        let mut waiting = false;

        for (precursor, relation) in self.model.precursors_of(&node.id) {
            if precursor.is_done() {
                continue;
            }
            match self.policy.severity(relation) {
                // Hard dominates soft; no need to look further.
                Severity::Hard => return ComputedStatus::Blocked,
                Severity::Soft => waiting = true,
            }
        }

        if waiting {
            ComputedStatus::Waiting
        } else {
            node.manual_status.into()
        }
    }

    /// Compute the status map for every node in the model.
    pub fn compute(&self) -> StatusMap {
        let mut statuses = BTreeMap::new();

        for node in self.model.nodes() {
            if statuses.contains_key(&node.id) {
                continue;
            }
            let status = self.status_of(node);
            debug!(node = %node.id, manual = ?node.manual_status, computed = %status, "derived status");
            statuses.insert(node.id.clone(), status);
        }

        StatusMap { statuses }
    }
}

/// Convenience wrapper: build a [`StatusEngine`] and compute all statuses.
pub fn compute_statuses(model: &GraphModel<'_>, policy: &RelationPolicy) -> StatusMap {
    StatusEngine::new(model, policy).compute()
}
