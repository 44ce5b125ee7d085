// src/analysis/blocking.rs

//! Who is holding up whom.

use std::collections::HashSet;

use crate::analysis::status::StatusMap;
use crate::config::RelationPolicy;
use crate::graph::{GraphModel, Node};
use crate::types::ComputedStatus;

/// Explains blocked/waiting states and detects cross-owner blocking.
///
/// All queries are one hop; nothing here walks the graph transitively.
pub struct BlockingAnalyzer<'a> {
    model: &'a GraphModel<'a>,
    statuses: &'a StatusMap,
    policy: &'a RelationPolicy,
}

impl<'a> BlockingAnalyzer<'a> {
    pub fn new(
        model: &'a GraphModel<'a>,
        statuses: &'a StatusMap,
        policy: &'a RelationPolicy,
    ) -> Self {
        Self {
            model,
            statuses,
            policy,
        }
    }

    /// Precursors of `id` that are not DONE, deduplicated, in edge order.
    pub fn blocked_by(&self, id: &str) -> Vec<&'a Node> {
        let mut seen = HashSet::new();
        self.model
            .precursors_of(id)
            .into_iter()
            .filter(|(p, _)| self.statuses.get(&p.id) != Some(ComputedStatus::Done))
            .filter(|(p, _)| seen.insert(p.id.as_str()))
            .map(|(p, _)| p)
            .collect()
    }

    /// Successors that `id` is holding up. Any node that is not DONE blocks
    /// all of its successors, whatever its own computed status.
    pub fn blocking(&self, id: &str) -> Vec<&'a Node> {
        let Some(node) = self.model.node(id) else {
            return Vec::new();
        };
        if node.is_done() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        self.model
            .successors_of(id)
            .into_iter()
            .filter(|(s, _)| seen.insert(s.id.as_str()))
            .map(|(s, _)| s)
            .collect()
    }

    pub fn blocked_by_titles(&self, id: &str) -> Vec<&'a str> {
        self.blocked_by(id).into_iter().map(|n| n.title.as_str()).collect()
    }

    pub fn blocking_titles(&self, id: &str) -> Vec<&'a str> {
        self.blocking(id).into_iter().map(|n| n.title.as_str()).collect()
    }

    /// Distinct one-hop successors over blocking relations (`depends_on` by
    /// default). Used as an impact badge.
    pub fn blocks_count(&self, id: &str) -> usize {
        self.model
            .successors_of(id)
            .into_iter()
            .filter(|(_, relation)| self.policy.counts_as_blocking(*relation))
            .map(|(s, _)| s.id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Whether `node`, owned by `user`, is holding up a successor that has
    /// owners of its own, none of whom is `user`.
    ///
    /// Only blocking relations count; softer relations surface as the
    /// successor's own WAITING state instead.
    pub fn blocks_someone_else(&self, node: &Node, user: &str) -> bool {
        self.blocks_outside(node, |succ| {
            !succ.owners.is_empty() && !succ.is_owned_by(user)
        })
    }

    /// Team flavour of [`Self::blocks_someone_else`].
    pub fn blocks_other_team(&self, node: &Node, team: &str) -> bool {
        self.blocks_outside(node, |succ| !succ.teams.is_empty() && !succ.in_team(team))
    }

    fn blocks_outside<F>(&self, node: &Node, is_outsider: F) -> bool
    where
        F: Fn(&Node) -> bool,
    {
        if node.is_done() {
            return false;
        }
        self.model
            .successors_of(&node.id)
            .into_iter()
            .any(|(succ, relation)| self.policy.counts_as_blocking(relation) && is_outsider(succ))
    }
}
