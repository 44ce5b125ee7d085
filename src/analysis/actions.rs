// src/analysis/actions.rs

//! Per-user (and per-team) work queues.

use std::cmp::Ordering;

use tracing::debug;

use crate::analysis::blocking::BlockingAnalyzer;
use crate::analysis::status::StatusMap;
use crate::graph::{GraphModel, Node};
use crate::types::{ComputedStatus, ManualStatus};

/// Three queues for one user or team.
///
/// A node may be in `waiting` and `blocking` at the same time: it can be
/// stuck itself while also holding up somebody else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionBuckets<'a> {
    /// "Do Now": TODO/DOING and not held up by anything.
    pub actionable: Vec<&'a Node>,
    /// Computed WAITING or BLOCKED.
    pub waiting: Vec<&'a Node>,
    /// Not DONE and holding up a node owned by someone else.
    pub blocking: Vec<&'a Node>,
}

impl<'a> ActionBuckets<'a> {
    pub fn is_empty(&self) -> bool {
        self.actionable.is_empty() && self.waiting.is_empty() && self.blocking.is_empty()
    }

    fn sort(&mut self) {
        self.actionable.sort_by(|a, b| queue_order(a, b));
        self.waiting.sort_by(|a, b| queue_order(a, b));
        self.blocking.sort_by(|a, b| queue_order(a, b));
    }
}

/// Due date ascending with undated nodes last, then title, then id.
pub fn queue_order(a: &Node, b: &Node) -> Ordering {
    let due = match (a.due_at, b.due_at) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    due.then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}

/// Buckets nodes into Actionable / Waiting / Blocking queues.
pub struct ActionClassifier<'a> {
    model: &'a GraphModel<'a>,
    statuses: &'a StatusMap,
    blocking: BlockingAnalyzer<'a>,
}

impl<'a> ActionClassifier<'a> {
    pub fn new(
        model: &'a GraphModel<'a>,
        statuses: &'a StatusMap,
        blocking: BlockingAnalyzer<'a>,
    ) -> Self {
        Self {
            model,
            statuses,
            blocking,
        }
    }

    /// Queues for every node owned by `user`.
    pub fn for_user(&self, user: &str) -> ActionBuckets<'a> {
        let buckets = self.classify(
            |node| node.is_owned_by(user),
            |node| self.blocking.blocks_someone_else(node, user),
        );
        debug!(
            user = %user,
            actionable = buckets.actionable.len(),
            waiting = buckets.waiting.len(),
            blocking = buckets.blocking.len(),
            "classified user queues"
        );
        buckets
    }

    /// Queues for every node assigned to `team`.
    pub fn for_team(&self, team: &str) -> ActionBuckets<'a> {
        let buckets = self.classify(
            |node| node.in_team(team),
            |node| self.blocking.blocks_other_team(node, team),
        );
        debug!(
            team = %team,
            actionable = buckets.actionable.len(),
            waiting = buckets.waiting.len(),
            blocking = buckets.blocking.len(),
            "classified team queues"
        );
        buckets
    }

    fn classify<M, B>(&self, is_member: M, blocks_outsider: B) -> ActionBuckets<'a>
    where
        M: Fn(&Node) -> bool,
        B: Fn(&Node) -> bool,
    {
        let mut buckets = ActionBuckets::default();

        for node in self.model.nodes().iter().filter(|n| is_member(n)) {
            let Some(computed) = self.statuses.get(&node.id) else {
                continue;
            };

            let open = matches!(node.manual_status, ManualStatus::Todo | ManualStatus::Doing);

            if open && !computed.is_stuck() {
                buckets.actionable.push(node);
            }
            if matches!(computed, ComputedStatus::Waiting | ComputedStatus::Blocked) {
                buckets.waiting.push(node);
            }
            if !node.is_done() && blocks_outsider(node) {
                buckets.blocking.push(node);
            }
        }

        buckets.sort();
        buckets
    }
}
