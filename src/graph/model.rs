// src/graph/model.rs

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ManualStatus, NodeId, NodeKind, Relation, TeamId, UserId};

/// Saved 2D placement of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A unit of work in a project graph.
///
/// Only `status` (the manual status) is persisted; the computed status is
/// derived by [`crate::analysis::StatusEngine`] on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, rename = "type")]
    pub kind: NodeKind,

    #[serde(default, rename = "status")]
    pub manual_status: ManualStatus,

    /// Shared, non-exclusive ownership.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub owners: BTreeSet<UserId>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub teams: BTreeSet<TeamId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,

    /// `None` means the node still needs layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Node {
    /// Minimal TODO task with no owners, teams, due date or position.
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            kind: NodeKind::Task,
            manual_status: ManualStatus::Todo,
            owners: BTreeSet::new(),
            teams: BTreeSet::new(),
            due_at: None,
            position: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.manual_status.is_done()
    }

    pub fn is_owned_by(&self, user: &str) -> bool {
        self.owners.contains(user)
    }

    pub fn in_team(&self, team: &str) -> bool {
        self.teams.contains(team)
    }

    pub fn needs_layout(&self) -> bool {
        self.position.is_none()
    }

    /// Past its due date and not yet complete.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_done() && self.due_at.is_some_and(|due| due < now)
    }
}

/// A typed relation as stored. Direction depends on `relation`; see
/// [`Relation::precursor_side`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    #[serde(rename = "from")]
    pub from_node_id: NodeId,
    #[serde(rename = "to")]
    pub to_node_id: NodeId,
    pub relation: Relation,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        relation: Relation,
    ) -> Self {
        Self {
            id: id.into(),
            from_node_id: from.into(),
            to_node_id: to.into(),
            relation,
        }
    }
}

/// Node and edge lists of one project, as read from the store.
///
/// On disk this is a TOML document of `[[node]]` and `[[edge]]` tables:
///
/// ```toml
/// [[node]]
/// id = "a"
/// title = "Draft proposal"
/// status = "doing"
/// owners = ["alice"]
///
/// [[edge]]
/// id = "e1"
/// from = "b"
/// to = "a"
/// relation = "depends_on"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default, rename = "node")]
    pub nodes: Vec<Node>,

    #[serde(default, rename = "edge")]
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
