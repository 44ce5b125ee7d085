#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use flowstate::graph::{Edge, GraphSnapshot, Node, Position};
use flowstate::types::{ManualStatus, NodeKind, Relation};

/// Builder for `GraphSnapshot` to simplify test setup.
///
/// Edge ids are generated (`e0`, `e1`, ...) in insertion order.
pub struct SnapshotBuilder {
    snapshot: GraphSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: GraphSnapshot::default(),
        }
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.snapshot.nodes.push(node);
        self
    }

    /// Shorthand for a TODO node whose title equals its id.
    pub fn with_task(self, id: &str) -> Self {
        self.with_node(NodeBuilder::new(id).build())
    }

    /// Raw edge, stored exactly as given (`from` -> `to`).
    pub fn with_edge(mut self, from: &str, to: &str, relation: Relation) -> Self {
        let id = format!("e{}", self.snapshot.edges.len());
        self.snapshot.edges.push(Edge::new(id, from, to, relation));
        self
    }

    /// `dependent` DEPENDS_ON `precursor`.
    pub fn depends_on(self, dependent: &str, precursor: &str) -> Self {
        self.with_edge(dependent, precursor, Relation::DependsOn)
    }

    /// `precursor` HANDOFF_TO `successor`.
    pub fn handoff(self, precursor: &str, successor: &str) -> Self {
        self.with_edge(precursor, successor, Relation::HandoffTo)
    }

    /// `dependent` NEEDS_INFO_FROM `precursor`.
    pub fn needs_info(self, dependent: &str, precursor: &str) -> Self {
        self.with_edge(dependent, precursor, Relation::NeedsInfoFrom)
    }

    /// `dependent` APPROVAL_BY `precursor`.
    pub fn approval(self, dependent: &str, precursor: &str) -> Self {
        self.with_edge(dependent, precursor, Relation::ApprovalBy)
    }

    pub fn build(self) -> GraphSnapshot {
        self.snapshot
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Node`.
pub struct NodeBuilder {
    node: Node,
}

impl NodeBuilder {
    /// TODO task with `title == id`.
    pub fn new(id: &str) -> Self {
        Self {
            node: Node::new(id, id),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.node.title = title.to_string();
        self
    }

    pub fn kind(mut self, kind: NodeKind) -> Self {
        self.node.kind = kind;
        self
    }

    pub fn status(mut self, status: ManualStatus) -> Self {
        self.node.manual_status = status;
        self
    }

    pub fn doing(self) -> Self {
        self.status(ManualStatus::Doing)
    }

    pub fn done(self) -> Self {
        self.status(ManualStatus::Done)
    }

    pub fn owner(mut self, user: &str) -> Self {
        self.node.owners.insert(user.to_string());
        self
    }

    pub fn team(mut self, team: &str) -> Self {
        self.node.teams.insert(team.to_string());
        self
    }

    pub fn due(mut self, at: DateTime<Utc>) -> Self {
        self.node.due_at = Some(at);
        self
    }

    /// Due at midnight UTC on the given day.
    pub fn due_on(self, year: i32, month: u32, day: u32) -> Self {
        let at = Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .expect("valid test date");
        self.due(at)
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.node.position = Some(Position::new(x, y));
        self
    }

    pub fn build(self) -> Node {
        self.node
    }
}
