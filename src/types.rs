// src/types.rs

//! Small enums shared across the graph, analysis and layout modules.
//!
//! The relation direction table lives here as a plain `match` so that it is
//! exhaustively checked by the compiler. Relation severity is policy and
//! lives in [`crate::config::RelationPolicy`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical node identifier type used throughout the crate.
pub type NodeId = String;

/// Identifier of a user that may own nodes.
pub type UserId = String;

/// Identifier of a team that nodes may be assigned to.
pub type TeamId = String;

/// Classification of a node. Purely descriptive; never affects computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    #[default]
    Task,
    Decision,
    Blocker,
    #[serde(alias = "inforeq")]
    InfoReq,
}

/// Status set explicitly by a user. The only status that is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualStatus {
    #[default]
    Todo,
    Doing,
    Done,
}

impl ManualStatus {
    pub fn is_done(self) -> bool {
        self == ManualStatus::Done
    }
}

/// Derived execution state. Always recomputed, never stored as truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputedStatus {
    Todo,
    Doing,
    Waiting,
    Blocked,
    Done,
}

impl ComputedStatus {
    /// All variants, in display order.
    pub const ALL: [ComputedStatus; 5] = [
        ComputedStatus::Todo,
        ComputedStatus::Doing,
        ComputedStatus::Waiting,
        ComputedStatus::Blocked,
        ComputedStatus::Done,
    ];

    /// `true` for the two states that mean "held up by a precursor".
    pub fn is_stuck(self) -> bool {
        matches!(self, ComputedStatus::Waiting | ComputedStatus::Blocked)
    }
}

impl From<ManualStatus> for ComputedStatus {
    fn from(status: ManualStatus) -> Self {
        match status {
            ManualStatus::Todo => ComputedStatus::Todo,
            ManualStatus::Doing => ComputedStatus::Doing,
            ManualStatus::Done => ComputedStatus::Done,
        }
    }
}

impl fmt::Display for ComputedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComputedStatus::Todo => "TODO",
            ComputedStatus::Doing => "DOING",
            ComputedStatus::Waiting => "WAITING",
            ComputedStatus::Blocked => "BLOCKED",
            ComputedStatus::Done => "DONE",
        };
        f.write_str(s)
    }
}

/// Which stored endpoint of an edge is the precursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    From,
    To,
}

/// Typed dependency relation between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    DependsOn,
    HandoffTo,
    NeedsInfoFrom,
    ApprovalBy,
}

impl Relation {
    pub const ALL: [Relation; 4] = [
        Relation::DependsOn,
        Relation::HandoffTo,
        Relation::NeedsInfoFrom,
        Relation::ApprovalBy,
    ];

    /// Stored side of the edge that must complete first.
    ///
    /// `HANDOFF_TO` flows forward along the stored direction. The other three
    /// relations are phrased from the dependent node's point of view, so the
    /// stored `to` node is the precursor.
    pub fn precursor_side(self) -> EdgeSide {
        match self {
            Relation::HandoffTo => EdgeSide::From,
            Relation::DependsOn | Relation::NeedsInfoFrom | Relation::ApprovalBy => EdgeSide::To,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Relation::DependsOn => "depends_on",
            Relation::HandoffTo => "handoff_to",
            Relation::NeedsInfoFrom => "needs_info_from",
            Relation::ApprovalBy => "approval_by",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "depends_on" => Ok(Relation::DependsOn),
            "handoff_to" => Ok(Relation::HandoffTo),
            "needs_info_from" => Ok(Relation::NeedsInfoFrom),
            "approval_by" => Ok(Relation::ApprovalBy),
            other => Err(format!(
                "invalid relation: {other} (expected depends_on, handoff_to, needs_info_from or approval_by)"
            )),
        }
    }
}

/// Effect an incomplete precursor has on its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Yields `BLOCKED`.
    Hard,
    /// Yields `WAITING`.
    Soft,
}

/// Layout algorithm requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Longest-path layers packed row-major into a fixed column count.
    #[default]
    Grid,
    /// Layered flow diagram, ranks advancing left to right.
    #[serde(alias = "left_right")]
    Lr,
    /// Layered flow diagram, ranks advancing top to bottom.
    #[serde(alias = "top_bottom")]
    Tb,
}

impl LayoutMode {
    pub fn is_layered(self) -> bool {
        matches!(self, LayoutMode::Lr | LayoutMode::Tb)
    }
}

impl FromStr for LayoutMode {
    type Err = crate::errors::FlowstateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" | "topological" => Ok(LayoutMode::Grid),
            "lr" | "left_right" | "left-to-right" => Ok(LayoutMode::Lr),
            "tb" | "top_bottom" | "top-to-bottom" => Ok(LayoutMode::Tb),
            _ => Err(crate::errors::FlowstateError::UnknownLayoutMode(
                s.to_string(),
            )),
        }
    }
}
