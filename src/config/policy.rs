// src/config/policy.rs

//! Runtime form of the `[policy]` section.

use crate::config::model::PolicySection;
use crate::types::{Relation, Severity};

/// Enum-keyed lookup tables for relation semantics.
///
/// The default policy is:
///
/// | relation          | severity | blocks others |
/// |-------------------|----------|---------------|
/// | `depends_on`      | hard     | yes           |
/// | `handoff_to`      | hard     | no            |
/// | `needs_info_from` | soft     | no            |
/// | `approval_by`     | soft     | no            |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationPolicy {
    severity: [Severity; 4],
    blocking: [bool; 4],
}

fn slot(relation: Relation) -> usize {
    match relation {
        Relation::DependsOn => 0,
        Relation::HandoffTo => 1,
        Relation::NeedsInfoFrom => 2,
        Relation::ApprovalBy => 3,
    }
}

impl RelationPolicy {
    pub fn severity(&self, relation: Relation) -> Severity {
        self.severity[slot(relation)]
    }

    /// Whether an incomplete precursor linked by `relation` counts as holding
    /// up the successor's owners (Blocking bucket, `blocks_count`).
    pub fn counts_as_blocking(&self, relation: Relation) -> bool {
        self.blocking[slot(relation)]
    }

    pub fn with_severity(mut self, relation: Relation, severity: Severity) -> Self {
        self.severity[slot(relation)] = severity;
        self
    }

    pub fn with_blocking(mut self, relation: Relation, blocking: bool) -> Self {
        self.blocking[slot(relation)] = blocking;
        self
    }

    /// Build from a validated section. Relations listed in `hard` are hard,
    /// everything else is soft.
    pub fn from_section(section: &PolicySection) -> Self {
        let mut policy = Self {
            severity: [Severity::Soft; 4],
            blocking: [false; 4],
        };
        for relation in &section.hard {
            policy.severity[slot(*relation)] = Severity::Hard;
        }
        for relation in &section.blocking_others {
            policy.blocking[slot(*relation)] = true;
        }
        policy
    }
}

impl Default for RelationPolicy {
    fn default() -> Self {
        Self::from_section(&PolicySection::default())
    }
}
