// src/analysis/mod.rs

//! Status derivation and its consumers.
//!
//! Data flow for one request:
//!
//! ```text
//! GraphModel --> StatusEngine --> StatusMap
//!      |                             |
//!      +------> BlockingAnalyzer <---+
//!                      |
//!                      v
//!               ActionClassifier
//! ```
//!
//! Everything here is a pure function of the snapshot the model was built
//! from. [`ProjectAnalysis`] bundles the pieces for callers that want all of
//! them.

pub mod actions;
pub mod blocking;
pub mod report;
pub mod status;

pub use actions::{ActionBuckets, ActionClassifier, queue_order};
pub use blocking::BlockingAnalyzer;
pub use report::{NodeReport, ProjectReport};
pub use status::{StatusEngine, StatusMap, compute_statuses};

use crate::config::RelationPolicy;
use crate::graph::GraphModel;
use crate::types::ComputedStatus;

/// Status map computed once, with blocking and queue views derived on demand.
pub struct ProjectAnalysis<'a> {
    model: &'a GraphModel<'a>,
    policy: &'a RelationPolicy,
    statuses: StatusMap,
}

impl<'a> ProjectAnalysis<'a> {
    pub fn new(model: &'a GraphModel<'a>, policy: &'a RelationPolicy) -> Self {
        let statuses = StatusEngine::new(model, policy).compute();
        Self {
            model,
            policy,
            statuses,
        }
    }

    pub fn model(&self) -> &'a GraphModel<'a> {
        self.model
    }

    pub fn statuses(&self) -> &StatusMap {
        &self.statuses
    }

    pub fn computed_status_of(&self, id: &str) -> Option<ComputedStatus> {
        self.statuses.get(id)
    }

    pub fn blocking(&self) -> BlockingAnalyzer<'_> {
        BlockingAnalyzer::new(self.model, &self.statuses, self.policy)
    }

    pub fn actions(&self) -> ActionClassifier<'_> {
        ActionClassifier::new(self.model, &self.statuses, self.blocking())
    }

    pub fn action_buckets(&self, user: &str) -> ActionBuckets<'_> {
        self.actions().for_user(user)
    }

    pub fn report(&self) -> ProjectReport {
        ProjectReport::build(self.model, &self.statuses, &self.blocking())
    }
}
