// src/commands/mod.rs

//! One module per CLI subcommand. Each exposes a `render` function that
//! builds the output text (used by tests) and a `run` that prints it.

pub mod explain;
pub mod layout;
pub mod queue;
pub mod status;

use crate::config::{ConfigFile, RelationPolicy};
use crate::errors::Result;
use crate::graph::GraphSnapshot;
use crate::store::{FileGraphStore, load_snapshot};

/// Everything a subcommand needs: validated config and where the project lives.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: ConfigFile,
    pub policy: RelationPolicy,
    pub store: FileGraphStore,
    pub project_id: String,
}

impl CommandContext {
    pub fn new(config: ConfigFile, store: FileGraphStore, project_id: String) -> Self {
        let policy = RelationPolicy::from_section(&config.policy);
        Self {
            config,
            policy,
            store,
            project_id,
        }
    }

    pub async fn snapshot(&self) -> Result<GraphSnapshot> {
        load_snapshot(&self.store, &self.project_id).await
    }
}
