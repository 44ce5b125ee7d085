// src/store/memory.rs

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use crate::errors::{FlowstateError, Result};
use crate::graph::{Edge, GraphSnapshot, Node};
use crate::layout::NodePosition;
use crate::store::{GraphStore, StoreFuture, apply_positions};

/// In-memory store. Clones share the same underlying projects.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraphStore {
    projects: Arc<Mutex<HashMap<String, GraphSnapshot>>>,
    fail_saves: Arc<AtomicBool>,
}

impl MemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_project(&self, project_id: impl Into<String>, snapshot: GraphSnapshot) -> Result<()> {
        self.lock()?.insert(project_id.into(), snapshot);
        Ok(())
    }

    /// Current copy of a project, if present.
    pub fn snapshot(&self, project_id: &str) -> Result<Option<GraphSnapshot>> {
        Ok(self.lock()?.get(project_id).cloned())
    }

    /// Make every subsequent `save_positions` fail.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, GraphSnapshot>>> {
        self.projects
            .lock()
            .map_err(|_| FlowstateError::Persistence("memory store lock poisoned".to_string()))
    }

    fn read<T>(&self, project_id: &str, f: impl FnOnce(&GraphSnapshot) -> T) -> Result<T> {
        let projects = self.lock()?;
        projects
            .get(project_id)
            .map(f)
            .ok_or_else(|| FlowstateError::Persistence(format!("unknown project '{project_id}'")))
    }
}

impl GraphStore for MemoryGraphStore {
    fn list_nodes<'a>(&'a self, project_id: &'a str) -> StoreFuture<'a, Vec<Node>> {
        Box::pin(async move { self.read(project_id, |s| s.nodes.clone()) })
    }

    fn list_edges<'a>(&'a self, project_id: &'a str) -> StoreFuture<'a, Vec<Edge>> {
        Box::pin(async move { self.read(project_id, |s| s.edges.clone()) })
    }

    fn save_positions<'a>(
        &'a self,
        project_id: &'a str,
        positions: &'a [NodePosition],
    ) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(FlowstateError::Persistence(format!(
                    "saving positions for project '{project_id}': store rejected write"
                )));
            }

            let mut projects = self.lock()?;
            let snapshot = projects.get_mut(project_id).ok_or_else(|| {
                FlowstateError::Persistence(format!("unknown project '{project_id}'"))
            })?;
            let applied = apply_positions(snapshot, positions);
            info!(project = %project_id, applied, "stored node positions (memory)");
            Ok(())
        })
    }
}
