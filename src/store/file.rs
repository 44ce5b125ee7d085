// src/store/file.rs

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{FlowstateError, Result};
use crate::graph::{Edge, GraphSnapshot, Node};
use crate::layout::NodePosition;
use crate::store::{GraphStore, StoreFuture, apply_positions};

/// File extension of project documents.
pub const PROJECT_EXTENSION: &str = "toml";

/// Stores each project as `<root>/<project_id>.toml`.
#[derive(Debug, Clone)]
pub struct FileGraphStore {
    root: PathBuf,
}

impl FileGraphStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Split a project file path into a store rooted at its directory and
    /// the project id (file stem).
    ///
    /// A bare filename like `plan.toml` is rooted at `.`.
    pub fn for_project_file(path: &Path) -> Result<(Self, String)> {
        let project_id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                FlowstateError::ConfigError(format!(
                    "project path {} has no usable file name",
                    path.display()
                ))
            })?
            .to_string();

        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok((Self::new(root), project_id))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project_path(&self, project_id: &str) -> PathBuf {
        self.root.join(format!("{project_id}.{PROJECT_EXTENSION}"))
    }

    async fn read_snapshot(&self, project_id: &str) -> Result<GraphSnapshot> {
        let path = self.project_path(project_id);
        let contents = tokio::fs::read_to_string(&path).await?;
        let snapshot: GraphSnapshot = toml::from_str(&contents)?;
        debug!(
            path = %path.display(),
            nodes = snapshot.nodes.len(),
            edges = snapshot.edges.len(),
            "loaded project snapshot"
        );
        Ok(snapshot)
    }

    /// Write the full snapshot, replacing the file atomically.
    pub async fn write_snapshot(&self, project_id: &str, snapshot: &GraphSnapshot) -> Result<()> {
        let path = self.project_path(project_id);
        let contents = toml::to_string(snapshot)?;

        let tmp = path.with_extension(format!("{PROJECT_EXTENSION}.tmp"));
        tokio::fs::write(&tmp, contents.as_bytes()).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn save_positions_inner(&self, project_id: &str, positions: &[NodePosition]) -> Result<()> {
        let mut snapshot = self.read_snapshot(project_id).await?;
        let applied = apply_positions(&mut snapshot, positions);
        self.write_snapshot(project_id, &snapshot).await?;
        info!(project = %project_id, applied, "stored node positions (file)");
        Ok(())
    }
}

impl GraphStore for FileGraphStore {
    fn list_nodes<'a>(&'a self, project_id: &'a str) -> StoreFuture<'a, Vec<Node>> {
        Box::pin(async move { Ok(self.read_snapshot(project_id).await?.nodes) })
    }

    fn list_edges<'a>(&'a self, project_id: &'a str) -> StoreFuture<'a, Vec<Edge>> {
        Box::pin(async move { Ok(self.read_snapshot(project_id).await?.edges) })
    }

    fn save_positions<'a>(
        &'a self,
        project_id: &'a str,
        positions: &'a [NodePosition],
    ) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            self.save_positions_inner(project_id, positions)
                .await
                .map_err(|e| {
                    FlowstateError::Persistence(format!(
                        "saving positions for project '{project_id}': {e}"
                    ))
                })
        })
    }
}
