// src/store/mod.rs

//! Pluggable persistence collaborator.
//!
//! The engine never owns nodes or edges; it reads a snapshot through a
//! [`GraphStore`] and writes back only computed layout positions.
//!
//! - [`FileGraphStore`] keeps one TOML document per project
//!   (`<root>/<project_id>.toml`).
//! - [`MemoryGraphStore`] keeps snapshots in memory; tests use it and can
//!   make saves fail on purpose.

pub mod file;
pub mod memory;

use std::future::Future;
use std::pin::Pin;

pub use file::FileGraphStore;
pub use memory::MemoryGraphStore;

use crate::errors::Result;
use crate::graph::{Edge, GraphSnapshot, Node};
use crate::layout::NodePosition;

/// Boxed future returned by [`GraphStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Create/read/update access to project graphs.
pub trait GraphStore: Send + Sync {
    /// All nodes of a project, in creation order.
    fn list_nodes<'a>(&'a self, project_id: &'a str) -> StoreFuture<'a, Vec<Node>>;

    /// All edges of a project.
    fn list_edges<'a>(&'a self, project_id: &'a str) -> StoreFuture<'a, Vec<Edge>>;

    /// Persist computed positions. Positions for unknown node ids are
    /// skipped; nodes not mentioned keep whatever they had.
    fn save_positions<'a>(
        &'a self,
        project_id: &'a str,
        positions: &'a [NodePosition],
    ) -> StoreFuture<'a, ()>;
}

/// Read nodes and edges into one snapshot.
pub async fn load_snapshot<S>(store: &S, project_id: &str) -> Result<GraphSnapshot>
where
    S: GraphStore + ?Sized,
{
    let nodes = store.list_nodes(project_id).await?;
    let edges = store.list_edges(project_id).await?;
    Ok(GraphSnapshot::new(nodes, edges))
}

/// Apply positions to a snapshot in place. Returns how many nodes changed.
pub(crate) fn apply_positions(snapshot: &mut GraphSnapshot, positions: &[NodePosition]) -> usize {
    let mut applied = 0;
    for pos in positions {
        match snapshot.nodes.iter_mut().find(|n| n.id == pos.node_id) {
            Some(node) => {
                node.position = Some(crate::graph::Position::new(pos.x, pos.y));
                applied += 1;
            }
            None => {
                tracing::warn!(node = %pos.node_id, "position for unknown node; skipping");
            }
        }
    }
    applied
}
