// src/organize.rs

//! Load -> lay out -> persist, against any [`GraphStore`].
//!
//! Two entry points:
//! - [`place_unpositioned`]: initial render; only nodes without a saved
//!   position are placed.
//! - [`organize`]: the user-triggered "Organize"; every node is re-placed.
//!
//! Nothing here runs automatically, so it never fights manual placement.

use tracing::info;

use crate::errors::{FlowstateError, Result};
use crate::graph::GraphModel;
use crate::layout::{LayoutOptions, LayoutScope, NodePosition, layout_positions};
use crate::store::{GraphStore, load_snapshot};
use crate::types::LayoutMode;

/// Compute positions for `scope` and persist them. Returns what was saved.
pub async fn place_project<S>(
    store: &S,
    project_id: &str,
    mode: LayoutMode,
    options: &LayoutOptions,
    scope: LayoutScope,
) -> Result<Vec<NodePosition>>
where
    S: GraphStore + ?Sized,
{
    let positions = compute_project_layout(store, project_id, mode, options, scope).await?;

    if positions.is_empty() {
        info!(project = %project_id, "nothing to place");
        return Ok(positions);
    }

    store
        .save_positions(project_id, &positions)
        .await
        .map_err(|e| match e {
            FlowstateError::Persistence(_) => e,
            other => FlowstateError::Persistence(other.to_string()),
        })?;

    info!(project = %project_id, ?mode, ?scope, placed = positions.len(), "saved layout");
    Ok(positions)
}

/// Compute positions without persisting (dry run).
pub async fn compute_project_layout<S>(
    store: &S,
    project_id: &str,
    mode: LayoutMode,
    options: &LayoutOptions,
    scope: LayoutScope,
) -> Result<Vec<NodePosition>>
where
    S: GraphStore + ?Sized,
{
    let snapshot = load_snapshot(store, project_id).await?;
    let model = GraphModel::build(&snapshot.nodes, &snapshot.edges);
    Ok(layout_positions(&model, mode, options, scope))
}

/// Place only nodes that lack a saved position.
pub async fn place_unpositioned<S>(
    store: &S,
    project_id: &str,
    mode: LayoutMode,
    options: &LayoutOptions,
) -> Result<Vec<NodePosition>>
where
    S: GraphStore + ?Sized,
{
    place_project(store, project_id, mode, options, LayoutScope::Unpositioned).await
}

/// Re-place every node in the project and persist the result.
pub async fn organize<S>(
    store: &S,
    project_id: &str,
    mode: LayoutMode,
    options: &LayoutOptions,
) -> Result<Vec<NodePosition>>
where
    S: GraphStore + ?Sized,
{
    place_project(store, project_id, mode, options, LayoutScope::All).await
}
