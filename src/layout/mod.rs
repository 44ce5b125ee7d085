// src/layout/mod.rs

//! Deterministic node placement.
//!
//! - [`grid`] packs longest-path layers row-major into a fixed column count.
//! - [`layered`] is a rank-based flow layout (cycle removal, longest-path
//!   ranking, barycenter ordering, fixed spacing), left-to-right or
//!   top-to-bottom.
//!
//! Both read only topology. Saved positions are sticky: with
//! [`LayoutScope::Unpositioned`] only nodes without a position receive
//! coordinates. [`LayoutScope::All`] is the explicit "Organize" request.

pub mod grid;
pub mod layered;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LayoutSection;
use crate::graph::GraphModel;
use crate::types::{LayoutMode, NodeId};

/// Computed placement for one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub node_id: NodeId,
    pub x: f64,
    pub y: f64,
}

/// Which nodes a layout run is allowed to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutScope {
    /// Only nodes without a saved position; saved ones are untouched.
    #[default]
    Unpositioned,
    /// Every node in view ("Organize").
    All,
}

impl LayoutScope {
    pub(crate) fn includes(self, node: &crate::graph::Node) -> bool {
        match self {
            LayoutScope::All => true,
            LayoutScope::Unpositioned => node.needs_layout(),
        }
    }
}

/// Spacing parameters shared by both layout modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub columns: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    pub rank_gap: f64,
    pub node_gap: f64,
    pub node_width: f64,
    pub node_height: f64,
    pub max_sweeps: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::from(&LayoutSection::default())
    }
}

impl From<&LayoutSection> for LayoutOptions {
    fn from(section: &LayoutSection) -> Self {
        Self {
            columns: section.columns.max(1),
            cell_width: section.cell_width,
            cell_height: section.cell_height,
            rank_gap: section.rank_gap,
            node_gap: section.node_gap,
            node_width: section.node_width,
            node_height: section.node_height,
            max_sweeps: section.max_sweeps,
        }
    }
}

/// Compute positions for the nodes in `scope`, in snapshot order.
pub fn layout_positions(
    model: &GraphModel<'_>,
    mode: LayoutMode,
    options: &LayoutOptions,
    scope: LayoutScope,
) -> Vec<NodePosition> {
    let positions = match mode {
        LayoutMode::Grid => grid::grid_positions(model, options, scope),
        LayoutMode::Lr | LayoutMode::Tb => layered::layered_positions(model, mode, options, scope),
    };

    debug!(
        ?mode,
        ?scope,
        placed = positions.len(),
        total = model.len(),
        "computed layout positions"
    );

    positions
}
