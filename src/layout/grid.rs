// src/layout/grid.rs

//! Topological grid layout.

use tracing::debug;

use crate::graph::GraphModel;
use crate::layout::{LayoutOptions, LayoutScope, NodePosition};

/// DFS frame: a node and a cursor into its precursor list.
struct Frame {
    node: usize,
    precursors: Vec<usize>,
    cursor: usize,
    layer: usize,
}

impl Frame {
    fn new(model: &GraphModel<'_>, node: usize) -> Self {
        Self {
            node,
            precursors: model.precursor_indices(node),
            cursor: 0,
            layer: 0,
        }
    }
}

/// Longest-path distance of every node from a node without precursors.
///
/// `layer(n) = 0` without precursors, else `1 + max(layer(p))`. A precursor
/// reached through a back edge (it is still on the DFS stack, so the edge
/// closes a cycle) is skipped, which is what guarantees termination. A node
/// whose only precursors close cycles therefore lands on layer 0.
///
/// Iterative so deep chains cannot overflow the stack.
pub fn compute_layers(model: &GraphModel<'_>) -> Vec<usize> {
    let n = model.len();
    let mut layers: Vec<Option<usize>> = vec![None; n];
    let mut on_stack = vec![false; n];
    let mut back_edges = 0usize;

    for start in 0..n {
        if layers[start].is_some() {
            continue;
        }

        let mut stack = vec![Frame::new(model, start)];
        on_stack[start] = true;

        while let Some(frame) = stack.last_mut() {
            if let Some(&p) = frame.precursors.get(frame.cursor) {
                frame.cursor += 1;

                if let Some(layer) = layers[p] {
                    frame.layer = frame.layer.max(layer + 1);
                } else if on_stack[p] {
                    back_edges += 1;
                } else {
                    on_stack[p] = true;
                    stack.push(Frame::new(model, p));
                }
                continue;
            }

            let Some(done) = stack.pop() else {
                break;
            };
            on_stack[done.node] = false;
            layers[done.node] = Some(done.layer);

            if let Some(parent) = stack.last_mut() {
                parent.layer = parent.layer.max(done.layer + 1);
            }
        }
    }

    if back_edges > 0 {
        debug!(back_edges, "skipped cycle-closing precursors while layering");
    }

    layers.into_iter().map(|l| l.unwrap_or(0)).collect()
}

/// Pack nodes row-major by (layer, snapshot index). Repeated ids get no slot.
///
/// With [`LayoutScope::Unpositioned`] the packed block starts one cell below
/// the lowest saved position so new nodes never land on sticky ones.
pub fn grid_positions(
    model: &GraphModel<'_>,
    options: &LayoutOptions,
    scope: LayoutScope,
) -> Vec<NodePosition> {
    let nodes = model.nodes();
    let layers = compute_layers(model);
    let columns = options.columns.max(1);

    let mut order: Vec<usize> = (0..nodes.len())
        .filter(|&i| model.is_addressable(i) && scope.includes(&nodes[i]))
        .collect();
    order.sort_by_key(|&i| (layers[i], i));

    let y_offset = match scope {
        LayoutScope::All => 0.0,
        LayoutScope::Unpositioned => nodes
            .iter()
            .filter_map(|n| n.position)
            .map(|p| p.y)
            .fold(None, |acc: Option<f64>, y| Some(acc.map_or(y, |a| a.max(y))))
            .map_or(0.0, |max_y| max_y + options.cell_height),
    };

    let mut placed: Vec<(usize, NodePosition)> = order
        .into_iter()
        .enumerate()
        .map(|(slot, i)| {
            let col = slot % columns;
            let row = slot / columns;
            (
                i,
                NodePosition {
                    node_id: nodes[i].id.clone(),
                    x: col as f64 * options.cell_width,
                    y: y_offset + row as f64 * options.cell_height,
                },
            )
        })
        .collect();

    placed.sort_by_key(|(i, _)| *i);
    placed.into_iter().map(|(_, p)| p).collect()
}
