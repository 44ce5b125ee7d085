// src/layout/layered.rs

//! Layered directional layout.
//!
//! 1. Cycle removal: self-loops are ignored and a greedy feedback arc set
//!    is reversed, so ranking always terminates.
//! 2. Rank assignment: longest path from sources over the resulting DAG.
//! 3. Ordering within ranks: alternating down/up barycenter sweeps, keeping
//!    the ordering with the fewest crossings seen.
//! 4. Coordinates: fixed inter-rank and intra-rank spacing, each rank
//!    centred on the widest one.
//!
//! Identical input always produces identical output.

use std::collections::HashSet;

use petgraph::algo::{greedy_feedback_arc_set, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::{debug, warn};

use crate::graph::GraphModel;
use crate::layout::{LayoutOptions, LayoutScope, NodePosition};
use crate::types::LayoutMode;

/// Acyclic adjacency derived from the model, indexed like the node slice.
#[derive(Debug, Clone)]
pub struct RankGraph {
    n: usize,
    /// Downstream neighbours (`u -> v` means v ranks after u).
    down: Vec<Vec<usize>>,
    /// Upstream neighbours.
    up: Vec<Vec<usize>>,
    reversed: usize,
}

impl RankGraph {
    /// Build the acyclic graph used for ranking.
    pub fn from_model(model: &GraphModel<'_>) -> Self {
        let n = model.len();

        let mut graph: DiGraph<(), ()> = DiGraph::with_capacity(n, model.edge_count());
        for _ in 0..n {
            graph.add_node(());
        }

        let mut seen = HashSet::new();
        for link in model.links() {
            if link.precursor == link.successor {
                continue;
            }
            if seen.insert((link.precursor, link.successor)) {
                graph.add_edge(
                    NodeIndex::new(link.precursor),
                    NodeIndex::new(link.successor),
                    (),
                );
            }
        }

        let feedback: HashSet<_> = greedy_feedback_arc_set(&graph).map(|e| e.id()).collect();

        let mut down = vec![Vec::new(); n];
        let mut up = vec![Vec::new(); n];
        let mut edge_set = HashSet::new();

        for edge in graph.edge_references() {
            let (u, v) = if feedback.contains(&edge.id()) {
                (edge.target().index(), edge.source().index())
            } else {
                (edge.source().index(), edge.target().index())
            };
            // A reversed edge can duplicate an existing one.
            if edge_set.insert((u, v)) {
                down[u].push(v);
                up[v].push(u);
            }
        }

        if !feedback.is_empty() {
            debug!(reversed = feedback.len(), "reversed feedback edges before ranking");
        }

        Self {
            n,
            down,
            up,
            reversed: feedback.len(),
        }
    }

    /// Number of edges reversed to break cycles.
    pub fn reversed_edges(&self) -> usize {
        self.reversed
    }

    /// Longest-path ranks: sources get 0, everything else
    /// `1 + max(rank of upstream neighbours)`.
    pub fn assign_ranks(&self) -> Vec<usize> {
        let mut dag: DiGraph<(), ()> = DiGraph::with_capacity(self.n, 0);
        for _ in 0..self.n {
            dag.add_node(());
        }
        for (u, targets) in self.down.iter().enumerate() {
            for &v in targets {
                dag.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
            }
        }

        let order: Vec<usize> = match toposort(&dag, None) {
            Ok(order) => order.into_iter().map(|idx| idx.index()).collect(),
            Err(cycle) => {
                warn!(
                    node = cycle.node_id().index(),
                    "cycle survived feedback arc removal; ranking in snapshot order"
                );
                (0..self.n).collect()
            }
        };

        let mut ranks = vec![0usize; self.n];
        for u in order {
            for &v in &self.down[u] {
                ranks[v] = ranks[v].max(ranks[u] + 1);
            }
        }
        ranks
    }
}

/// Bucket node indices by rank, each bucket in snapshot order.
fn build_rank_buckets(ranks: &[usize]) -> Vec<Vec<usize>> {
    let Some(max_rank) = ranks.iter().copied().max() else {
        return Vec::new();
    };
    let mut buckets = vec![Vec::new(); max_rank + 1];
    for (v, &r) in ranks.iter().enumerate() {
        buckets[r].push(v);
    }
    buckets
}

/// Average position of `neighbours` within `adjacent`; `None` if no
/// neighbour sits in that rank.
fn barycenter(neighbours: &[usize], position: &[usize], in_adjacent: &[bool]) -> Option<f64> {
    let (sum, count) = neighbours
        .iter()
        .filter(|&&nb| in_adjacent[nb])
        .fold((0usize, 0usize), |(s, c), &nb| (s + position[nb], c + 1));
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

/// Reorder `rank_order[r]` by barycenter against `rank_order[fixed]`.
///
/// Nodes with no neighbour in the fixed rank keep their current slot as
/// their key, so they do not drift.
fn sweep_rank(
    rank_order: &mut [Vec<usize>],
    neighbours: &[Vec<usize>],
    r: usize,
    fixed: usize,
    n: usize,
) {
    let mut position = vec![0usize; n];
    let mut in_fixed = vec![false; n];
    for (i, &v) in rank_order[fixed].iter().enumerate() {
        position[v] = i;
        in_fixed[v] = true;
    }

    let mut scored: Vec<(usize, f64, usize)> = rank_order[r]
        .iter()
        .enumerate()
        .map(|(slot, &v)| {
            let key = barycenter(&neighbours[v], &position, &in_fixed).unwrap_or(slot as f64);
            (v, key, slot)
        })
        .collect();

    scored.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.2.cmp(&b.2))
    });

    rank_order[r] = scored.into_iter().map(|(v, _, _)| v).collect();
}

/// Edge crossings between two adjacent ranks.
fn count_crossings(upper: &[usize], lower: &[usize], graph: &RankGraph) -> usize {
    let mut pos_lower = vec![usize::MAX; graph.n];
    for (i, &v) in lower.iter().enumerate() {
        pos_lower[v] = i;
    }

    let mut edges: Vec<(usize, usize)> = Vec::new();
    for (i, &u) in upper.iter().enumerate() {
        for &v in &graph.down[u] {
            if pos_lower[v] != usize::MAX {
                edges.push((i, pos_lower[v]));
            }
        }
    }

    let mut crossings = 0;
    for i in 0..edges.len() {
        for j in (i + 1)..edges.len() {
            let (a1, b1) = edges[i];
            let (a2, b2) = edges[j];
            if (a1 < a2 && b1 > b2) || (a1 > a2 && b1 < b2) {
                crossings += 1;
            }
        }
    }
    crossings
}

/// Total crossings over all adjacent rank pairs.
pub fn total_crossings(rank_order: &[Vec<usize>], graph: &RankGraph) -> usize {
    rank_order
        .windows(2)
        .map(|pair| count_crossings(&pair[0], &pair[1], graph))
        .sum()
}

/// Iterated barycenter crossing reduction.
///
/// Stops after `max_sweeps` down/up pairs, when crossings reach zero, or on
/// the first pair that does not improve; the best ordering seen is kept.
pub fn minimize_crossings(rank_order: &mut Vec<Vec<usize>>, graph: &RankGraph, max_sweeps: usize) -> usize {
    let mut best = total_crossings(rank_order, graph);
    if rank_order.len() <= 1 || best == 0 {
        return best;
    }
    let mut best_order = rank_order.clone();

    for _ in 0..max_sweeps {
        for r in 1..rank_order.len() {
            sweep_rank(rank_order, &graph.up, r, r - 1, graph.n);
        }
        for r in (0..rank_order.len() - 1).rev() {
            sweep_rank(rank_order, &graph.down, r, r + 1, graph.n);
        }

        let crossings = total_crossings(rank_order, graph);
        if crossings < best {
            best = crossings;
            best_order = rank_order.clone();
            if best == 0 {
                break;
            }
        } else {
            break;
        }
    }

    *rank_order = best_order;
    best
}

/// Ranks and in-rank order for every node, before coordinates.
pub fn rank_order(model: &GraphModel<'_>, max_sweeps: usize) -> Vec<Vec<usize>> {
    let graph = RankGraph::from_model(model);
    let ranks = graph.assign_ranks();
    let mut order = build_rank_buckets(&ranks);
    let crossings = minimize_crossings(&mut order, &graph, max_sweeps.max(1));
    debug!(
        ranks = order.len(),
        crossings,
        reversed = graph.reversed_edges(),
        "ordered ranks"
    );
    order
}

/// Full layered layout. `mode` must be `Lr` or `Tb`; `Grid` is treated as `Tb`.
///
/// With [`LayoutScope::Unpositioned`] the block is shifted along the in-rank
/// axis past the furthest saved position, so new nodes never land on
/// sticky ones.
pub fn layered_positions(
    model: &GraphModel<'_>,
    mode: LayoutMode,
    options: &LayoutOptions,
    scope: LayoutScope,
) -> Vec<NodePosition> {
    let nodes = model.nodes();
    let order = rank_order(model, options.max_sweeps);

    let horizontal = mode == LayoutMode::Lr;
    let (rank_step, order_step) = if horizontal {
        (
            options.node_width + options.rank_gap,
            options.node_height + options.node_gap,
        )
    } else {
        (
            options.node_height + options.rank_gap,
            options.node_width + options.node_gap,
        )
    };

    let offset = match scope {
        LayoutScope::All => 0.0,
        LayoutScope::Unpositioned => nodes
            .iter()
            .filter_map(|n| n.position)
            .map(|p| if horizontal { p.y } else { p.x })
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
            .map_or(0.0, |max| max + order_step),
    };

    let widest = order.iter().map(Vec::len).max().unwrap_or(0);
    let mut coords: Vec<Option<(f64, f64)>> = vec![None; nodes.len()];

    for (r, members) in order.iter().enumerate() {
        let shift = (widest - members.len()) as f64 * order_step / 2.0;
        for (slot, &v) in members.iter().enumerate() {
            let rank_coord = r as f64 * rank_step;
            let order_coord = offset + shift + slot as f64 * order_step;
            coords[v] = Some(if horizontal {
                (rank_coord, order_coord)
            } else {
                (order_coord, rank_coord)
            });
        }
    }

    nodes
        .iter()
        .zip(coords)
        .enumerate()
        .filter(|(i, (node, _))| model.is_addressable(*i) && scope.includes(node))
        .filter_map(|(_, (node, xy))| {
            let (x, y) = xy?;
            Some(NodePosition {
                node_id: node.id.clone(),
                x,
                y,
            })
        })
        .collect()
}
