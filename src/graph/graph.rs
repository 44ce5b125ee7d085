// src/graph/graph.rs

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::{debug, warn};

use crate::graph::model::{Edge, Node};
use crate::types::{EdgeSide, Relation};

/// One normalized edge: `precursor` must complete before `successor`.
///
/// Indices refer to positions in [`GraphModel::nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub precursor: usize,
    pub successor: usize,
    pub relation: Relation,
}

/// Normalized, read-only view over one project's node and edge lists.
///
/// Every typed edge is stored precursor -> successor regardless of how it
/// was phrased. Edges whose endpoints are not in the node list are dropped
/// (not an error: a node may be mid-deletion). Cycles and self-loops are kept.
///
/// Node indices follow the order of the supplied node slice, which doubles
/// as the stable secondary key for deterministic output.
#[derive(Debug, Clone)]
pub struct GraphModel<'a> {
    nodes: &'a [Node],
    index: HashMap<&'a str, NodeIndex>,
    graph: DiGraph<usize, Relation>,
    dropped: Vec<&'a str>,
}

impl<'a> GraphModel<'a> {
    /// Build the model from a snapshot. Never fails.
    pub fn build(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let mut graph: DiGraph<usize, Relation> =
            DiGraph::with_capacity(nodes.len(), edges.len());
        let mut index: HashMap<&'a str, NodeIndex> = HashMap::with_capacity(nodes.len());

        for (i, node) in nodes.iter().enumerate() {
            // Indices must stay aligned with the slice, so duplicates still
            // get a graph node; only the first one is reachable by id.
            let idx = graph.add_node(i);
            if index.contains_key(node.id.as_str()) {
                warn!(node = %node.id, "duplicate node id in snapshot; keeping the first");
                continue;
            }
            index.insert(node.id.as_str(), idx);
        }

        let mut dropped = Vec::new();

        for edge in edges {
            let from = index.get(edge.from_node_id.as_str()).copied();
            let to = index.get(edge.to_node_id.as_str()).copied();

            let (Some(from), Some(to)) = (from, to) else {
                warn!(
                    edge = %edge.id,
                    from = %edge.from_node_id,
                    to = %edge.to_node_id,
                    "edge references a missing node; dropping"
                );
                dropped.push(edge.id.as_str());
                continue;
            };

            let (precursor, successor) = match edge.relation.precursor_side() {
                EdgeSide::From => (from, to),
                EdgeSide::To => (to, from),
            };
            graph.add_edge(precursor, successor, edge.relation);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            dropped = dropped.len(),
            "built graph model"
        );

        Self {
            nodes,
            index,
            graph,
            dropped,
        }
    }

    /// The caller-supplied node slice.
    pub fn nodes(&self) -> &'a [Node] {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges that survived normalization.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Ids of edges excluded because an endpoint was missing.
    pub fn dropped_edges(&self) -> &[&'a str] {
        &self.dropped
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).map(|idx| idx.index())
    }

    /// False for a later node whose id repeats an earlier one.
    pub fn is_addressable(&self, i: usize) -> bool {
        self.nodes
            .get(i)
            .is_some_and(|node| self.index_of(&node.id) == Some(i))
    }

    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    /// Immediate precursors of `id` with the relation that links them, in
    /// edge insertion order. Unknown ids have no precursors.
    pub fn precursors_of(&self, id: &str) -> Vec<(&'a Node, Relation)> {
        match self.index_of(id) {
            Some(i) => self.neighbours(i, Direction::Incoming),
            None => Vec::new(),
        }
    }

    /// Immediate successors of `id` with the relation that links them, in
    /// edge insertion order. Unknown ids have no successors.
    pub fn successors_of(&self, id: &str) -> Vec<(&'a Node, Relation)> {
        match self.index_of(id) {
            Some(i) => self.neighbours(i, Direction::Outgoing),
            None => Vec::new(),
        }
    }

    /// Index-based precursor lookup used by the layout engine.
    pub fn precursor_indices(&self, i: usize) -> Vec<usize> {
        self.neighbour_indices(i, Direction::Incoming)
    }

    /// Index-based successor lookup used by the layout engine.
    pub fn successor_indices(&self, i: usize) -> Vec<usize> {
        self.neighbour_indices(i, Direction::Outgoing)
    }

    /// All normalized edges in insertion order.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.graph.edge_references().map(|e| Link {
            precursor: self.graph[e.source()],
            successor: self.graph[e.target()],
            relation: *e.weight(),
        })
    }

    fn neighbours(&self, i: usize, dir: Direction) -> Vec<(&'a Node, Relation)> {
        self.sorted_edges(i, dir)
            .into_iter()
            .map(|(other, relation)| (&self.nodes[other], relation))
            .collect()
    }

    fn neighbour_indices(&self, i: usize, dir: Direction) -> Vec<usize> {
        self.sorted_edges(i, dir)
            .into_iter()
            .map(|(other, _)| other)
            .collect()
    }

    /// petgraph walks adjacency newest-first; re-sort by edge index so that
    /// neighbour order matches the snapshot's edge order.
    fn sorted_edges(&self, i: usize, dir: Direction) -> Vec<(usize, Relation)> {
        if i >= self.graph.node_count() {
            return Vec::new();
        }
        let idx = NodeIndex::new(i);

        let mut edges: Vec<(usize, usize, Relation)> = self
            .graph
            .edges_directed(idx, dir)
            .map(|e| {
                let other = match dir {
                    Direction::Incoming => e.source(),
                    Direction::Outgoing => e.target(),
                };
                (e.id().index(), self.graph[other], *e.weight())
            })
            .collect();
        edges.sort_by_key(|(edge_idx, _, _)| *edge_idx);

        edges
            .into_iter()
            .map(|(_, other, relation)| (other, relation))
            .collect()
    }
}
