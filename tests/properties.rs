// tests/properties.rs

use flowstate::analysis::compute_statuses;
use flowstate::config::RelationPolicy;
use flowstate::graph::{Edge, GraphModel, GraphSnapshot, Node};
use flowstate::layout::grid::compute_layers;
use flowstate::layout::{LayoutOptions, LayoutScope, layout_positions};
use flowstate::types::{ComputedStatus, LayoutMode, ManualStatus, Relation, Severity};
use proptest::prelude::*;

const MAX_NODES: usize = 12;

fn manual_status() -> impl Strategy<Value = ManualStatus> {
    prop_oneof![
        Just(ManualStatus::Todo),
        Just(ManualStatus::Doing),
        Just(ManualStatus::Done),
    ]
}

fn relation() -> impl Strategy<Value = Relation> {
    prop_oneof![
        Just(Relation::DependsOn),
        Just(Relation::HandoffTo),
        Just(Relation::NeedsInfoFrom),
        Just(Relation::ApprovalBy),
    ]
}

/// Arbitrary graph: cycles, self-loops and parallel edges allowed.
fn snapshot() -> impl Strategy<Value = GraphSnapshot> {
    (1..=MAX_NODES)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(manual_status(), n),
                prop::collection::vec((0..n, 0..n, relation()), 0..(n * 3)),
            )
        })
        .prop_map(|(statuses, edges)| build_snapshot(&statuses, edges))
}

/// Acyclic graph: every edge runs from a lower to a higher node index.
fn dag_snapshot() -> impl Strategy<Value = GraphSnapshot> {
    (2..=MAX_NODES)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(manual_status(), n),
                prop::collection::vec((0..n, 0..n), 0..(n * 2)),
            )
        })
        .prop_map(|(statuses, pairs)| {
            let edges = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| {
                    let (pre, succ) = if a < b { (a, b) } else { (b, a) };
                    // Stored as "succ DEPENDS_ON pre".
                    (succ, pre, Relation::DependsOn)
                })
                .collect();
            build_snapshot(&statuses, edges)
        })
}

fn build_snapshot(statuses: &[ManualStatus], edges: Vec<(usize, usize, Relation)>) -> GraphSnapshot {
    let nodes = statuses
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let mut node = Node::new(format!("n{i}"), format!("Node {i}"));
            node.manual_status = *s;
            node
        })
        .collect();
    let edges = edges
        .into_iter()
        .enumerate()
        .map(|(i, (from, to, rel))| Edge::new(format!("e{i}"), format!("n{from}"), format!("n{to}"), rel))
        .collect();
    GraphSnapshot::new(nodes, edges)
}

proptest! {
    #[test]
    fn done_iff_manual_done(snap in snapshot()) {
        let model = GraphModel::build(&snap.nodes, &snap.edges);
        let statuses = compute_statuses(&model, &RelationPolicy::default());

        for node in &snap.nodes {
            let computed = statuses.get(&node.id).expect("every node has a status");
            prop_assert_eq!(computed == ComputedStatus::Done, node.manual_status == ManualStatus::Done);
        }
    }

    #[test]
    fn blocked_iff_incomplete_hard_precursor(snap in snapshot()) {
        let model = GraphModel::build(&snap.nodes, &snap.edges);
        let policy = RelationPolicy::default();
        let statuses = compute_statuses(&model, &policy);

        for node in &snap.nodes {
            let computed = statuses.get(&node.id).expect("status");
            let precursors = model.precursors_of(&node.id);
            let hard = precursors
                .iter()
                .any(|(p, r)| !p.is_done() && policy.severity(*r) == Severity::Hard);
            let soft = precursors
                .iter()
                .any(|(p, r)| !p.is_done() && policy.severity(*r) == Severity::Soft);

            if node.is_done() {
                continue;
            }
            prop_assert_eq!(computed == ComputedStatus::Blocked, hard);
            prop_assert_eq!(computed == ComputedStatus::Waiting, !hard && soft);
            if precursors.is_empty() {
                prop_assert_eq!(computed, ComputedStatus::from(node.manual_status));
            }
        }
    }

    #[test]
    fn status_computation_is_idempotent(snap in snapshot()) {
        let model = GraphModel::build(&snap.nodes, &snap.edges);
        let policy = RelationPolicy::default();
        prop_assert_eq!(compute_statuses(&model, &policy), compute_statuses(&model, &policy));
    }

    #[test]
    fn every_mode_places_every_node(snap in snapshot()) {
        let model = GraphModel::build(&snap.nodes, &snap.edges);
        let options = LayoutOptions::default();

        for mode in [LayoutMode::Grid, LayoutMode::Lr, LayoutMode::Tb] {
            let placed = layout_positions(&model, mode, &options, LayoutScope::All);
            prop_assert_eq!(placed.len(), snap.nodes.len());
            for (node, pos) in snap.nodes.iter().zip(&placed) {
                prop_assert_eq!(&pos.node_id, &node.id);
                prop_assert!(pos.x.is_finite() && pos.y.is_finite());
            }
        }
    }

    #[test]
    fn grid_never_overlaps(snap in snapshot()) {
        let model = GraphModel::build(&snap.nodes, &snap.edges);
        let placed = layout_positions(&model, LayoutMode::Grid, &LayoutOptions::default(), LayoutScope::All);

        let mut cells: Vec<(i64, i64)> = placed.iter().map(|p| (p.x as i64, p.y as i64)).collect();
        cells.sort();
        cells.dedup();
        prop_assert_eq!(cells.len(), placed.len());
    }

    #[test]
    fn dag_precursors_come_first(snap in dag_snapshot()) {
        let model = GraphModel::build(&snap.nodes, &snap.edges);
        let layers = compute_layers(&model);
        let placed = layout_positions(&model, LayoutMode::Lr, &LayoutOptions::default(), LayoutScope::All);

        for link in model.links() {
            prop_assert!(layers[link.precursor] < layers[link.successor]);
            prop_assert!(placed[link.precursor].x < placed[link.successor].x);
        }
    }
}
