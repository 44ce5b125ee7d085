// tests/blocking_analysis.rs

mod common;

use flowstate::analysis::ProjectAnalysis;
use flowstate::config::RelationPolicy;
use flowstate::graph::{GraphModel, GraphSnapshot};

use crate::common::builders::{NodeBuilder, SnapshotBuilder};
use crate::common::fixtures;
use crate::common::init_tracing;

fn with_analysis<T>(snap: &GraphSnapshot, f: impl FnOnce(&ProjectAnalysis<'_>) -> T) -> T {
    let model = GraphModel::build(&snap.nodes, &snap.edges);
    let policy = RelationPolicy::default();
    let analysis = ProjectAnalysis::new(&model, &policy);
    f(&analysis)
}

#[test]
fn blocked_by_lists_only_unfinished_precursors() {
    init_tracing();
    let snap = SnapshotBuilder::new()
        .with_node(NodeBuilder::new("a").title("Write brief").build())
        .with_node(NodeBuilder::new("e").title("Legal review").done().build())
        .with_node(NodeBuilder::new("d").title("Launch").build())
        .depends_on("d", "a")
        .approval("d", "e")
        .build();

    with_analysis(&snap, |an| {
        assert_eq!(an.blocking().blocked_by_titles("d"), vec!["Write brief"]);
        assert!(an.blocking().blocked_by_titles("a").is_empty());
    });
}

#[test]
fn blocked_by_deduplicates_parallel_edges() {
    let snap = SnapshotBuilder::new()
        .with_task("a")
        .with_task("b")
        .depends_on("b", "a")
        .approval("b", "a")
        .build();

    with_analysis(&snap, |an| {
        assert_eq!(an.blocking().blocked_by_titles("b"), vec!["a"]);
    });
}

#[test]
fn unfinished_node_blocks_all_successors() {
    let snap = SnapshotBuilder::new()
        .with_task("a")
        .with_task("b")
        .with_task("c")
        .depends_on("b", "a")
        .needs_info("c", "a")
        .build();

    with_analysis(&snap, |an| {
        assert_eq!(an.blocking().blocking_titles("a"), vec!["b", "c"]);
    });
}

#[test]
fn waiting_node_still_blocks_downstream() {
    let snap = SnapshotBuilder::new()
        .with_task("x")
        .with_task("w")
        .with_task("y")
        .approval("w", "x")
        .depends_on("y", "w")
        .build();

    with_analysis(&snap, |an| {
        assert_eq!(
            an.computed_status_of("w"),
            Some(flowstate::types::ComputedStatus::Waiting)
        );
        assert_eq!(an.blocking().blocking_titles("w"), vec!["y"]);
    });
}

#[test]
fn done_node_blocks_nothing() {
    let snap = SnapshotBuilder::new()
        .with_node(NodeBuilder::new("a").done().build())
        .with_task("b")
        .depends_on("b", "a")
        .build();

    with_analysis(&snap, |an| {
        assert!(an.blocking().blocking_titles("a").is_empty());
        assert!(an.blocking().blocked_by_titles("b").is_empty());
    });
}

#[test]
fn blocks_count_is_one_hop_distinct_depends_on_successors() {
    let snap = SnapshotBuilder::new()
        .with_task("a")
        .with_task("b")
        .with_task("c")
        .with_task("d")
        .with_task("e")
        .depends_on("b", "a")
        .depends_on("c", "a")
        .depends_on("b", "a")
        .approval("d", "a")
        .depends_on("e", "b")
        .build();

    with_analysis(&snap, |an| {
        assert_eq!(an.blocking().blocks_count("a"), 2);
        assert_eq!(an.blocking().blocks_count("b"), 1);
        assert_eq!(an.blocking().blocks_count("e"), 0);
    });
}

#[test]
fn cross_owner_depends_on_blocks_someone_else() {
    let snap = fixtures::cross_owner_block();

    with_analysis(&snap, |an| {
        let f = an.model().node("f").expect("f");
        assert!(an.blocking().blocks_someone_else(f, "u"));
    });
}

#[test]
fn shared_owner_is_not_someone_else() {
    let snap = SnapshotBuilder::new()
        .with_node(NodeBuilder::new("f").owner("u").build())
        .with_node(NodeBuilder::new("g").owner("u").owner("v").build())
        .depends_on("g", "f")
        .build();

    with_analysis(&snap, |an| {
        let f = an.model().node("f").expect("f");
        assert!(!an.blocking().blocks_someone_else(f, "u"));
    });
}

#[test]
fn unowned_successor_is_not_someone_else() {
    let snap = SnapshotBuilder::new()
        .with_node(NodeBuilder::new("f").owner("u").build())
        .with_task("g")
        .depends_on("g", "f")
        .build();

    with_analysis(&snap, |an| {
        let f = an.model().node("f").expect("f");
        assert!(!an.blocking().blocks_someone_else(f, "u"));
    });
}

#[test]
fn only_depends_on_counts_as_blocking_others() {
    let snap = SnapshotBuilder::new()
        .with_node(NodeBuilder::new("f").owner("u").build())
        .with_node(NodeBuilder::new("g").owner("v").build())
        .with_node(NodeBuilder::new("h").owner("v").build())
        .with_node(NodeBuilder::new("i").owner("v").build())
        .handoff("f", "g")
        .approval("h", "f")
        .needs_info("i", "f")
        .build();

    with_analysis(&snap, |an| {
        let f = an.model().node("f").expect("f");
        assert!(!an.blocking().blocks_someone_else(f, "u"));
        assert_eq!(an.blocking().blocks_count("f"), 0);
    });
}

#[test]
fn team_flavour_uses_team_membership() {
    let snap = SnapshotBuilder::new()
        .with_node(NodeBuilder::new("api").team("core").build())
        .with_node(NodeBuilder::new("ui").team("web").build())
        .with_node(NodeBuilder::new("sdk").team("core").build())
        .with_node(NodeBuilder::new("docs").team("core").build())
        .depends_on("ui", "api")
        .depends_on("docs", "sdk")
        .build();

    with_analysis(&snap, |an| {
        let api = an.model().node("api").expect("api");
        let sdk = an.model().node("sdk").expect("sdk");
        assert!(an.blocking().blocks_other_team(api, "core"));
        assert!(!an.blocking().blocks_other_team(api, "web"));
        assert!(!an.blocking().blocks_other_team(sdk, "core"));
    });
}

#[test]
fn report_explains_every_node() {
    let snap = fixtures::linear_chain();

    with_analysis(&snap, |an| {
        let report = an.report();
        assert_eq!(report.nodes.len(), 3);

        let b = report.node("b").expect("b row");
        assert_eq!(b.blocked_by, vec!["a".to_string()]);
        assert_eq!(b.blocking, vec!["c".to_string()]);
        assert_eq!(b.blocks_count, 1);
        assert!(report.dropped_edges.is_empty());
    });
}
