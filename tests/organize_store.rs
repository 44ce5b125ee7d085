// tests/organize_store.rs

mod common;

use std::path::Path;

use flowstate::errors::FlowstateError;
use flowstate::graph::Position;
use flowstate::layout::{LayoutOptions, LayoutScope, NodePosition};
use flowstate::organize::{compute_project_layout, organize, place_project, place_unpositioned};
use flowstate::store::{FileGraphStore, GraphStore, MemoryGraphStore, load_snapshot};
use flowstate::types::LayoutMode;
use tempfile::TempDir;

use crate::common::builders::{NodeBuilder, SnapshotBuilder};
use crate::common::{fixtures, init_tracing, with_timeout, write_project};

fn memory_store_with(project: &str, snap: flowstate::graph::GraphSnapshot) -> MemoryGraphStore {
    let store = MemoryGraphStore::new();
    store.insert_project(project, snap).expect("insert project");
    store
}

fn saved_position(store: &MemoryGraphStore, project: &str, id: &str) -> Option<Position> {
    store
        .snapshot(project)
        .expect("snapshot")
        .and_then(|s| s.node(id).and_then(|n| n.position))
}

#[tokio::test]
async fn organize_persists_every_position() {
    init_tracing();
    let store = memory_store_with("p", fixtures::linear_chain());

    let placed = with_timeout(organize(&store, "p", LayoutMode::Lr, &LayoutOptions::default()))
        .await
        .expect("organize");

    assert_eq!(placed.len(), 3);
    for p in &placed {
        assert_eq!(
            saved_position(&store, "p", &p.node_id),
            Some(Position::new(p.x, p.y))
        );
    }
}

#[tokio::test]
async fn place_unpositioned_keeps_sticky_nodes() {
    let snap = SnapshotBuilder::new()
        .with_node(NodeBuilder::new("a").at(10.0, 500.0).build())
        .with_task("b")
        .build();
    let store = memory_store_with("p", snap);

    let placed = place_unpositioned(&store, "p", LayoutMode::Grid, &LayoutOptions::default())
        .await
        .expect("place");

    assert_eq!(placed.len(), 1);
    assert_eq!(saved_position(&store, "p", "a"), Some(Position::new(10.0, 500.0)));
    assert_eq!(saved_position(&store, "p", "b"), Some(Position::new(0.0, 660.0)));
}

#[tokio::test]
async fn nothing_to_place_skips_the_save() {
    let snap = SnapshotBuilder::new()
        .with_node(NodeBuilder::new("a").at(0.0, 0.0).build())
        .build();
    let store = memory_store_with("p", snap);
    store.set_fail_saves(true);

    let placed = place_unpositioned(&store, "p", LayoutMode::Tb, &LayoutOptions::default())
        .await
        .expect("no save attempted");
    assert!(placed.is_empty());
}

#[tokio::test]
async fn failed_save_surfaces_persistence_error() {
    let store = memory_store_with("p", fixtures::linear_chain());
    store.set_fail_saves(true);

    let err = organize(&store, "p", LayoutMode::Grid, &LayoutOptions::default())
        .await
        .expect_err("save should fail");
    assert!(matches!(err, FlowstateError::Persistence(_)), "{err}");

    assert_eq!(saved_position(&store, "p", "a"), None);
}

#[tokio::test]
async fn unknown_project_is_a_persistence_error() {
    let store = MemoryGraphStore::new();

    let err = load_snapshot(&store, "missing")
        .await
        .expect_err("unknown project");
    assert!(matches!(err, FlowstateError::Persistence(_)), "{err}");
}

#[tokio::test]
async fn positions_for_unknown_nodes_are_skipped() {
    let store = memory_store_with("p", fixtures::linear_chain());
    let positions = vec![
        NodePosition {
            node_id: "a".to_string(),
            x: 1.0,
            y: 2.0,
        },
        NodePosition {
            node_id: "ghost".to_string(),
            x: 3.0,
            y: 4.0,
        },
    ];

    store.save_positions("p", &positions).await.expect("save");

    assert_eq!(saved_position(&store, "p", "a"), Some(Position::new(1.0, 2.0)));
    let snap = store.snapshot("p").expect("snapshot").expect("project");
    assert_eq!(snap.nodes.len(), 3);
}

#[tokio::test]
async fn dry_run_does_not_persist() {
    let store = memory_store_with("p", fixtures::linear_chain());

    let placed = compute_project_layout(
        &store,
        "p",
        LayoutMode::Tb,
        &LayoutOptions::default(),
        LayoutScope::All,
    )
    .await
    .expect("compute");

    assert_eq!(placed.len(), 3);
    assert_eq!(saved_position(&store, "p", "a"), None);
}

#[tokio::test]
async fn store_trait_object_is_usable() {
    let store = memory_store_with("p", fixtures::mutual_dependency());
    let dyn_store: &dyn GraphStore = &store;

    let placed = place_project(
        dyn_store,
        "p",
        LayoutMode::Lr,
        &LayoutOptions::default(),
        LayoutScope::All,
    )
    .await
    .expect("place");
    assert_eq!(placed.len(), 2);
}

const PROJECT_DOC: &str = r#"
[[node]]
id = "a"
title = "Draft proposal"
status = "doing"
owners = ["alice"]

[[node]]
id = "b"
title = "Review proposal"
type = "decision"
due_at = "2024-05-01T00:00:00Z"

[[edge]]
id = "e1"
from = "b"
to = "a"
relation = "depends_on"
"#;

fn write_project_doc(dir: &Path, name: &str) {
    std::fs::write(dir.join(format!("{name}.toml")), PROJECT_DOC).expect("write project");
}

#[tokio::test]
async fn file_store_reads_project_document() {
    let tmp = TempDir::new().expect("tempdir");
    write_project_doc(tmp.path(), "plan");
    let store = FileGraphStore::new(tmp.path());

    let snap = load_snapshot(&store, "plan").await.expect("load");
    assert_eq!(snap.nodes.len(), 2);
    assert_eq!(snap.edges.len(), 1);

    let a = snap.node("a").expect("a");
    assert!(a.is_owned_by("alice"));
    assert!(a.needs_layout());
    assert!(snap.node("b").expect("b").due_at.is_some());
}

#[tokio::test]
async fn file_store_round_trips_saved_positions() {
    let tmp = TempDir::new().expect("tempdir");
    write_project_doc(tmp.path(), "plan");
    let store = FileGraphStore::new(tmp.path());

    let placed = organize(&store, "plan", LayoutMode::Lr, &LayoutOptions::default())
        .await
        .expect("organize");
    assert_eq!(placed.len(), 2);

    let reloaded = load_snapshot(&store, "plan").await.expect("reload");
    for p in &placed {
        let node = reloaded.node(&p.node_id).expect("node");
        assert_eq!(node.position, Some(Position::new(p.x, p.y)));
    }
    // Everything else survives the rewrite.
    assert_eq!(reloaded.edges.len(), 1);
    assert!(reloaded.node("a").expect("a").is_owned_by("alice"));
    assert!(!tmp.path().join("plan.toml.tmp").exists());
}

#[tokio::test]
async fn file_store_places_only_new_nodes() {
    let tmp = TempDir::new().expect("tempdir");
    let snap = SnapshotBuilder::new()
        .with_node(NodeBuilder::new("old").at(40.0, 80.0).owner("u").build())
        .with_node(NodeBuilder::new("new").due_on(2025, 6, 30).build())
        .depends_on("new", "old")
        .build();
    let path = write_project(tmp.path(), "roadmap", &snap);

    let (store, project_id) = FileGraphStore::for_project_file(&path).expect("split path");
    assert_eq!(project_id, "roadmap");

    let placed = place_unpositioned(&store, &project_id, LayoutMode::Grid, &LayoutOptions::default())
        .await
        .expect("place");
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].node_id, "new");

    let reloaded = load_snapshot(&store, &project_id).await.expect("reload");
    assert_eq!(
        reloaded.node("old").and_then(|n| n.position),
        Some(Position::new(40.0, 80.0))
    );
    assert_eq!(
        reloaded.node("new").and_then(|n| n.position),
        Some(Position::new(placed[0].x, placed[0].y))
    );
    assert_eq!(reloaded.node("new").and_then(|n| n.due_at), snap.nodes[1].due_at);
}

#[tokio::test]
async fn file_store_missing_project_fails_to_save() {
    let tmp = TempDir::new().expect("tempdir");
    let store = FileGraphStore::new(tmp.path());

    let err = store
        .save_positions("absent", &[])
        .await
        .expect_err("missing file");
    assert!(matches!(err, FlowstateError::Persistence(_)), "{err}");
}

#[test]
fn project_file_path_splits_into_root_and_id() {
    let (store, id) = FileGraphStore::for_project_file(Path::new("plans/q3.toml")).expect("split");
    assert_eq!(id, "q3");
    assert_eq!(store.root(), Path::new("plans"));
    assert_eq!(store.project_path("q3"), Path::new("plans/q3.toml"));

    let (store, id) = FileGraphStore::for_project_file(Path::new("q3.toml")).expect("split");
    assert_eq!(id, "q3");
    assert_eq!(store.root(), Path::new("."));
}
