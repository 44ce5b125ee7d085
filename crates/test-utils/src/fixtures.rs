//! Small canned graphs shared by several test files.

use flowstate::graph::GraphSnapshot;

use crate::builders::{NodeBuilder, SnapshotBuilder};

/// `a <- b <- c`, all DEPENDS_ON and TODO.
pub fn linear_chain() -> GraphSnapshot {
    SnapshotBuilder::new()
        .with_task("a")
        .with_task("b")
        .with_task("c")
        .depends_on("b", "a")
        .depends_on("c", "b")
        .build()
}

/// `a` and `b` depend on each other, both TODO.
pub fn mutual_dependency() -> GraphSnapshot {
    SnapshotBuilder::new()
        .with_task("a")
        .with_task("b")
        .depends_on("a", "b")
        .depends_on("b", "a")
        .build()
}

/// `f` (DOING, owned by u) blocks `g` (TODO, owned only by v) via DEPENDS_ON.
pub fn cross_owner_block() -> GraphSnapshot {
    SnapshotBuilder::new()
        .with_node(NodeBuilder::new("f").title("Ship API").doing().owner("u").build())
        .with_node(NodeBuilder::new("g").title("Build client").owner("v").build())
        .depends_on("g", "f")
        .build()
}
