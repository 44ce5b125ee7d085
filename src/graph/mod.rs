// src/graph/mod.rs

//! Project graph snapshot and its normalized view.
//!
//! - [`model`] holds the plain node/edge data as supplied by the store.
//! - [`graph`] builds a [`GraphModel`] that orients every typed edge as
//!   precursor -> successor and answers neighbour lookups.

pub mod graph;
pub mod model;

pub use graph::{GraphModel, Link};
pub use model::{Edge, GraphSnapshot, Node, Position};
