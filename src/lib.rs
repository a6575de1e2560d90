//! Minimum spanning trees of small, interactively built graphs.
//!
//! A [`Graph`] collects undirected weighted edges between string-labelled
//! vertices. [`compute_mst`] runs Kruskal's or Prim's algorithm over an edge
//! slice and returns the selected edges in the order they were picked.

mod error;
pub mod graph;
pub mod mst;

pub use error::MstError;
pub use graph::{parse_weight, total_weight, Edge, Graph};
pub use mst::{compute_mst, kruskal, prim, MstAlgorithm, Strategy};
