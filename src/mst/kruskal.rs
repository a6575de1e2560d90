use super::{MstAlgorithm, UnionFind};
use crate::error::MstError;
use crate::graph::Edge;

/// Kruskal's algorithm as an [`MstAlgorithm`]. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl MstAlgorithm for Kruskal {
    fn spanning_tree(&self, edges: &[Edge]) -> Result<Vec<Edge>, MstError> {
        Ok(kruskal(edges))
    }
}

/// Builds a minimum spanning tree by scanning edges in ascending weight order.
///
/// The sort is stable, so among equal weights the edge that comes first in
/// `edges` is tried first. Every edge is scanned; an edge whose endpoints are
/// already connected is skipped. For a disconnected graph the result is a
/// minimum spanning forest, and an empty input gives an empty result.
pub fn kruskal(edges: &[Edge]) -> Vec<Edge> {
    let mut sorted: Vec<&Edge> = edges.iter().collect();
    sorted.sort_by_key(|edge| edge.weight());

    let mut sets = UnionFind::new();
    let mut mst = Vec::new();
    for edge in sorted {
        if sets.same(edge.vertex_a(), edge.vertex_b()) {
            log::trace!("Kruskal skips {edge}: would close a cycle");
            continue;
        }
        sets.union(edge.vertex_a(), edge.vertex_b());
        mst.push(edge.clone());
    }
    mst
}
