use super::MstAlgorithm;
use crate::error::MstError;
use crate::graph::{distinct_vertices, Edge};
use std::collections::HashSet;

/// Prim's algorithm as an [`MstAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

impl MstAlgorithm for Prim {
    fn spanning_tree(&self, edges: &[Edge]) -> Result<Vec<Edge>, MstError> {
        prim(edges)
    }
}

/// Grows a minimum spanning tree from the first endpoint of the first edge.
///
/// Each round rescans the whole edge list and takes the lightest edge with
/// exactly one visited endpoint; on equal weights the earliest edge wins.
/// Growth stops once every distinct vertex is visited.
///
/// # Errors
///
/// * [`MstError::EmptyGraphForPrim`] if `edges` is empty.
/// * [`MstError::DisconnectedGraph`] if a round finds no crossing edge while
///   some vertex is still unvisited.
pub fn prim(edges: &[Edge]) -> Result<Vec<Edge>, MstError> {
    let start = edges.first().ok_or(MstError::EmptyGraphForPrim)?.vertex_a();
    let total = distinct_vertices(edges).len();

    let mut visited: HashSet<&str> = HashSet::with_capacity(total);
    visited.insert(start);
    let mut mst = Vec::with_capacity(total - 1);

    while visited.len() < total {
        let mut min_edge: Option<&Edge> = None;
        for edge in edges {
            let crosses = visited.contains(edge.vertex_a()) != visited.contains(edge.vertex_b());
            if crosses && min_edge.is_none_or(|min| edge.weight() < min.weight()) {
                min_edge = Some(edge);
            }
        }

        let Some(edge) = min_edge else {
            log::warn!(
                "Prim stopped after reaching {} of {total} vertices",
                visited.len()
            );
            return Err(MstError::DisconnectedGraph {
                visited: visited.len(),
                total,
            });
        };
        log::trace!("Prim takes {edge}");
        visited.insert(edge.vertex_a());
        visited.insert(edge.vertex_b());
        mst.push(edge.clone());
    }
    Ok(mst)
}
