mod kruskal;
mod prim;
mod union_find;

use crate::error::MstError;
use crate::graph::Edge;
pub use kruskal::{kruskal, Kruskal};
pub use prim::{prim, Prim};
use std::fmt;
use std::str::FromStr;
pub use union_find::UnionFind;

/// A minimum spanning tree algorithm over an edge list.
///
/// Implementations are stateless between calls and never mutate their input.
pub trait MstAlgorithm {
    /// Selects the edges of a minimum spanning tree of `edges`.
    ///
    /// # Returns
    ///
    /// The selected edges in the order the algorithm picked them.
    fn spanning_tree(&self, edges: &[Edge]) -> Result<Vec<Edge>, MstError>;
}

/// The MST algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Kruskal's algorithm: sorted edges merged through union-find.
    #[default]
    Kruskal,
    /// Prim's algorithm: grows one tree from the first edge's first endpoint.
    Prim,
}

impl Strategy {
    /// Every strategy, in display order.
    pub const ALL: [Strategy; 2] = [Strategy::Kruskal, Strategy::Prim];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Kruskal => f.write_str("Kruskal's Algorithm"),
            Strategy::Prim => f.write_str("Prim's Algorithm"),
        }
    }
}

impl FromStr for Strategy {
    type Err = MstError;

    /// Accepts `kruskal`/`prim` in any case, as well as the display captions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kruskal" | "kruskal's algorithm" => Ok(Strategy::Kruskal),
            "prim" | "prim's algorithm" => Ok(Strategy::Prim),
            _ => Err(MstError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Computes a minimum spanning tree of `edges` with the chosen strategy.
///
/// Kruskal never fails; on a disconnected graph it returns a spanning forest.
/// Prim fails with [`MstError::EmptyGraphForPrim`] on empty input and with
/// [`MstError::DisconnectedGraph`] when some vertex cannot be reached.
///
/// # Arguments
///
/// * `strategy` - The algorithm to run.
/// * `edges` - The input edges; only borrowed, never reordered.
///
/// # Example
///
/// ```
/// use mst_solver::{compute_mst, Edge, Strategy};
///
/// let edges = vec![Edge::new("A", "B", 5), Edge::new("A", "B", 1)];
/// let mst = compute_mst(Strategy::Prim, &edges).unwrap();
/// assert_eq!(mst, vec![Edge::new("A", "B", 1)]);
/// ```
pub fn compute_mst(strategy: Strategy, edges: &[Edge]) -> Result<Vec<Edge>, MstError> {
    log::debug!("Computing MST with {strategy} over {} edges", edges.len());
    let mst = match strategy {
        Strategy::Kruskal => Kruskal.spanning_tree(edges),
        Strategy::Prim => Prim.spanning_tree(edges),
    }?;
    log::debug!("{strategy} selected {} edges", mst.len());
    Ok(mst)
}
