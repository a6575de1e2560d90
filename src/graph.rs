use crate::error::MstError;
use crate::mst::{compute_mst, Strategy};
use std::collections::HashSet;
use std::fmt;

/// An undirected weighted edge between two vertex labels.
///
/// Edges are immutable once created. `(a, b, w)` and `(b, a, w)` describe the
/// same connection; equality is still structural so that results can be
/// compared against the input edge by edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Label of the first endpoint.
    vertex_a: String,
    /// Label of the second endpoint.
    vertex_b: String,
    /// Signed edge weight.
    weight: i32,
}

impl Edge {
    /// Creates a new edge.
    ///
    /// # Arguments
    ///
    /// * `vertex_a` - Label of the first endpoint.
    /// * `vertex_b` - Label of the second endpoint.
    /// * `weight` - Signed edge weight; negative values are allowed.
    ///
    /// # Returns
    ///
    /// A new `Edge`. No label validation happens here; see [`Graph::try_add_edge`].
    pub fn new(vertex_a: impl Into<String>, vertex_b: impl Into<String>, weight: i32) -> Edge {
        Edge {
            vertex_a: vertex_a.into(),
            vertex_b: vertex_b.into(),
            weight,
        }
    }

    /// Label of the first endpoint, as it was added.
    pub fn vertex_a(&self) -> &str {
        &self.vertex_a
    }

    /// Label of the second endpoint, as it was added.
    pub fn vertex_b(&self) -> &str {
        &self.vertex_b
    }

    /// The edge weight.
    pub fn weight(&self) -> i32 {
        self.weight
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.vertex_a, self.vertex_b, self.weight)
    }
}

/// An append-only collection of undirected edges.
///
/// Vertices are not stored separately: a label is a vertex of the graph iff it
/// is an endpoint of at least one edge. Parallel edges and self-loops are kept
/// as given.
///
/// # Example
///
/// ```
/// use mst_solver::{Graph, Strategy};
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1);
/// graph.add_edge("B", "C", 2);
/// graph.add_edge("A", "C", 3);
///
/// let mst = graph.compute_mst(Strategy::Kruskal).unwrap();
/// assert_eq!(mst_solver::total_weight(&mst), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Graph {
        Graph { edges: Vec::new() }
    }

    /// Appends an edge, silently dropping it when either label is empty or blank.
    ///
    /// Use [`Graph::try_add_edge`] to get an error instead.
    ///
    /// # Arguments
    ///
    /// * `vertex_a` - Label of the first endpoint.
    /// * `vertex_b` - Label of the second endpoint.
    /// * `weight` - Signed edge weight.
    pub fn add_edge(&mut self, vertex_a: &str, vertex_b: &str, weight: i32) {
        if let Err(e) = self.try_add_edge(vertex_a, vertex_b, weight) {
            log::warn!("Edge rejected: {e}");
        }
    }

    /// Appends an edge, failing with [`MstError::InvalidEdgeInput`] when either
    /// label is empty or blank.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the edge was appended. The graph is left unchanged on error.
    pub fn try_add_edge(
        &mut self,
        vertex_a: &str,
        vertex_b: &str,
        weight: i32,
    ) -> Result<(), MstError> {
        if is_blank(vertex_a) || is_blank(vertex_b) {
            return Err(MstError::InvalidEdgeInput {
                vertex_a: vertex_a.to_string(),
                vertex_b: vertex_b.to_string(),
            });
        }
        log::trace!("Adding edge {vertex_a} - {vertex_b} ({weight})");
        self.edges.push(Edge::new(vertex_a, vertex_b, weight));
        Ok(())
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Distinct vertex labels in the order they first appear.
    pub fn vertices(&self) -> Vec<&str> {
        distinct_vertices(&self.edges)
    }

    /// Number of distinct vertex labels.
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Number of edges, parallel edges and self-loops included.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no edge has been added.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Computes a minimum spanning tree of the current edge set.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The algorithm to run.
    ///
    /// # Returns
    ///
    /// The selected edges, or the error of the chosen algorithm (see [`compute_mst`]).
    pub fn compute_mst(&self, strategy: Strategy) -> Result<Vec<Edge>, MstError> {
        compute_mst(strategy, &self.edges)
    }
}

impl Extend<Edge> for Graph {
    /// Appends edges, applying the same label check as [`Graph::add_edge`].
    fn extend<T: IntoIterator<Item = Edge>>(&mut self, iter: T) {
        for edge in iter {
            if is_blank(&edge.vertex_a) || is_blank(&edge.vertex_b) {
                log::warn!("Edge rejected: blank vertex label in {edge:?}");
                continue;
            }
            self.edges.push(edge);
        }
    }
}

impl FromIterator<Edge> for Graph {
    fn from_iter<T: IntoIterator<Item = Edge>>(iter: T) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

/// Parses a weight typed by the user.
///
/// Surrounding whitespace is ignored; anything that is not a signed integer
/// fails with [`MstError::MalformedWeight`].
pub fn parse_weight(raw: &str) -> Result<i32, MstError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| MstError::MalformedWeight(raw.to_string()))
}

/// Sum of the weights of `edges`.
///
/// Weights are widened to `i64` before adding, so the sum of any realistic
/// number of `i32` weights cannot overflow.
pub fn total_weight(edges: &[Edge]) -> i64 {
    edges.iter().map(|edge| i64::from(edge.weight())).sum()
}

/// Collects distinct endpoint labels of `edges` in first-seen order.
pub(crate) fn distinct_vertices(edges: &[Edge]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut vertices = Vec::new();
    for edge in edges {
        for label in [edge.vertex_a(), edge.vertex_b()] {
            if seen.insert(label) {
                vertices.push(label);
            }
        }
    }
    vertices
}

fn is_blank(label: &str) -> bool {
    label.trim().is_empty()
}
