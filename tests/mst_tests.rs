#[cfg(test)]
mod test {
    extern crate mst_solver;
    use mst_solver::mst::UnionFind;
    use mst_solver::{compute_mst, kruskal, prim, total_weight, Edge, Graph, MstError, Strategy};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_both_strategies_on_triangle() {
        init_logger();
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 2);
        graph.add_edge("A", "C", 3);

        for strategy in Strategy::ALL {
            let mst = graph.compute_mst(strategy).unwrap();
            assert_eq!(mst, vec![Edge::new("A", "B", 1), Edge::new("B", "C", 2)]);
            assert_eq!(total_weight(&mst), 3);
        }
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();
        assert_eq!(graph.compute_mst(Strategy::Kruskal), Ok(vec![]));
        assert_eq!(
            graph.compute_mst(Strategy::Prim),
            Err(MstError::EmptyGraphForPrim)
        );
    }

    #[test]
    fn test_disconnected_graph() {
        let edges = vec![Edge::new("A", "B", 1), Edge::new("C", "D", 1)];
        assert_eq!(kruskal(&edges).len(), 2);
        assert!(matches!(
            compute_mst(Strategy::Prim, &edges),
            Err(MstError::DisconnectedGraph { .. })
        ));
    }

    #[test]
    fn test_kruskal_matches_brute_force() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let vertices = rng.gen_range(2..=6);
            let extra_edges = rng.gen_range(0..=5);
            let edges = generate_connected_graph(&mut rng, vertices, extra_edges);

            let mst = kruskal(&edges);
            assert_spanning_tree(&edges, &mst, vertices);
            assert_eq!(total_weight(&mst), brute_force_mst_weight(&edges, vertices));
        }
    }

    #[test]
    fn test_prim_matches_kruskal() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let vertices = rng.gen_range(1..=12);
            let extra_edges = rng.gen_range(0..=20);
            let edges = generate_connected_graph(&mut rng, vertices, extra_edges);
            if edges.is_empty() {
                continue;
            }

            let by_kruskal = kruskal(&edges);
            let by_prim = prim(&edges).unwrap();
            assert_spanning_tree(&edges, &by_prim, vertices);
            assert_eq!(by_prim.len(), by_kruskal.len());
            assert_eq!(total_weight(&by_prim), total_weight(&by_kruskal));
        }
    }

    #[test]
    fn test_total_weight_of_extreme_weights() {
        assert!(matches!(
            mst_solver::parse_weight("9223372036854775807"),
            Err(MstError::MalformedWeight(_))
        ));

        let weight = mst_solver::parse_weight("2147483647").unwrap();
        let mut graph = Graph::new();
        graph.add_edge("A", "B", weight);
        graph.add_edge("B", "C", weight);
        let mst = kruskal(graph.edges());
        assert_eq!(mst.len(), 2);
        assert_eq!(total_weight(&mst), 4_294_967_294);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let mut rng = StdRng::seed_from_u64(3);
        let graph: Graph = generate_connected_graph(&mut rng, 8, 10).into_iter().collect();
        let snapshot = graph.clone();
        for strategy in Strategy::ALL {
            graph.compute_mst(strategy).unwrap();
        }
        assert_eq!(graph, snapshot);
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn label(index: usize) -> String {
        format!("V{index}")
    }

    /// A random spanning tree over `vertices` labels plus `extra_edges` random
    /// edges, which may be parallel edges or self-loops.
    fn generate_connected_graph(
        rng: &mut StdRng,
        vertices: usize,
        extra_edges: usize,
    ) -> Vec<Edge> {
        let mut edges = Vec::new();
        for vertex in 1..vertices {
            let parent = rng.gen_range(0..vertex);
            edges.push(Edge::new(label(vertex), label(parent), rng.gen_range(-20..=20)));
        }
        if vertices > 0 {
            for _ in 0..extra_edges {
                let a = rng.gen_range(0..vertices);
                let b = rng.gen_range(0..vertices);
                edges.push(Edge::new(label(a), label(b), rng.gen_range(-20..=20)));
            }
        }
        // Shuffle so the tree edges are not always first.
        for i in (1..edges.len()).rev() {
            let j = rng.gen_range(0..=i);
            edges.swap(i, j);
        }
        edges
    }

    fn assert_spanning_tree(edges: &[Edge], mst: &[Edge], vertices: usize) {
        assert_eq!(mst.len(), vertices.saturating_sub(1));
        let mut sets = UnionFind::new();
        for edge in mst {
            assert!(edges.contains(edge), "{edge} is not an input edge");
            assert!(sets.union(edge.vertex_a(), edge.vertex_b()), "{edge} closes a cycle");
        }
    }

    fn brute_force_mst_weight(edges: &[Edge], vertices: usize) -> i64 {
        let mut best = i64::MAX;
        for mask in 0u32..(1 << edges.len()) {
            if mask.count_ones() as usize != vertices - 1 {
                continue;
            }
            let mut sets = UnionFind::new();
            let mut weight = 0i64;
            let mut acyclic = true;
            for (index, edge) in edges.iter().enumerate() {
                if mask & (1 << index) != 0 {
                    acyclic &= sets.union(edge.vertex_a(), edge.vertex_b());
                    weight += i64::from(edge.weight());
                }
            }
            if acyclic {
                best = best.min(weight);
            }
        }
        best
    }
}
