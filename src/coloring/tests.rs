#[cfg(test)]
mod tests {
    use crate::coloring::{color, color_graph, greedy_sequential, Coloring};
    use crate::error::ColoringError;
    use crate::generation::{generate, GenerationConfig};
    use crate::graph::{AdjacencyGraph, Graph, IndexT};

    fn complete_edges(n: IndexT) -> Vec<(IndexT, IndexT)> {
        (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect()
    }

    #[test]
    fn test_empty_graph_has_empty_coloring() {
        let coloring = color(0, &[]).unwrap();
        assert!(coloring.is_empty());
        assert_eq!(coloring.num_colors(), 0);
    }

    #[test]
    fn test_single_vertex_gets_color_one() {
        let coloring = color(1, &[]).unwrap();
        assert_eq!(coloring.colors(), &[1]);
    }

    #[test]
    fn test_isolated_vertices_share_color_one() {
        let coloring = color(6, &[]).unwrap();
        assert_eq!(coloring.colors(), &[1; 6]);
    }

    #[test]
    fn test_triangle_uses_three_colors() {
        let coloring = color(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        assert_eq!(coloring.colors(), &[1, 2, 3]);
        assert_eq!(coloring.num_colors(), 3);
    }

    #[test]
    fn test_disjoint_pairs_reuse_colors() {
        let coloring = color(4, &[(0, 1), (2, 3)]).unwrap();
        assert_eq!(coloring.colors(), &[1, 2, 1, 2]);
    }

    #[test]
    fn test_complete_graph_colors_in_order() {
        let config = GenerationConfig::new(5, 1.0, 0);
        let graph = generate(&config).unwrap();
        let coloring = color_graph(&graph).unwrap();
        assert_eq!(coloring.colors(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_first_fit_fills_lowest_gap() {
        // path 0-1-2 gives [1, 2, 1]; 3 is adjacent to 1 and 2 so it sees {2, 1}
        let coloring = color(4, &[(0, 1), (1, 2), (1, 3), (2, 3)]).unwrap();
        assert_eq!(coloring.colors(), &[1, 2, 1, 3]);

        // 3 adjacent only to 1 sees {2}, so color 1 is free again
        let coloring = color(4, &[(0, 1), (1, 2), (1, 3)]).unwrap();
        assert_eq!(coloring.colors(), &[1, 2, 1, 1]);
    }

    #[test]
    fn test_later_uncolored_neighbors_do_not_block() {
        // vertex 0 only has a higher-index neighbor, still uncolored when 0 is decided
        let coloring = color(3, &[(0, 2)]).unwrap();
        assert_eq!(coloring.colors(), &[1, 1, 2]);
    }

    #[test]
    fn test_edge_orientation_does_not_matter() {
        let forward = color(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let backward = color(4, &[(1, 0), (2, 1), (3, 2)]).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.colors(), &[1, 2, 1, 2]);
    }

    #[test]
    fn test_self_loop_is_rejected() {
        let err = color(3, &[(0, 1), (1, 1)]).unwrap_err();
        assert!(matches!(err, ColoringError::InvalidEdge { from: 1, to: 1, .. }));

        // also rejected when the loop is already in an adjacency view
        let graph = AdjacencyGraph::new(vec![vec![1], vec![0, 1]]);
        let err = greedy_sequential(&graph).unwrap_err();
        assert!(matches!(err, ColoringError::InvalidEdge { from: 1, to: 1, .. }));
    }

    #[test]
    fn test_out_of_range_neighbor_is_rejected() {
        let err = color(2, &[(0, 5)]).unwrap_err();
        assert!(matches!(err, ColoringError::InvalidEdge { to: 5, .. }));

        let graph = AdjacencyGraph::new(vec![vec![7], Vec::new()]);
        let err = greedy_sequential(&graph).unwrap_err();
        assert!(matches!(err, ColoringError::InvalidEdge { from: 0, to: 7, .. }));
    }

    #[test]
    fn test_complete_graphs_use_n_colors() {
        for n in 1..12 {
            let coloring = color(n as usize, &complete_edges(n)).unwrap();
            let expected: Vec<u32> = (1..=n).collect();
            assert_eq!(coloring.colors(), expected.as_slice());
        }
    }

    #[test]
    fn test_generated_colorings_are_proper() {
        for seed in 0..20 {
            for &p in &[0.05, 0.3, 0.7] {
                let graph = generate(&GenerationConfig::new(50, p, seed)).unwrap();
                let coloring = color_graph(&graph).unwrap();
                assert_eq!(coloring.len(), graph.num_nodes());
                assert!(coloring.colors().iter().all(|&c| c >= 1));
                assert!(
                    coloring.is_proper(graph.edges()),
                    "seed {seed}, p {p}: {} conflicts",
                    coloring.conflicts(graph.edges())
                );
            }
        }
    }

    #[test]
    fn test_color_bounds() {
        for seed in 0..20 {
            let graph = generate(&GenerationConfig::new(40, 0.4, seed)).unwrap();
            let adjacency = graph.adjacency();
            let coloring = greedy_sequential(&adjacency).unwrap();

            assert!(coloring.num_colors() <= graph.num_nodes());
            assert!(coloring.num_colors() <= Graph::max_degree(&adjacency) + 1);
            // first-fit never skips a color, so the colors used are exactly 1..=max
            assert_eq!(coloring.max_color() as usize, coloring.num_colors());
        }
    }

    #[test]
    fn test_coloring_is_deterministic() {
        let graph = generate(&GenerationConfig::new(80, 0.2, 77)).unwrap();
        let a: Coloring = color(graph.num_nodes(), graph.edges()).unwrap();
        let b: Coloring = color(graph.num_nodes(), graph.edges()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, color_graph(&graph).unwrap());
    }

    #[test]
    fn test_default_run_is_proper() {
        let graph = generate(&GenerationConfig::default()).unwrap();
        let coloring = color_graph(&graph).unwrap();
        assert_eq!(coloring.len(), 10);
        assert!(coloring.is_proper(graph.edges()));
    }
}
