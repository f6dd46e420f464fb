//! Property-based tests using proptest

use nalgebra::DMatrix;
use proptest::prelude::*;
use textrank_summarizer::*;

/// Build a random symmetric non-negative graph from an upper-triangle
/// weight list.
fn symmetric_graph(n: usize, weights: &[f64]) -> DMatrix<f64> {
    let mut graph = DMatrix::zeros(n, n);
    let mut k = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            let w = weights[k % weights.len()];
            graph[(i, j)] = w;
            graph[(j, i)] = w;
            k += 1;
        }
    }
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_ranks_are_finite_for_random_graphs(
        n in 2usize..15,
        weights in prop::collection::vec(0.0f64..1.0, 1..64),
        damping in 0.05f64..0.95
    ) {
        let graph = symmetric_graph(n, &weights);
        let ranks = CentralityRanker::new().with_damping(damping).rank(&graph).unwrap();

        prop_assert_eq!(ranks.len(), n);
        prop_assert!(ranks.scores.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_isolated_nodes_score_base_term(
        n in 2usize..10,
        weights in prop::collection::vec(0.1f64..1.0, 1..32),
        damping in 0.05f64..0.95
    ) {
        // Append one node with no similarity to anything
        let core = symmetric_graph(n, &weights);
        let mut graph = DMatrix::zeros(n + 1, n + 1);
        graph.view_mut((0, 0), (n, n)).copy_from(&core);

        let ranks = CentralityRanker::new().with_damping(damping).rank(&graph).unwrap();
        prop_assert!((ranks.score(n) - (1.0 - damping)).abs() < 1e-9);
    }

    #[test]
    fn test_low_damping_flattens_random_graphs(
        n in 3usize..12,
        weights in prop::collection::vec(0.1f64..1.0, 8..64)
    ) {
        let graph = symmetric_graph(n, &weights);
        let ranks = CentralityRanker::new().with_damping(0.005).rank(&graph).unwrap();

        let max = ranks.scores.iter().cloned().fold(f64::MIN, f64::max);
        let min = ranks.scores.iter().cloned().fold(f64::MAX, f64::min);

        // With almost no link influence, every node sits near 1 - d
        prop_assert!(max - min < 0.1, "spread {} too large", max - min);
    }

    #[test]
    fn test_rank_does_not_mutate_input(
        n in 2usize..10,
        weights in prop::collection::vec(0.0f64..1.0, 1..32)
    ) {
        let graph = symmetric_graph(n, &weights);
        let before = graph.clone();
        let _ = CentralityRanker::new().rank(&graph).unwrap();
        prop_assert_eq!(graph, before);
    }

    #[test]
    fn test_summarize_count_contract(k in 0usize..12) {
        let text = "Machine intelligence has become a central force in the economy. \
            Banks deploy neural networks to detect fraud in card payments. \
            Hospitals use similar networks to flag anomalies in medical scans. \
            Analysts expect the technology to reshape labor markets.";

        let textrank =
            TextRank::with_config(text, SummarizerConfig::default().with_language("en")).unwrap();

        let n = textrank.sentences().len();
        prop_assert_eq!(textrank.summarize(k).len(), k.min(n));

        let v = textrank.vocabulary().len();
        prop_assert_eq!(textrank.keywords(k).len(), k.min(v));
    }

    #[test]
    fn test_top_n_is_deterministic(
        scores in prop::collection::vec(0.0f64..1.0, 1..30),
        n in 0usize..40
    ) {
        let ranks = RankVector::new(scores);
        prop_assert_eq!(ranks.top_n(n), ranks.top_n(n));
        prop_assert_eq!(ranks.top_n(n).len(), n.min(ranks.len()));
    }
}
