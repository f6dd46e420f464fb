//! Centrality ranking
//!
//! This module computes a centrality score per node of a similarity graph
//! via a damped link-analysis solve.

pub mod solver;

pub use solver::CentralityRanker;

/// Result of a centrality computation
#[derive(Debug, Clone, PartialEq)]
pub struct RankVector {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
}

impl RankVector {
    /// Create a new rank vector
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Get the number of ranked nodes
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Get the score for a specific node
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// Get the top N nodes by score, descending.
    ///
    /// Ties break on ascending node index, so the order is total and
    /// deterministic. `n` beyond the node count clamps to all nodes.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_descending_order() {
        let ranks = RankVector::new(vec![0.2, 0.9, 0.5]);
        let top = ranks.top_n(3);
        assert_eq!(top[0].0, 1);
        assert_eq!(top[1].0, 2);
        assert_eq!(top[2].0, 0);
    }

    #[test]
    fn test_top_n_tie_breaks_by_index() {
        let ranks = RankVector::new(vec![0.5, 0.5, 0.5]);
        let indices: Vec<_> = ranks.top_n(3).iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_top_n_clamps() {
        let ranks = RankVector::new(vec![0.2, 0.9]);
        assert_eq!(ranks.top_n(10).len(), 2);
        assert!(ranks.top_n(0).is_empty());
    }

    #[test]
    fn test_score_out_of_range() {
        let ranks = RankVector::new(vec![0.4]);
        assert_eq!(ranks.score(0), 0.4);
        assert_eq!(ranks.score(5), 0.0);
    }
}
