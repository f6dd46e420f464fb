//! Closed-form damped centrality solver
//!
//! Instead of iterating the PageRank fixed point to convergence, this
//! solver rearranges `r = (1-d)·1 + d·Mᵀ·r` into the linear system
//! `(I - d·Mᵀ)·r = (1-d)·1` and solves it exactly by LU decomposition.
//! The solution is the true stationary point, with no convergence
//! threshold or iteration budget involved.

use super::RankVector;
use crate::errors::{Result, SummarizerError};
use nalgebra::{DMatrix, DVector};

/// Exact centrality ranker for square non-negative similarity graphs.
#[derive(Debug, Clone)]
pub struct CentralityRanker {
    /// Damping factor (typically 0.85)
    pub damping: f64,
}

impl Default for CentralityRanker {
    fn default() -> Self {
        Self { damping: 0.85 }
    }
}

impl CentralityRanker {
    /// Create a new ranker with the default damping factor
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Compute a centrality score per node of the graph.
    ///
    /// The input graph must be square and non-negative; the caller's matrix
    /// is not modified (the ranker works on an internal copy). Scores are
    /// not normalized to any fixed total; only their relative order is
    /// meaningful.
    ///
    /// An all-zero column (a node with no outgoing similarity) is left
    /// as-is during normalization rather than being given uniform mass:
    /// isolated nodes neither send nor receive link weight and settle at
    /// exactly `1 - damping`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the damping factor is outside (0, 1) or the
    ///   graph is not square
    /// - `EmptyInput` for a zero-node graph
    /// - `SingularGraph` if the linear system has no unique solution
    pub fn rank(&self, graph: &DMatrix<f64>) -> Result<RankVector> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(SummarizerError::invalid_argument(format!(
                "damping must be strictly between 0 and 1, got {}",
                self.damping
            )));
        }

        let n = graph.nrows();
        if n == 0 {
            return Err(SummarizerError::empty_input("cannot rank an empty graph"));
        }
        if graph.ncols() != n {
            return Err(SummarizerError::invalid_argument(format!(
                "graph must be square, got {}x{}",
                graph.nrows(),
                graph.ncols()
            )));
        }

        let mut a = graph.clone();

        // Remove self-loops before measuring outgoing weight
        for i in 0..n {
            a[(i, i)] = 0.0;
        }

        // Column-stochastic normalization, then fold in the damping term:
        // after this loop, a == I - d·Mᵀ
        for col in 0..n {
            let link_sum: f64 = a.column(col).sum();
            if link_sum != 0.0 {
                for row in 0..n {
                    a[(row, col)] /= link_sum;
                }
            }
            for row in 0..n {
                a[(row, col)] *= -self.damping;
            }
            a[(col, col)] = 1.0;
        }

        let b = DVector::from_element(n, 1.0 - self.damping);
        let ranks = a
            .lu()
            .solve(&b)
            .ok_or_else(|| SummarizerError::singular_graph("linear system has no unique solution"))?;

        Ok(RankVector::new(ranks.iter().copied().collect()))
    }
}
