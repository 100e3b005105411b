//! On-demand cosine similarity over the fitted vector space.
//!
//! Similarity is computed per request, never as a precomputed pairwise
//! matrix: memory for a full matrix grows quadratically with catalogue
//! size, while a single-row scan is linear and fast enough for interactive
//! use. The [`SimilarityEngine`] trait keeps that trade-off behind a seam
//! so an approximate-nearest-neighbor index could be swapped in without
//! touching callers.
//!
//! Rows are L2-normalized at fit time, so cosine similarity reduces to a
//! sparse dot product.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{MarqueeError, Result};
use crate::vector::VectorSpace;

/// One scored candidate row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredHit {
    /// Row index of the candidate in the vector space.
    pub row: usize,
    /// Cosine similarity in [0, 1].
    pub score: f32,
}

/// Trait for ranking catalogue rows by similarity to a query row.
pub trait SimilarityEngine: Send + Sync {
    /// Score the query row against every other row.
    ///
    /// The query row itself is excluded. Results are ordered by descending
    /// score, ties broken by ascending row index.
    fn similarity_of(&self, row: usize, space: &VectorSpace) -> Result<Vec<ScoredHit>>;

    /// The top `n` rows by score, excluding the query row.
    ///
    /// When fewer than `n` candidates exist, all of them are returned.
    fn top_n(&self, row: usize, n: usize, space: &VectorSpace) -> Result<Vec<ScoredHit>> {
        let mut hits = self.similarity_of(row, space)?;
        hits.truncate(n);
        Ok(hits)
    }
}

/// Exact cosine similarity by exhaustive scan.
#[derive(Debug, Clone)]
pub struct CosineEngine {
    /// Row count below which scoring stays sequential.
    parallel_threshold: usize,
}

impl CosineEngine {
    /// Create an engine with the default parallelism threshold.
    pub fn new() -> Self {
        CosineEngine {
            parallel_threshold: 100,
        }
    }

    /// Set the row count above which scoring fans out across threads.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Cosine similarity of a single row pair.
    ///
    /// Symmetric up to floating-point rounding; a row paired with itself
    /// scores 1.0 under the normalization scheme, which makes this useful
    /// as a sanity check even though rankings exclude self.
    pub fn pairwise(&self, a: usize, b: usize, space: &VectorSpace) -> Result<f32> {
        let va = space
            .row(a)
            .ok_or_else(|| MarqueeError::invalid_operation(format!("row {a} out of range")))?;
        let vb = space
            .row(b)
            .ok_or_else(|| MarqueeError::invalid_operation(format!("row {b} out of range")))?;
        Ok(va.dot(vb).clamp(0.0, 1.0))
    }
}

impl Default for CosineEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityEngine for CosineEngine {
    fn similarity_of(&self, row: usize, space: &VectorSpace) -> Result<Vec<ScoredHit>> {
        let query = space
            .row(row)
            .ok_or_else(|| MarqueeError::invalid_operation(format!("row {row} out of range")))?;

        let scores: Vec<f32> = if space.num_rows() < self.parallel_threshold {
            space.rows().iter().map(|v| query.dot(v)).collect()
        } else {
            space.rows().par_iter().map(|v| query.dot(v)).collect()
        };

        let mut hits: Vec<ScoredHit> = scores
            .into_iter()
            .enumerate()
            .filter(|(candidate, _)| *candidate != row)
            .map(|(candidate, score)| ScoredHit {
                row: candidate,
                score: score.clamp(0.0, 1.0),
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.row.cmp(&b.row))
        });

        Ok(hits)
    }
}
